use crate::constants::{ROOM_DELETE_CLASS, ROOM_ITEM_CLASS, ROOM_NAME_CLASS};
use crate::core::{
    ControlId, KeyValueStore, RoomStore, SceneState, SAVED_ROOMS_LIST_ID, SHOW_PATH_ID,
};
use crate::dom;
use web_sys as web;

/// Push every scene value into its slider, checkbox and value label.
pub fn sync_controls(document: &web::Document, scene: &SceneState) {
    for control in ControlId::ALL {
        let value = scene.control_value(control);
        if let Some(input) = dom::input_by_id(document, control.input_id()) {
            input.set_value(&value.to_string());
        }
        update_value_label(document, control, value);
    }
    if let Some(cb) = dom::input_by_id(document, SHOW_PATH_ID) {
        cb.set_checked(scene.arc.show_path);
    }
}

#[inline]
pub fn update_value_label(document: &web::Document, control: ControlId, value: f32) {
    dom::set_text(document, control.value_label_id(), &control.format_value(value));
}

/// Rebuild the saved room list. Clicks are handled by one delegated
/// listener on the container, keyed by `data-action` / `data-room`.
pub fn render_saved_rooms<S: KeyValueStore>(document: &web::Document, rooms: &RoomStore<S>) {
    let Some(list) = document.get_element_by_id(SAVED_ROOMS_LIST_ID) else {
        return;
    };
    list.set_inner_html("");
    let names = match rooms.names() {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[rooms] cannot list saved rooms: {}", e);
            return;
        }
    };
    for name in names {
        if let Err(e) = append_room_item(document, &list, &name) {
            log::error!("[rooms] list item error: {:?}", e);
        }
    }
}

fn append_room_item(
    document: &web::Document,
    list: &web::Element,
    name: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    let item = document.create_element("div")?;
    item.set_class_name(ROOM_ITEM_CLASS);

    let name_span = document.create_element("span")?;
    name_span.set_text_content(Some(name));
    name_span.set_class_name(ROOM_NAME_CLASS);
    name_span.set_attribute("data-action", "load")?;
    name_span.set_attribute("data-room", name)?;

    let delete_btn = document.create_element("button")?;
    delete_btn.set_text_content(Some("Delete"));
    delete_btn.set_class_name(ROOM_DELETE_CLASS);
    delete_btn.set_attribute("data-action", "delete")?;
    delete_btn.set_attribute("data-room", name)?;

    item.append_child(&name_span)?;
    item.append_child(&delete_btn)?;
    list.append_child(&item)?;
    Ok(())
}
