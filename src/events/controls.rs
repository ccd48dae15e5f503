use crate::constants::{delete_confirm_message, EMPTY_NAME_ALERT, RESET_CONFIRM};
use crate::core::{
    ControlId, RoomError, RoomStore, SceneState, RESET_BUTTON_ID, ROOM_NAME_INPUT_ID,
    SAVED_ROOMS_LIST_ID, SAVE_BUTTON_ID, SHOW_PATH_ID,
};
use crate::dom;
use crate::storage::LocalStorage;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub scene: Rc<RefCell<SceneState>>,
    pub rooms: Rc<RefCell<RoomStore<LocalStorage>>>,
}

pub fn wire_control_panel(w: ControlWiring) {
    for control in ControlId::ALL {
        wire_slider(&w, control);
    }
    wire_show_path(&w);
    wire_save_button(&w);
    wire_reset_button(&w);
    wire_saved_rooms_list(&w);
}

fn wire_slider(w: &ControlWiring, control: ControlId) {
    let w2 = w.clone();
    dom::add_listener(
        &w.document,
        control.input_id(),
        "input",
        move |ev: web::Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            else {
                return;
            };
            let value = input.value_as_number();
            let mut scene = w2.scene.borrow_mut();
            if scene.apply_control(control, value) {
                ui::update_value_label(&w2.document, control, scene.control_value(control));
            } else {
                log::warn!("[controls] ignoring non-numeric {}", control.input_id());
            }
        },
    );
}

fn wire_show_path(w: &ControlWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.document, SHOW_PATH_ID, "change", move |ev: web::Event| {
        if let Some(cb) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        {
            w2.scene.borrow_mut().set_show_path(cb.checked());
        }
    });
}

fn wire_save_button(w: &ControlWiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, SAVE_BUTTON_ID, move || {
        let Some(input) = dom::input_by_id(&w2.document, ROOM_NAME_INPUT_ID) else {
            return;
        };
        let snapshot = w2.scene.borrow().snapshot();
        let result = w2.rooms.borrow_mut().save(&input.value(), snapshot);
        match result {
            Ok(_) => {
                input.set_value("");
                ui::render_saved_rooms(&w2.document, &*w2.rooms.borrow());
            }
            Err(RoomError::EmptyName) => dom::alert(EMPTY_NAME_ALERT),
            Err(e) => log::error!("[rooms] save failed: {}", e),
        }
    });
}

fn wire_reset_button(w: &ControlWiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, RESET_BUTTON_ID, move || {
        if !dom::confirm(RESET_CONFIRM) {
            return;
        }
        let mut scene = w2.scene.borrow_mut();
        scene.reset();
        ui::sync_controls(&w2.document, &scene);
        log::info!("[controls] reset all controls to defaults");
    });
}

fn wire_saved_rooms_list(w: &ControlWiring) {
    let w2 = w.clone();
    dom::add_listener(
        &w.document,
        SAVED_ROOMS_LIST_ID,
        "click",
        move |ev: web::MouseEvent| {
            let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
            else {
                return;
            };
            let Ok(Some(el)) = target.closest("[data-action]") else {
                return;
            };
            let (Some(action), Some(name)) =
                (el.get_attribute("data-action"), el.get_attribute("data-room"))
            else {
                return;
            };
            ev.stop_propagation();
            match action.as_str() {
                "load" => load_room(&w2, &name),
                "delete" => delete_room(&w2, &name),
                other => log::warn!("[rooms] unknown list action '{}'", other),
            }
        },
    );
}

fn load_room(w: &ControlWiring, name: &str) {
    let loaded = w.rooms.borrow().load(name);
    match loaded {
        Ok(settings) => {
            let mut scene = w.scene.borrow_mut();
            scene.restore(&settings);
            ui::sync_controls(&w.document, &scene);
            log::info!("[rooms] loaded room: {}", name);
        }
        Err(e @ RoomError::NotFound(_)) => log::error!("[rooms] {}", e),
        Err(e) => log::error!("[rooms] load failed: {}", e),
    }
}

fn delete_room(w: &ControlWiring, name: &str) {
    if !dom::confirm(&delete_confirm_message(name)) {
        return;
    }
    let result = w.rooms.borrow_mut().delete(name);
    match result {
        Ok(true) => {}
        Ok(false) => log::warn!("[rooms] nothing to delete for '{}'", name),
        Err(e) => log::error!("[rooms] delete failed: {}", e),
    }
    ui::render_saved_rooms(&w.document, &*w.rooms.borrow());
}
