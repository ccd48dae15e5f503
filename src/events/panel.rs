use crate::constants::{PANEL_SELECTOR, PANEL_SUMMARY_CLASS, PANEL_TITLE_CLASS};
use crate::core::clamp_panel_position;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Default)]
struct PanelDrag {
    active: bool,
    offset_x: f64,
    offset_y: f64,
}

/// Let the control panel be dragged by its background, title or section headers.
pub fn wire_draggable_panel(document: &web::Document) {
    let panel = match document.query_selector(PANEL_SELECTOR) {
        Ok(Some(el)) => match el.dyn_into::<web::HtmlElement>() {
            Ok(p) => p,
            Err(_) => return,
        },
        _ => {
            log::warn!("[panel] {} not found; dragging disabled", PANEL_SELECTOR);
            return;
        }
    };
    let drag = Rc::new(Cell::new(PanelDrag::default()));

    {
        let drag = drag.clone();
        let panel_down = panel.clone();
        dom::listen(&panel, "mousedown", move |ev: web::MouseEvent| {
            let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
            else {
                return;
            };
            let panel_el: &web::Element = panel_down.as_ref();
            let classes = target.class_list();
            let grabbable = &target == panel_el
                || classes.contains(PANEL_TITLE_CLASS)
                || classes.contains(PANEL_SUMMARY_CLASS);
            if !grabbable {
                return;
            }
            drag.set(PanelDrag {
                active: true,
                offset_x: ev.client_x() as f64 - panel_down.offset_left() as f64,
                offset_y: ev.client_y() as f64 - panel_down.offset_top() as f64,
            });
            _ = panel_down.style().set_property("cursor", "grabbing");
        });
    }

    {
        let drag = drag.clone();
        let panel_move = panel.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            let state = drag.get();
            if !state.active {
                return;
            }
            let Some(window) = web::window() else {
                return;
            };
            let vw = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let vh = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let (x, y) = clamp_panel_position(
                ev.client_x() as f64 - state.offset_x,
                ev.client_y() as f64 - state.offset_y,
                panel_move.offset_width() as f64,
                panel_move.offset_height() as f64,
                vw,
                vh,
            );
            let style = panel_move.style();
            _ = style.set_property("left", &format!("{}px", x));
            _ = style.set_property("top", &format!("{}px", y));
        });
    }

    let panel_up = panel;
    dom::listen(document, "mouseup", move |_: web::MouseEvent| {
        let mut state = drag.get();
        if state.active {
            state.active = false;
            drag.set(state);
            _ = panel_up.style().set_property("cursor", "grab");
        }
    });
}
