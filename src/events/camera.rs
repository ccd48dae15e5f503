use crate::constants::CANVAS_DISABLED_CLASS;
use crate::core::{
    CameraMode, OrbitCamera, CAMERA_MODE_SELECTOR, ENABLE_CAMERA_ID, RESET_CAMERA_BUTTON_ID,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct CameraWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
}

pub fn wire_camera_handlers(w: CameraWiring) {
    wire_mouse(&w);
    wire_mode_radios(&w);
    wire_reset_button(&w);
    wire_enable_checkbox(&w);
}

fn wire_mouse(w: &CameraWiring) {
    let camera = w.camera.clone();
    dom::listen(&w.canvas, "mousedown", move |ev: web::MouseEvent| {
        camera
            .borrow_mut()
            .begin_drag(ev.client_x() as f32, ev.client_y() as f32);
    });

    let camera = w.camera.clone();
    dom::listen(&w.canvas, "mousemove", move |ev: web::MouseEvent| {
        let mut cam = camera.borrow_mut();
        if cam.is_dragging() {
            cam.drag_to(ev.client_x() as f32, ev.client_y() as f32);
        }
    });

    for event in ["mouseup", "mouseleave"] {
        let camera = w.camera.clone();
        dom::listen(&w.canvas, event, move |_: web::MouseEvent| {
            camera.borrow_mut().end_drag();
        });
    }
}

fn wire_mode_radios(w: &CameraWiring) {
    let radios = match w.document.query_selector_all(CAMERA_MODE_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[camera] mode selector error: {:?}", e);
            return;
        }
    };
    for i in 0..radios.length() {
        let Some(node) = radios.item(i) else {
            continue;
        };
        let camera = w.camera.clone();
        dom::listen(&node, "change", move |ev: web::Event| {
            let Some(radio) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            else {
                return;
            };
            match radio.value().parse::<CameraMode>() {
                Ok(mode) => {
                    camera.borrow_mut().mode = mode;
                    log::info!("[camera] mode: {:?}", mode);
                }
                Err(e) => log::warn!("[camera] {}", e),
            }
        });
    }
}

fn wire_reset_button(w: &CameraWiring) {
    let camera = w.camera.clone();
    dom::add_click_listener(&w.document, RESET_CAMERA_BUTTON_ID, move || {
        camera.borrow_mut().reset();
    });
}

fn wire_enable_checkbox(w: &CameraWiring) {
    let camera = w.camera.clone();
    let canvas = w.canvas.clone();
    dom::add_listener(&w.document, ENABLE_CAMERA_ID, "change", move |ev: web::Event| {
        let Some(cb) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let enabled = cb.checked();
        camera.borrow_mut().set_enabled(enabled);
        let classes = canvas.class_list();
        if enabled {
            _ = classes.remove_1(CANVAS_DISABLED_CLASS);
        } else {
            _ = classes.add_1(CANVAS_DISABLED_CLASS);
        }
        log::info!("[camera] controls {}", if enabled { "enabled" } else { "disabled" });
    });
}
