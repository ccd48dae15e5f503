#![cfg(target_arch = "wasm32")]
use crate::core::{OrbitCamera, RoomStore, SceneState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod storage;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-light-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .query_selector(constants::CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", constants::CANVAS_SELECTOR))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(SceneState::new()));
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let camera = Rc::new(RefCell::new(OrbitCamera::new(aspect)));
    let rooms = Rc::new(RefCell::new(RoomStore::new(storage::LocalStorage::open()?)));

    ui::sync_controls(&document, &scene.borrow());
    ui::render_saved_rooms(&document, &*rooms.borrow());

    events::wire_control_panel(events::ControlWiring {
        document: document.clone(),
        scene: scene.clone(),
        rooms: rooms.clone(),
    });
    events::wire_camera_handlers(events::CameraWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        camera: camera.clone(),
    });
    events::wire_draggable_panel(&document);

    let labels = match overlay::LabelOverlay::new(&document) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[labels] overlay unavailable: {:?}", e);
            None
        }
    };

    let gpu = frame::init_gpu(&canvas).await;
    {
        let s = scene.borrow();
        let light = s.light_position();
        log::info!(
            "[scene] ready: arc={}° rot={}° light=({:.2},{:.2},{:.2})",
            s.arc.geometry.length_deg,
            s.arc.geometry.rotation_deg,
            light.x,
            light.y,
            light.z
        );
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        canvas,
        gpu,
        labels,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
