use crate::core::{OrbitCamera, SceneState};
use crate::overlay::LabelOverlay;
use crate::render::{self, FrameParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub labels: Option<LabelOverlay>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();

        let rect = self.canvas.get_bounding_client_rect();
        let (css_w, css_h) = (rect.width() as f32, rect.height() as f32);
        let (px_w, px_h) = (self.canvas.width(), self.canvas.height());

        let view_proj = {
            let mut cam = self.camera.borrow_mut();
            if px_h > 0 {
                cam.set_aspect(px_w as f32 / px_h as f32);
            }
            cam.view_proj()
        };

        if let Some(g) = self.gpu.as_mut() {
            let scene = self.scene.borrow();
            g.sync_scene(&scene);
            g.resize_if_needed(px_w, px_h);
            let params = FrameParams {
                view_proj,
                light_position: scene.light_position(),
                ambient: scene.lighting.ambient,
                directional: scene.lighting.directional,
                point: scene.lighting.point,
            };
            if let Err(e) = g.render(&params) {
                log::error!("render error: {:?}", e);
            }
        }

        if let Some(labels) = &self.labels {
            labels.update(view_proj, elapsed, css_w, css_h);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
