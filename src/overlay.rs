use crate::constants::LABEL_LAYER_ID;
use crate::core::labels::{project_to_screen, WallLabel, WALL_LABELS};
use glam::Mat4;
use wasm_bindgen::JsCast;
use web_sys as web;

const LAYER_STYLE: &str =
    "position:absolute;left:0;top:0;width:100%;height:100%;pointer-events:none;overflow:hidden";

/// DOM speech-bubble tags that follow the walls on screen.
pub struct LabelOverlay {
    items: Vec<(WallLabel, web::HtmlElement)>,
}

impl LabelOverlay {
    /// Build the label layer, reusing `#wall-labels` when the page provides one.
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let layer = match document.get_element_by_id(LABEL_LAYER_ID) {
            Some(el) => el,
            None => {
                let el = document
                    .create_element("div")
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                el.set_id(LABEL_LAYER_ID);
                _ = el.set_attribute("style", LAYER_STYLE);
                let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
                body.append_child(&el)
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                el
            }
        };
        layer.set_inner_html("");

        let mut items = Vec::with_capacity(WALL_LABELS.len());
        for label in WALL_LABELS {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_class_name("lr-wall-label");
            el.set_text_content(Some(label.name));
            _ = el.set_attribute(
                "style",
                &format!(
                    "position:absolute;transform:translate(-50%,-100%);padding:6px 12px;\
                     background:#fff;color:#333;font:bold 13px Arial,sans-serif;\
                     border:3px solid {};border-radius:6px;white-space:nowrap",
                    label.css_color()
                ),
            );
            layer
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            items.push((label, el));
        }
        Ok(Self { items })
    }

    /// Reposition every label for this frame; labels off screen are hidden.
    /// `css_w`/`css_h` are the canvas size in CSS pixels.
    pub fn update(&self, view_proj: Mat4, time_sec: f32, css_w: f32, css_h: f32) {
        for (label, el) in &self.items {
            let style = el.style();
            match project_to_screen(view_proj, label.position_at(time_sec), css_w, css_h) {
                Some((x, y)) => {
                    _ = style.set_property("display", "block");
                    _ = style.set_property("left", &format!("{:.1}px", x));
                    _ = style.set_property("top", &format!("{:.1}px", y));
                }
                None => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}
