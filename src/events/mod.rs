pub mod camera;
pub mod controls;
pub mod panel;

pub use camera::{wire_camera_handlers, CameraWiring};
pub use controls::{wire_control_panel, ControlWiring};
pub use panel::wire_draggable_panel;
