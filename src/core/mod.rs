pub mod arc;
pub mod camera;
pub mod controls;
pub mod defaults;
pub mod geometry;
pub mod labels;
pub mod rooms;
pub mod scene;
pub mod settings;

pub use arc::*;
pub use camera::*;
pub use controls::*;
pub use rooms::*;
pub use scene::*;
pub use settings::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
