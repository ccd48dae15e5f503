use super::defaults::*;
use serde::{Deserialize, Serialize};

/// Rectangular opening cut into the front and back walls.
///
/// `position_x` is the horizontal offset of the opening's center from the
/// wall's center, `position_y` the height of its bottom edge above the floor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOpening {
    #[serde(rename = "windowWidth")]
    pub width: f32,
    #[serde(rename = "windowHeight")]
    pub height: f32,
    #[serde(rename = "windowPositionX")]
    pub position_x: f32,
    #[serde(rename = "windowPositionY")]
    pub position_y: f32,
}

impl Default for WindowOpening {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            position_x: DEFAULT_WINDOW_POSITION_X,
            position_y: DEFAULT_WINDOW_POSITION_Y,
        }
    }
}

/// Snapshot of every control value, as persisted under a room name.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSettings {
    pub light_position: f32,
    pub arc_length: f32,
    pub arc_center_x: f32,
    pub arc_center_y: f32,
    pub arc_center_z: f32,
    pub arc_rotation: f32,
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub point_intensity: f32,
    pub show_arc_path: bool,
    #[serde(flatten)]
    pub window: WindowOpening,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            light_position: DEFAULT_LIGHT_POSITION,
            arc_length: DEFAULT_ARC_LENGTH,
            arc_center_x: DEFAULT_ARC_CENTER.x,
            arc_center_y: DEFAULT_ARC_CENTER.y,
            arc_center_z: DEFAULT_ARC_CENTER.z,
            arc_rotation: DEFAULT_ARC_ROTATION,
            ambient_intensity: DEFAULT_AMBIENT_INTENSITY,
            directional_intensity: DEFAULT_DIRECTIONAL_INTENSITY,
            point_intensity: DEFAULT_POINT_INTENSITY,
            show_arc_path: DEFAULT_SHOW_ARC_PATH,
            window: WindowOpening::default(),
        }
    }
}
