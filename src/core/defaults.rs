use glam::Vec3;

// Startup values for every control; `reset` restores these.

// Arc / light placement
pub const DEFAULT_LIGHT_POSITION: f32 = 50.0; // percent along the arc
pub const DEFAULT_ARC_LENGTH: f32 = 180.0; // degrees
pub const DEFAULT_ARC_CENTER: Vec3 = Vec3::new(0.0, 5.0, 0.0);
pub const DEFAULT_ARC_ROTATION: f32 = 225.0; // degrees
pub const DEFAULT_SHOW_ARC_PATH: bool = true;

// Light intensities
pub const DEFAULT_AMBIENT_INTENSITY: f32 = 0.4;
pub const DEFAULT_DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DEFAULT_POINT_INTENSITY: f32 = 0.8;

// Window opening (y is the sill height above the floor)
pub const DEFAULT_WINDOW_WIDTH: f32 = 4.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 3.0;
pub const DEFAULT_WINDOW_POSITION_X: f32 = 0.0;
pub const DEFAULT_WINDOW_POSITION_Y: f32 = 1.5;

// Distance of the light from the arc center
pub const LIGHT_DISTANCE: f32 = 15.0;
// Line segments used to draw the arc path
pub const ARC_SEGMENTS: usize = 50;
// Point light cutoff distance
pub const POINT_LIGHT_RANGE: f32 = 100.0;

// Room shell
pub const ROOM_WIDTH: f32 = 10.0;
pub const ROOM_HEIGHT: f32 = 8.0;
pub const ROOM_DEPTH: f32 = 10.0;

// Light marker sphere
pub const MARKER_RADIUS: f32 = 0.2;
pub const MARKER_SEGMENTS: u32 = 16;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(15.0, 10.0, 15.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 4.0, 0.0);
pub const FRUSTUM_SIZE: f32 = 20.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Local storage key holding every saved room
pub const STORAGE_KEY: &str = "lightingRooms";
