use super::defaults::{
    ARC_SEGMENTS, DEFAULT_ARC_CENTER, DEFAULT_ARC_LENGTH, DEFAULT_ARC_ROTATION,
    DEFAULT_LIGHT_POSITION, DEFAULT_SHOW_ARC_PATH, LIGHT_DISTANCE,
};
use glam::Vec3;

pub const POSITION_MIN: f32 = 0.0;
pub const POSITION_MAX: f32 = 100.0;

/// Angular range the light travels along, centered on `rotation_deg`.
///
/// The arc lies in the horizontal plane at `center.y`, at a fixed
/// [`LIGHT_DISTANCE`] from `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    pub length_deg: f32,
    pub center: Vec3,
    pub rotation_deg: f32,
}

impl Default for ArcGeometry {
    fn default() -> Self {
        Self {
            length_deg: DEFAULT_ARC_LENGTH,
            center: DEFAULT_ARC_CENTER,
            rotation_deg: DEFAULT_ARC_ROTATION,
        }
    }
}

impl ArcGeometry {
    #[inline]
    pub fn start_deg(&self) -> f32 {
        self.rotation_deg - self.length_deg / 2.0
    }

    #[inline]
    pub fn end_deg(&self) -> f32 {
        self.rotation_deg + self.length_deg / 2.0
    }

    /// Angle in degrees for a position in `[0, 100]` along the arc.
    pub fn angle_at(&self, position: f32) -> f32 {
        let t = position / POSITION_MAX;
        let start = self.start_deg();
        start + t * (self.end_deg() - start)
    }

    /// World-space point on the arc for a position in `[0, 100]`.
    pub fn point_at(&self, position: f32) -> Vec3 {
        self.point_at_angle(self.angle_at(position))
    }

    #[inline]
    fn point_at_angle(&self, angle_deg: f32) -> Vec3 {
        let radians = angle_deg.to_radians();
        Vec3::new(
            self.center.x + radians.cos() * LIGHT_DISTANCE,
            self.center.y,
            self.center.z + radians.sin() * LIGHT_DISTANCE,
        )
    }

    /// `segments + 1` evenly spaced points from the start to the end angle.
    pub fn path_points(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                self.point_at(t * POSITION_MAX)
            })
            .collect()
    }
}

/// Partial update of the arc rig; `None` fields are left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArcUpdate {
    pub position: Option<f32>,
    pub length_deg: Option<f32>,
    pub center_x: Option<f32>,
    pub center_y: Option<f32>,
    pub center_z: Option<f32>,
    pub rotation_deg: Option<f32>,
    pub show_path: Option<bool>,
}

/// The light's arc plus where along it the light currently sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcRig {
    pub geometry: ArcGeometry,
    position: f32,
    pub show_path: bool,
}

impl Default for ArcRig {
    fn default() -> Self {
        Self {
            geometry: ArcGeometry::default(),
            position: DEFAULT_LIGHT_POSITION,
            show_path: DEFAULT_SHOW_ARC_PATH,
        }
    }
}

impl ArcRig {
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn set_position(&mut self, position: f32) {
        if position.is_finite() {
            self.position = position.clamp(POSITION_MIN, POSITION_MAX);
        }
    }

    /// Shared position of the directional light, point light and marker.
    #[inline]
    pub fn light_position(&self) -> Vec3 {
        self.geometry.point_at(self.position)
    }

    pub fn path_points(&self) -> Vec<Vec3> {
        self.geometry.path_points(ARC_SEGMENTS)
    }

    /// Apply every `Some` field; non-finite numbers are ignored.
    pub fn apply(&mut self, update: ArcUpdate) {
        if let Some(p) = update.position {
            self.set_position(p);
        }
        let g = &mut self.geometry;
        if let Some(v) = update.length_deg.filter(|v| v.is_finite()) {
            g.length_deg = v;
        }
        if let Some(v) = update.center_x.filter(|v| v.is_finite()) {
            g.center.x = v;
        }
        if let Some(v) = update.center_y.filter(|v| v.is_finite()) {
            g.center.y = v;
        }
        if let Some(v) = update.center_z.filter(|v| v.is_finite()) {
            g.center.z = v;
        }
        if let Some(v) = update.rotation_deg.filter(|v| v.is_finite()) {
            g.rotation_deg = v;
        }
        if let Some(show) = update.show_path {
            self.show_path = show;
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn toggle_path(&mut self) {
        self.show_path = !self.show_path;
    }
}
