use glam::{Mat4, Vec3, Vec4};

pub const LABEL_FLOAT_AMPLITUDE: f32 = 0.1;

/// A floating name tag anchored to one wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallLabel {
    pub name: &'static str,
    pub anchor: Vec3,
    pub color: u32,
}

pub const WALL_LABELS: [WallLabel; 4] = [
    WallLabel {
        name: "Front Left Wall",
        anchor: Vec3::new(0.0, 4.0, 5.0),
        color: 0x4CAF50,
    },
    WallLabel {
        name: "Back Right Wall",
        anchor: Vec3::new(0.0, 4.0, -5.0),
        color: 0x2196F3,
    },
    WallLabel {
        name: "Back Left Wall",
        anchor: Vec3::new(-5.0, 4.0, 0.0),
        color: 0xFF9800,
    },
    WallLabel {
        name: "Front Right Wall",
        anchor: Vec3::new(5.0, 4.0, 0.0),
        color: 0x9C27B0,
    },
];

impl WallLabel {
    /// Anchor with the idle bobbing applied; the phase depends on x so labels drift apart.
    pub fn position_at(&self, time_sec: f32) -> Vec3 {
        let bob = (time_sec + self.anchor.x).sin() * LABEL_FLOAT_AMPLITUDE;
        self.anchor + Vec3::new(0.0, bob, 0.0)
    }

    /// CSS color string, e.g. `#4caf50`.
    pub fn css_color(&self) -> String {
        format!("#{:06x}", self.color & 0xff_ffff)
    }
}

/// Project a world point to canvas pixels (origin top-left).
///
/// Returns `None` when the point falls outside the clip volume.
pub fn project_to_screen(
    view_proj: Mat4,
    world: Vec3,
    width: f32,
    height: f32,
) -> Option<(f32, f32)> {
    let clip = view_proj * Vec4::new(world.x, world.y, world.z, 1.0);
    if clip.w.abs() < f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(-1.0..=1.0).contains(&ndc.x)
        || !(-1.0..=1.0).contains(&ndc.y)
        || !(0.0..=1.0).contains(&ndc.z)
    {
        return None;
    }
    let x = (ndc.x + 1.0) * 0.5 * width;
    let y = (1.0 - ndc.y) * 0.5 * height;
    Some((x, y))
}
