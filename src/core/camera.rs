use super::defaults::{CAMERA_EYE, CAMERA_FAR, CAMERA_NEAR, CAMERA_TARGET, FRUSTUM_SIZE};
use glam::{Mat4, Vec3};
use std::f32::consts::PI;
use std::str::FromStr;

pub const ORBIT_SENSITIVITY: f32 = 0.01; // radians per pixel
pub const PAN_SENSITIVITY: f32 = 0.05; // world units per pixel
pub const PHI_MARGIN: f32 = 0.1; // keeps the orbit off the poles

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    Orbit,
    Pan,
}

impl FromStr for CameraMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orbit" => Ok(CameraMode::Orbit),
            "pan" => Ok(CameraMode::Pan),
            other => Err(format!("unknown camera mode '{}'", other)),
        }
    }
}

/// Spherical coordinates with `phi` measured from +Y and `theta` around Y from +Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct DragStart {
    mouse: (f32, f32),
    eye: Vec3,
    target: Vec3,
}

/// Orthographic camera with mouse-driven orbit and pan.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub mode: CameraMode,
    enabled: bool,
    aspect: f32,
    drag: Option<DragStart>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            mode: CameraMode::Orbit,
            enabled: true,
            aspect: 1.0,
            drag: None,
        }
    }
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        let mut cam = Self::default();
        cam.set_aspect(aspect);
        cam
    }

    pub fn reset(&mut self) {
        self.eye = CAMERA_EYE;
        self.target = CAMERA_TARGET;
        self.drag = None;
    }

    #[inline]
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drag = None;
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.drag = Some(DragStart {
            mouse: (x, y),
            eye: self.eye,
            target: self.target,
        });
    }

    /// Move relative to where the drag began; ignored when no drag is active.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        let Some(start) = self.drag else {
            return;
        };
        if !self.enabled {
            return;
        }
        let dx = x - start.mouse.0;
        let dy = y - start.mouse.1;
        match self.mode {
            CameraMode::Orbit => self.orbit_from(start, dx, dy),
            CameraMode::Pan => self.pan_from(start, dx, dy),
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    fn orbit_from(&mut self, start: DragStart, dx: f32, dy: f32) {
        let mut s = Spherical::from_offset(start.eye - start.target);
        s.theta -= dx * ORBIT_SENSITIVITY;
        s.phi = (s.phi + dy * ORBIT_SENSITIVITY).clamp(PHI_MARGIN, PI - PHI_MARGIN);
        self.eye = start.target + s.to_offset();
    }

    fn pan_from(&mut self, start: DragStart, dx: f32, dy: f32) {
        let (right, up) = camera_basis(start.eye, start.target);
        let offset = right * (-dx * PAN_SENSITIVITY) + up * (dy * PAN_SENSITIVITY);
        self.eye = start.eye + offset;
        self.target = start.target + offset;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_h = FRUSTUM_SIZE / 2.0;
        let half_w = half_h * self.aspect;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera right and up vectors in world space for a Y-up look-at.
pub fn camera_basis(eye: Vec3, target: Vec3) -> (Vec3, Vec3) {
    let forward = (target - eye).normalize_or_zero();
    let right = forward.cross(Vec3::Y).normalize_or_zero();
    let right = if right == Vec3::ZERO { Vec3::X } else { right };
    let up = right.cross(forward);
    (right, up)
}
