use super::arc::{ArcRig, ArcUpdate};
use super::controls::ControlId;
use super::defaults::*;
use super::geometry::{self, MeshData, MeshVertex, RoomColors, RoomDims};
use super::settings::{RoomSettings, WindowOpening};
use glam::Vec3;

pub const WALL_COLOR: u32 = 0xcccccc;
pub const FLOOR_COLOR: u32 = 0x888888;
pub const MARKER_COLOR: u32 = 0xffff00;
pub const PATH_COLOR: u32 = 0x00ff00;
pub const PATH_OPACITY: f32 = 0.7;

/// Intensities of the three scene lights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
    pub point: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: DEFAULT_AMBIENT_INTENSITY,
            directional: DEFAULT_DIRECTIONAL_INTENSITY,
            point: DEFAULT_POINT_INTENSITY,
        }
    }
}

/// Everything the control panel can change, plus a revision counter the
/// renderer uses to know when geometry must be rebuilt.
#[derive(Clone, Debug, Default)]
pub struct SceneState {
    pub arc: ArcRig,
    pub lighting: Lighting,
    pub window: WindowOpening,
    revision: u64,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped whenever the light, the arc path or the room shell changes.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    #[inline]
    pub fn light_position(&self) -> Vec3 {
        self.arc.light_position()
    }

    /// Apply one slider value. Returns `false` (and changes nothing) for
    /// non-finite input such as an unparsable field.
    pub fn apply_control(&mut self, control: ControlId, value: f64) -> bool {
        let value = value as f32;
        if !value.is_finite() {
            return false;
        }
        let v = control.clamp(value);
        match control {
            ControlId::LightPosition => self.update_arc(ArcUpdate {
                position: Some(v),
                ..Default::default()
            }),
            ControlId::ArcLength => self.update_arc(ArcUpdate {
                length_deg: Some(v),
                ..Default::default()
            }),
            ControlId::ArcCenterX => self.update_arc(ArcUpdate {
                center_x: Some(v),
                ..Default::default()
            }),
            ControlId::ArcCenterY => self.update_arc(ArcUpdate {
                center_y: Some(v),
                ..Default::default()
            }),
            ControlId::ArcCenterZ => self.update_arc(ArcUpdate {
                center_z: Some(v),
                ..Default::default()
            }),
            ControlId::ArcRotation => self.update_arc(ArcUpdate {
                rotation_deg: Some(v),
                ..Default::default()
            }),
            // Intensities only feed uniforms; no geometry rebuild
            ControlId::AmbientIntensity => self.lighting.ambient = v,
            ControlId::DirectionalIntensity => self.lighting.directional = v,
            ControlId::PointIntensity => self.lighting.point = v,
            ControlId::WindowWidth => self.update_window(|w| w.width = v),
            ControlId::WindowHeight => self.update_window(|w| w.height = v),
            ControlId::WindowPositionX => self.update_window(|w| w.position_x = v),
            ControlId::WindowPositionY => self.update_window(|w| w.position_y = v),
        }
        true
    }

    /// Current value backing a slider.
    pub fn control_value(&self, control: ControlId) -> f32 {
        let s = self.snapshot();
        match control {
            ControlId::LightPosition => s.light_position,
            ControlId::ArcLength => s.arc_length,
            ControlId::ArcCenterX => s.arc_center_x,
            ControlId::ArcCenterY => s.arc_center_y,
            ControlId::ArcCenterZ => s.arc_center_z,
            ControlId::ArcRotation => s.arc_rotation,
            ControlId::AmbientIntensity => s.ambient_intensity,
            ControlId::DirectionalIntensity => s.directional_intensity,
            ControlId::PointIntensity => s.point_intensity,
            ControlId::WindowWidth => s.window.width,
            ControlId::WindowHeight => s.window.height,
            ControlId::WindowPositionX => s.window.position_x,
            ControlId::WindowPositionY => s.window.position_y,
        }
    }

    pub fn update_arc(&mut self, update: ArcUpdate) {
        self.arc.apply(update);
        self.touch();
    }

    fn update_window(&mut self, f: impl FnOnce(&mut WindowOpening)) {
        f(&mut self.window);
        self.touch();
    }

    pub fn set_show_path(&mut self, show: bool) {
        if self.arc.show_path != show {
            self.arc.show_path = show;
            self.touch();
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn toggle_path(&mut self) {
        self.arc.toggle_path();
        self.touch();
    }

    pub fn snapshot(&self) -> RoomSettings {
        let g = &self.arc.geometry;
        RoomSettings {
            light_position: self.arc.position(),
            arc_length: g.length_deg,
            arc_center_x: g.center.x,
            arc_center_y: g.center.y,
            arc_center_z: g.center.z,
            arc_rotation: g.rotation_deg,
            ambient_intensity: self.lighting.ambient,
            directional_intensity: self.lighting.directional,
            point_intensity: self.lighting.point,
            show_arc_path: self.arc.show_path,
            window: self.window,
        }
    }

    /// Replace every parameter with a saved room. Values go through the same
    /// clamping as slider input.
    pub fn restore(&mut self, s: &RoomSettings) {
        let values = [
            (ControlId::LightPosition, s.light_position),
            (ControlId::ArcLength, s.arc_length),
            (ControlId::ArcCenterX, s.arc_center_x),
            (ControlId::ArcCenterY, s.arc_center_y),
            (ControlId::ArcCenterZ, s.arc_center_z),
            (ControlId::ArcRotation, s.arc_rotation),
            (ControlId::AmbientIntensity, s.ambient_intensity),
            (ControlId::DirectionalIntensity, s.directional_intensity),
            (ControlId::PointIntensity, s.point_intensity),
            (ControlId::WindowWidth, s.window.width),
            (ControlId::WindowHeight, s.window.height),
            (ControlId::WindowPositionX, s.window.position_x),
            (ControlId::WindowPositionY, s.window.position_y),
        ];
        for (control, value) in values {
            self.apply_control(control, value as f64);
        }
        self.arc.show_path = s.show_arc_path;
        self.touch();
    }

    pub fn reset(&mut self) {
        self.restore(&RoomSettings::default());
    }

    pub fn room_mesh(&self) -> MeshData {
        geometry::build_room(
            RoomDims {
                width: ROOM_WIDTH,
                height: ROOM_HEIGHT,
                depth: ROOM_DEPTH,
            },
            &self.window,
            RoomColors {
                wall: geometry::hex_color(WALL_COLOR, 1.0),
                floor: geometry::hex_color(FLOOR_COLOR, 1.0),
            },
        )
    }

    pub fn marker_mesh(&self) -> MeshData {
        geometry::build_sphere(
            self.light_position(),
            MARKER_RADIUS,
            MARKER_SEGMENTS,
            MARKER_SEGMENTS,
            geometry::hex_color(MARKER_COLOR, 1.0),
        )
    }

    /// Arc path line strip; empty while the path is hidden.
    pub fn path_vertices(&self) -> Vec<MeshVertex> {
        if !self.arc.show_path {
            return Vec::new();
        }
        geometry::line_strip(
            &self.arc.path_points(),
            geometry::hex_color(PATH_COLOR, PATH_OPACITY),
        )
    }
}
