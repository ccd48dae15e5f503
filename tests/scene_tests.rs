// Host-side tests for scene state driven by the control panel.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lighting {
    pub mod defaults {
        include!("../src/core/defaults.rs");
    }
    pub mod arc {
        include!("../src/core/arc.rs");
    }
    pub mod controls {
        include!("../src/core/controls.rs");
    }
    pub mod settings {
        include!("../src/core/settings.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use glam::Vec3;
use lighting::controls::ControlId;
use lighting::defaults::*;
use lighting::scene::*;
use lighting::settings::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn slider_moves_light_and_bumps_revision() {
    let mut scene = SceneState::new();
    let before = scene.light_position();
    assert!(scene.apply_control(ControlId::LightPosition, 75.0));
    assert!(approx(scene.arc.position(), 75.0));
    assert_eq!(scene.revision(), 1);
    assert!((scene.light_position() - before).length() > 1.0);
}

#[test]
fn intensity_change_does_not_rebuild_geometry() {
    let mut scene = SceneState::new();
    assert!(scene.apply_control(ControlId::AmbientIntensity, 1.5));
    assert!(scene.apply_control(ControlId::PointIntensity, 0.0));
    assert!(approx(scene.lighting.ambient, 1.5));
    assert!(approx(scene.lighting.point, 0.0));
    assert_eq!(scene.revision(), 0);
}

#[test]
fn non_numeric_input_is_rejected() {
    let mut scene = SceneState::new();
    assert!(!scene.apply_control(ControlId::ArcLength, f64::NAN));
    assert!(approx(scene.arc.geometry.length_deg, DEFAULT_ARC_LENGTH));
    assert_eq!(scene.revision(), 0);
}

#[test]
fn slider_values_are_clamped_to_their_range() {
    let mut scene = SceneState::new();
    scene.apply_control(ControlId::ArcLength, 720.0);
    scene.apply_control(ControlId::WindowWidth, 0.1);
    scene.apply_control(ControlId::ArcCenterX, -40.0);
    assert!(approx(scene.control_value(ControlId::ArcLength), 360.0));
    assert!(approx(scene.control_value(ControlId::WindowWidth), 0.5));
    assert!(approx(scene.control_value(ControlId::ArcCenterX), -10.0));
}

#[test]
fn window_controls_reshape_the_room() {
    let mut scene = SceneState::new();
    let before = scene.room_mesh().surface_area();
    scene.apply_control(ControlId::WindowWidth, 8.0);
    let after = scene.room_mesh().surface_area();
    // two walls lose an extra 4x3 each
    assert!(approx(before - after, 24.0));
}

#[test]
fn snapshot_restores_into_a_fresh_scene() {
    let mut a = SceneState::new();
    a.apply_control(ControlId::ArcRotation, 90.0);
    a.apply_control(ControlId::ArcCenterY, 12.0);
    a.apply_control(ControlId::DirectionalIntensity, 0.25);
    a.apply_control(ControlId::WindowPositionX, -3.0);
    a.set_show_path(false);

    let mut b = SceneState::new();
    b.restore(&a.snapshot());
    assert_eq!(b.snapshot(), a.snapshot());
    assert!(approx_vec(b.light_position(), a.light_position()));
    assert!(b.revision() > 0);
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn restore_clamps_stored_values() {
    let stored = RoomSettings {
        light_position: 140.0,
        arc_length: -30.0,
        point_intensity: 9.0,
        window: WindowOpening {
            height: 20.0,
            ..WindowOpening::default()
        },
        ..RoomSettings::default()
    };
    let mut scene = SceneState::new();
    scene.restore(&stored);
    let s = scene.snapshot();
    assert!(approx(s.light_position, 100.0));
    assert!(approx(s.arc_length, 0.0));
    assert!(approx(s.point_intensity, 2.0));
    assert!(approx(s.window.height, 8.0));
}

#[test]
fn reset_returns_every_control_to_default() {
    let mut scene = SceneState::new();
    for control in ControlId::ALL {
        let (_, hi) = control.range();
        scene.apply_control(control, hi as f64);
    }
    scene.set_show_path(false);
    scene.reset();
    assert_eq!(scene.snapshot(), RoomSettings::default());
    assert!(scene.arc.show_path);
}

#[test]
fn path_vertices_follow_visibility() {
    let mut scene = SceneState::new();
    assert_eq!(scene.path_vertices().len(), ARC_SEGMENTS + 1);
    scene.set_show_path(false);
    assert!(scene.path_vertices().is_empty());
    let rev = scene.revision();
    scene.set_show_path(false);
    assert_eq!(scene.revision(), rev);
    scene.toggle_path();
    assert!(scene.arc.show_path);
    assert!(scene.revision() > rev);
}

#[test]
fn path_is_translucent_green() {
    let scene = SceneState::new();
    let v = scene.path_vertices()[0];
    assert!(approx(v.color[1], 1.0));
    assert!(approx(v.color[0], 0.0));
    assert!(approx(v.color[3], PATH_OPACITY));
}

#[test]
fn marker_surrounds_the_light() {
    let mut scene = SceneState::new();
    scene.apply_control(ControlId::LightPosition, 10.0);
    let light = scene.light_position();
    let mesh = scene.marker_mesh();
    assert!(!mesh.is_empty());
    for v in &mesh.vertices {
        let d = (Vec3::from(v.position) - light).length();
        assert!(approx(d, MARKER_RADIUS));
    }
}

#[test]
fn control_values_reflect_defaults() {
    let scene = SceneState::new();
    assert!(approx(scene.control_value(ControlId::LightPosition), DEFAULT_LIGHT_POSITION));
    assert!(approx(scene.control_value(ControlId::ArcRotation), DEFAULT_ARC_ROTATION));
    assert!(approx(scene.control_value(ControlId::ArcCenterY), DEFAULT_ARC_CENTER.y));
    assert!(approx(scene.control_value(ControlId::WindowPositionY), DEFAULT_WINDOW_POSITION_Y));
}
