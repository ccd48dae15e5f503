// Host-side tests for the control catalogue, panel placement and wall labels.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lighting {
    pub mod defaults {
        include!("../src/core/defaults.rs");
    }
    pub mod controls {
        include!("../src/core/controls.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod labels {
        include!("../src/core/labels.rs");
    }
}
mod constants {
    include!("../src/constants.rs");
}

use glam::{Mat4, Vec3};
use lighting::camera::OrbitCamera;
use lighting::controls::*;
use lighting::defaults::*;
use lighting::labels::*;
use std::collections::HashSet;

#[test]
fn value_labels_use_control_formats() {
    assert_eq!(ControlId::LightPosition.format_value(50.0), "50.0%");
    assert_eq!(ControlId::ArcLength.format_value(180.0), "180°");
    assert_eq!(ControlId::ArcRotation.format_value(224.6), "225°");
    assert_eq!(ControlId::AmbientIntensity.format_value(0.4), "0.4");
    assert_eq!(ControlId::WindowPositionX.format_value(-2.5), "-2.5");
}

#[test]
fn dom_ids_are_unique_and_reversible() {
    let mut seen = HashSet::new();
    for control in ControlId::ALL {
        assert!(seen.insert(control.input_id()));
        assert!(seen.insert(control.value_label_id()));
        assert_eq!(ControlId::from_input_id(control.input_id()), Some(control));
    }
    assert_eq!(ControlId::from_input_id("nope"), None);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_lie_inside_slider_ranges() {
    let defaults = [
        (ControlId::LightPosition, DEFAULT_LIGHT_POSITION),
        (ControlId::ArcLength, DEFAULT_ARC_LENGTH),
        (ControlId::ArcCenterX, DEFAULT_ARC_CENTER.x),
        (ControlId::ArcCenterY, DEFAULT_ARC_CENTER.y),
        (ControlId::ArcCenterZ, DEFAULT_ARC_CENTER.z),
        (ControlId::ArcRotation, DEFAULT_ARC_ROTATION),
        (ControlId::AmbientIntensity, DEFAULT_AMBIENT_INTENSITY),
        (ControlId::DirectionalIntensity, DEFAULT_DIRECTIONAL_INTENSITY),
        (ControlId::PointIntensity, DEFAULT_POINT_INTENSITY),
        (ControlId::WindowWidth, DEFAULT_WINDOW_WIDTH),
        (ControlId::WindowHeight, DEFAULT_WINDOW_HEIGHT),
        (ControlId::WindowPositionX, DEFAULT_WINDOW_POSITION_X),
        (ControlId::WindowPositionY, DEFAULT_WINDOW_POSITION_Y),
    ];
    assert_eq!(defaults.len(), ControlId::ALL.len());
    for (control, value) in defaults {
        assert_eq!(control.clamp(value), value, "{:?}", control);
    }
    assert!(ROOM_HEIGHT > 0.0 && LIGHT_DISTANCE > 0.0);
}

#[test]
fn panel_stays_inside_viewport() {
    assert_eq!(clamp_panel_position(-10.0, 50.0, 200.0, 100.0, 800.0, 600.0), (0.0, 50.0));
    assert_eq!(clamp_panel_position(700.0, 550.0, 200.0, 100.0, 800.0, 600.0), (600.0, 500.0));
    assert_eq!(clamp_panel_position(120.0, 80.0, 900.0, 700.0, 800.0, 600.0), (0.0, 0.0));
}

#[test]
fn labels_bob_with_phase_from_anchor_x() {
    let front_left = WALL_LABELS[0];
    assert!((front_left.position_at(0.0).y - 4.0).abs() < 1e-5);
    let peak = front_left.position_at(std::f32::consts::FRAC_PI_2).y;
    assert!((peak - (4.0 + LABEL_FLOAT_AMPLITUDE)).abs() < 1e-5);

    let back_left = WALL_LABELS[2];
    assert!((back_left.position_at(5.0).y - 4.0).abs() < 1e-5);
    assert_eq!(back_left.position_at(5.0).x, back_left.anchor.x);
}

#[test]
fn label_colors_render_as_css_hex() {
    assert_eq!(WALL_LABELS[0].css_color(), "#4caf50");
    assert_eq!(WALL_LABELS[3].css_color(), "#9c27b0");
}

#[test]
fn projection_maps_ndc_to_top_left_pixels() {
    let id = Mat4::IDENTITY;
    assert_eq!(project_to_screen(id, Vec3::new(0.0, 0.0, 0.5), 800.0, 600.0), Some((400.0, 300.0)));
    assert_eq!(project_to_screen(id, Vec3::new(0.5, 0.5, 0.5), 800.0, 600.0), Some((600.0, 150.0)));
    assert_eq!(project_to_screen(id, Vec3::new(2.0, 0.0, 0.5), 800.0, 600.0), None);
    assert_eq!(project_to_screen(id, Vec3::new(0.0, 0.0, -0.5), 800.0, 600.0), None);
}

#[test]
fn every_label_is_visible_from_the_default_camera() {
    let cam = OrbitCamera::new(800.0 / 600.0);
    for label in WALL_LABELS {
        let p = project_to_screen(cam.view_proj(), label.position_at(0.0), 800.0, 600.0);
        assert!(p.is_some(), "{} off screen", label.name);
    }
}

#[test]
fn dialog_text_names_the_room() {
    assert_eq!(constants::delete_confirm_message("Den"), "Delete room 'Den'?");
    assert!(constants::CANVAS_SELECTOR.starts_with('.'));
    assert!(constants::PANEL_SELECTOR.starts_with('.'));
}
