// Host-side tests for room and marker mesh generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lighting {
    pub mod defaults {
        include!("../src/core/defaults.rs");
    }
    pub mod settings {
        include!("../src/core/settings.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
}

use glam::Vec3;
use lighting::geometry::*;
use lighting::settings::WindowOpening;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

fn dims() -> RoomDims {
    RoomDims {
        width: 10.0,
        height: 8.0,
        depth: 10.0,
    }
}

fn colors() -> RoomColors {
    RoomColors {
        wall: WHITE,
        floor: WHITE,
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn wall_without_hole_is_one_rect() {
    let rects = wall_rects(10.0, 8.0, None);
    assert_eq!(rects.len(), 1);
    assert!(approx(rects[0].area(), 80.0));
}

#[test]
fn default_opening_leaves_four_pieces_around_the_hole() {
    let hole = clamp_opening(&WindowOpening::default(), 10.0, 8.0).unwrap();
    assert_eq!(
        hole,
        WallRect {
            u0: -2.0,
            v0: 1.5,
            u1: 2.0,
            v1: 4.5
        }
    );
    let rects = wall_rects(10.0, 8.0, Some(hole));
    assert_eq!(rects.len(), 4);
    let total: f32 = rects.iter().map(WallRect::area).sum();
    assert!(approx(total, 80.0 - 12.0));
}

#[test]
fn opening_touching_the_floor_drops_the_piece_below() {
    let window = WindowOpening {
        position_y: 0.0,
        ..WindowOpening::default()
    };
    let hole = clamp_opening(&window, 10.0, 8.0);
    let rects = wall_rects(10.0, 8.0, hole);
    assert_eq!(rects.len(), 3);
    assert!(rects.iter().all(|r| r.area() > 0.0));
}

#[test]
fn opening_is_clipped_to_the_wall() {
    let window = WindowOpening {
        width: 4.0,
        height: 3.0,
        position_x: 4.0,
        position_y: 6.0,
    };
    let hole = clamp_opening(&window, 10.0, 8.0).unwrap();
    assert!(approx(hole.u1, 5.0));
    assert!(approx(hole.v1, 8.0));
    assert!(approx(hole.area(), 3.0 * 2.0));
}

#[test]
fn opening_off_the_wall_is_ignored() {
    let window = WindowOpening {
        position_x: 20.0,
        ..WindowOpening::default()
    };
    assert!(clamp_opening(&window, 10.0, 8.0).is_none());
    let mesh = build_room(dims(), &window, colors());
    assert!(approx(mesh.surface_area(), 520.0));
}

#[test]
fn room_area_accounts_for_both_window_holes() {
    let mesh = build_room(dims(), &WindowOpening::default(), colors());
    // floor + ceiling + two side walls + front/back minus a 4x3 hole each
    assert!(approx(mesh.surface_area(), 100.0 + 100.0 + 160.0 + 2.0 * 68.0));
}

#[test]
fn opening_larger_than_wall_removes_front_and_back() {
    let window = WindowOpening {
        width: 12.0,
        height: 10.0,
        position_x: 0.0,
        position_y: 0.0,
    };
    let mesh = build_room(dims(), &window, colors());
    assert!(approx(mesh.surface_area(), 360.0));
}

#[test]
fn back_wall_opening_is_mirrored() {
    let window = WindowOpening {
        width: 2.0,
        height: 2.0,
        position_x: 3.0,
        position_y: 2.0,
    };
    let mesh = build_room(dims(), &window, colors());
    // A point inside the hole at world x = +3 on the front, x = -3 on the back
    let covered = |x: f32, z: f32| {
        mesh.indices.chunks_exact(3).any(|tri| {
            let p: Vec<Vec3> = tri
                .iter()
                .map(|&i| Vec3::from(mesh.vertices[i as usize].position))
                .collect();
            if !p.iter().all(|v| approx(v.z, z)) {
                return false;
            }
            let (min_x, max_x) = p.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
                (lo.min(v.x), hi.max(v.x))
            });
            let (min_y, max_y) = p.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
                (lo.min(v.y), hi.max(v.y))
            });
            x > min_x && x < max_x && 3.0 > min_y && 3.0 < max_y
        })
    };
    assert!(!covered(3.0, 5.0));
    assert!(covered(-3.0, 5.0));
    assert!(!covered(-3.0, -5.0));
    assert!(covered(3.0, -5.0));
}

#[test]
fn sphere_vertex_and_index_counts() {
    let mesh = build_sphere(Vec3::new(1.0, 2.0, 3.0), 0.5, 16, 16, WHITE);
    assert_eq!(mesh.vertices.len(), 17 * 17);
    assert_eq!(mesh.indices.len(), 2 * 16 * 15 * 3);
    for v in &mesh.vertices {
        let d = (Vec3::from(v.position) - Vec3::new(1.0, 2.0, 3.0)).length();
        assert!(approx(d, 0.5));
    }
}

#[test]
fn sphere_area_approaches_analytic() {
    let mesh = build_sphere(Vec3::ZERO, 1.0, 16, 16, WHITE);
    let ratio = mesh.surface_area() / (4.0 * std::f32::consts::PI);
    assert!(ratio > 0.95 && ratio <= 1.0, "ratio {}", ratio);
}

#[test]
fn append_offsets_indices() {
    let mut a = MeshData::default();
    a.push_quad([Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y], Vec3::Z, WHITE);
    let mut b = MeshData::default();
    b.push_quad([Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y], Vec3::Z, WHITE);
    a.append(b);
    assert_eq!(a.vertices.len(), 8);
    assert_eq!(&a.indices[6..], &[4, 5, 6, 4, 6, 7]);
}

#[test]
fn hex_colors_are_linearized() {
    let white = hex_color(0xffffff, 0.5);
    assert!(white[..3].iter().all(|c| approx(*c, 1.0)));
    assert!(approx(white[3], 0.5));
    assert_eq!(hex_color(0x000000, 1.0), [0.0, 0.0, 0.0, 1.0]);
    assert!(approx(srgb_to_linear(0.5), 0.2140));
}
