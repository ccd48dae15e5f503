use super::settings::WindowOpening;
use glam::Vec3;

/// Interleaved vertex consumed by the scene shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append a quad given corners counter-clockwise about `normal`; that side is the one drawn.
    pub fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        for c in corners {
            self.vertices.push(MeshVertex {
                position: c.to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn append(&mut self, other: MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }

    /// Sum of triangle areas; used to sanity check generated shells.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn surface_area(&self) -> f32 {
        self.indices
            .chunks_exact(3)
            .map(|tri| {
                let a = Vec3::from(self.vertices[tri[0] as usize].position);
                let b = Vec3::from(self.vertices[tri[1] as usize].position);
                let c = Vec3::from(self.vertices[tri[2] as usize].position);
                (b - a).cross(c - a).length() * 0.5
            })
            .sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomDims {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct RoomColors {
    pub wall: [f32; 4],
    pub floor: [f32; 4],
}

/// Axis-aligned rectangle in a wall's local (u, v) plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl WallRect {
    #[inline]
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn area(&self) -> f32 {
        (self.u1 - self.u0).max(0.0) * (self.v1 - self.v0).max(0.0)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.u1 - self.u0 <= f32::EPSILON || self.v1 - self.v0 <= f32::EPSILON
    }
}

/// Opening rectangle clamped to a `width` x `height` wall centered on u = 0.
/// Returns `None` when nothing of the opening remains on the wall.
pub fn clamp_opening(window: &WindowOpening, width: f32, height: f32) -> Option<WallRect> {
    let half = width / 2.0;
    let rect = WallRect {
        u0: (window.position_x - window.width / 2.0).clamp(-half, half),
        u1: (window.position_x + window.width / 2.0).clamp(-half, half),
        v0: window.position_y.clamp(0.0, height),
        v1: (window.position_y + window.height).clamp(0.0, height),
    };
    (!rect.is_empty()).then_some(rect)
}

/// Split a wall into the rectangles surrounding `hole`: below, above, left, right.
pub fn wall_rects(width: f32, height: f32, hole: Option<WallRect>) -> Vec<WallRect> {
    let half = width / 2.0;
    let full = WallRect {
        u0: -half,
        v0: 0.0,
        u1: half,
        v1: height,
    };
    let Some(h) = hole else {
        return vec![full];
    };
    [
        WallRect { v1: h.v0, ..full },
        WallRect { v0: h.v1, ..full },
        WallRect {
            u1: h.u0,
            v0: h.v0,
            v1: h.v1,
            ..full
        },
        WallRect {
            u0: h.u1,
            v0: h.v0,
            v1: h.v1,
            ..full
        },
    ]
    .into_iter()
    .filter(|r| !r.is_empty())
    .collect()
}

/// Floor, ceiling, two solid side walls, and front/back walls with the window cut out.
///
/// The back wall faces the opposite way, so its opening is mirrored in x.
pub fn build_room(dims: RoomDims, window: &WindowOpening, colors: RoomColors) -> MeshData {
    let mut mesh = MeshData::default();
    let hw = dims.width / 2.0;
    let hd = dims.depth / 2.0;
    let h = dims.height;

    mesh.push_quad(
        [
            Vec3::new(-hw, 0.0, hd),
            Vec3::new(hw, 0.0, hd),
            Vec3::new(hw, 0.0, -hd),
            Vec3::new(-hw, 0.0, -hd),
        ],
        Vec3::Y,
        colors.floor,
    );
    mesh.push_quad(
        [
            Vec3::new(-hw, h, -hd),
            Vec3::new(hw, h, -hd),
            Vec3::new(hw, h, hd),
            Vec3::new(-hw, h, hd),
        ],
        Vec3::NEG_Y,
        colors.wall,
    );

    // Left and right walls span the depth
    mesh.push_quad(
        [
            Vec3::new(-hw, 0.0, hd),
            Vec3::new(-hw, 0.0, -hd),
            Vec3::new(-hw, h, -hd),
            Vec3::new(-hw, h, hd),
        ],
        Vec3::X,
        colors.wall,
    );
    mesh.push_quad(
        [
            Vec3::new(hw, 0.0, -hd),
            Vec3::new(hw, 0.0, hd),
            Vec3::new(hw, h, hd),
            Vec3::new(hw, h, -hd),
        ],
        Vec3::NEG_X,
        colors.wall,
    );

    let hole = clamp_opening(window, dims.width, dims.height);
    for r in wall_rects(dims.width, dims.height, hole) {
        mesh.push_quad(
            [
                Vec3::new(r.u0, r.v0, hd),
                Vec3::new(r.u1, r.v0, hd),
                Vec3::new(r.u1, r.v1, hd),
                Vec3::new(r.u0, r.v1, hd),
            ],
            Vec3::Z,
            colors.wall,
        );
    }
    // Back wall local u runs along -x
    for r in wall_rects(dims.width, dims.height, hole) {
        mesh.push_quad(
            [
                Vec3::new(-r.u0, r.v0, -hd),
                Vec3::new(-r.u1, r.v0, -hd),
                Vec3::new(-r.u1, r.v1, -hd),
                Vec3::new(-r.u0, r.v1, -hd),
            ],
            Vec3::NEG_Z,
            colors.wall,
        );
    }
    mesh
}

/// UV sphere centered on `center`.
pub fn build_sphere(
    center: Vec3,
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    color: [f32; 4],
) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let phi = v * std::f32::consts::PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let theta = u * std::f32::consts::TAU;
            let normal = Vec3::new(
                -theta.cos() * phi.sin(),
                phi.cos(),
                theta.sin() * phi.sin(),
            );
            mesh.vertices.push(MeshVertex {
                position: (center + normal * radius).to_array(),
                normal: normal.to_array(),
                color,
            });
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Vertices for a line strip through `points`.
pub fn line_strip(points: &[Vec3], color: [f32; 4]) -> Vec<MeshVertex> {
    points
        .iter()
        .map(|p| MeshVertex {
            position: p.to_array(),
            normal: [0.0, 1.0, 0.0],
            color,
        })
        .collect()
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` to linear RGBA with the given alpha.
pub fn hex_color(rgb: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| srgb_to_linear(((rgb >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0), alpha]
}
