use cgmath::{InnerSpace, Vector3};

use crate::outline::OutlineMask;

/// Height of the extruded rim above the disc plane.
const RIM_HEIGHT: f32 = 0.03;
/// Keeps flush caps from z-fighting against the surfaces they cover.
const CAP_EPSILON: f32 = 1.0e-4;

const TINT_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const RIM_FACE_TINT: [f32; 3] = [150.0 / 255.0; 3];
const RIM_SIDE_TINT: [f32; 3] = [175.0 / 255.0; 3];
const GLASS_FRONT_TINT: [f32; 3] = [175.0 / 255.0; 3];
const GLASS_SIDE_TINT: [f32; 3] = [200.0 / 255.0; 3];

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    /// Face normal as a homogeneous direction (weight component 0).
    pub normal: [f32; 4],
    pub uv: [f32; 2],
    pub tint: [f32; 3],
}

pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    fn push_quad(
        &mut self,
        corners: [Vector3<f32>; 4],
        uvs: [[f32; 2]; 4],
        normal: [f32; 4],
        tint: [f32; 3],
    ) {
        let base = self.vertices.len() as u32;
        for (corner, uv) in corners.into_iter().zip(uvs) {
            self.vertices.push(Vertex {
                position: corner.into(),
                normal,
                uv,
                tint,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

impl Default for MeshData {
    fn default() -> Self {
        Self::new()
    }
}

fn direction(v: Vector3<f32>) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

fn unit_or(v: Vector3<f32>, fallback: Vector3<f32>) -> Vector3<f32> {
    if v.magnitude2() < 1e-6 {
        fallback
    } else {
        v.normalize()
    }
}

/// Extrude an outline mask into a thin rim shell plus the textured cap.
///
/// `right` and `forward` carry both the billboard rotation and the disc
/// radius; the mask is mapped onto the ±1 square they span, so a mask of
/// any resolution produces a disc of the same world size. Each masked
/// pixel becomes four quads (top, bottom and the two side faces along the
/// right axis; front/back faces are occluded by neighboring pixels and
/// skipped). The cap carries the actual label image over the whole disc.
pub fn build_disc_shell(
    mask: &OutlineMask,
    center: Vector3<f32>,
    right: Vector3<f32>,
    forward: Vector3<f32>,
    extrusion_depth: f32,
) -> MeshData {
    let mut mesh = MeshData::new();
    let width = mask.width();
    let height = mask.height();
    let pixel_scale = 2.0 / width.max(height).max(1) as f32;
    let half = pixel_scale * 0.5;

    let side = unit_or(right, Vector3::unit_x());
    let up = [0.0, 1.0, 0.0, 0.0];
    let down = [0.0, -1.0, 0.0, 0.0];
    let rim_lift = Vector3::new(0.0, RIM_HEIGHT, 0.0);
    let rim_drop = Vector3::new(0.0, -extrusion_depth, 0.0);

    for y in 0..height {
        for x in 0..width {
            if !mask.get(x, y) {
                continue;
            }

            let nx = (x as f32 + 0.5 - width as f32 / 2.0) * pixel_scale;
            let ny = (y as f32 + 0.5 - height as f32 / 2.0) * pixel_scale;
            let pixel = center + right * nx + forward * ny;

            let r = right * half;
            let f = forward * half;
            let t00 = pixel - r - f + rim_lift;
            let t01 = pixel - r + f + rim_lift;
            let t10 = pixel + r - f + rim_lift;
            let t11 = pixel + r + f + rim_lift;
            let b00 = t00 + rim_drop;
            let b01 = t01 + rim_drop;
            let b10 = t10 + rim_drop;
            let b11 = t11 + rim_drop;

            // Every rim vertex samples the pixel-center texel, so the rim
            // reads as flat color rather than texture.
            let texel = [
                (x as f32 + 0.5) / width as f32,
                (y as f32 + 0.5) / height as f32,
            ];
            let uvs = [texel; 4];

            mesh.push_quad([t00, t01, t11, t10], uvs, up, RIM_FACE_TINT);
            mesh.push_quad([b00, b10, b11, b01], uvs, down, RIM_FACE_TINT);
            mesh.push_quad([t01, t00, b00, b01], uvs, direction(-side), RIM_SIDE_TINT);
            mesh.push_quad([t10, t11, b11, b10], uvs, direction(side), RIM_SIDE_TINT);
        }
    }

    // Cap flush under the rim tops, carrying the label over the full disc.
    let cap_lift = Vector3::new(0.0, RIM_HEIGHT - CAP_EPSILON, 0.0);
    mesh.push_quad(
        [
            center - right - forward + cap_lift,
            center - right + forward + cap_lift,
            center + right + forward + cap_lift,
            center + right - forward + cap_lift,
        ],
        [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
        up,
        TINT_WHITE,
    );

    mesh
}

/// Open-bottomed glass box: a top cap plus four sides spanning `height`
/// downward from the top ring. The axes are rotation-independent.
pub fn build_enclosure(
    center: Vector3<f32>,
    right: Vector3<f32>,
    forward: Vector3<f32>,
    height: f32,
) -> MeshData {
    let mut mesh = MeshData::new();
    let out_r = unit_or(right, Vector3::unit_x());
    let out_f = unit_or(forward, Vector3::unit_z());
    let drop = Vector3::new(0.0, -height, 0.0);
    let cap_drop = Vector3::new(0.0, -CAP_EPSILON, 0.0);

    let nn = center - right - forward;
    let np = center - right + forward;
    let pn = center + right - forward;
    let pp = center + right + forward;

    let side_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    mesh.push_quad(
        [nn + cap_drop, np + cap_drop, pp + cap_drop, pn + cap_drop],
        [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
        [0.0, 1.0, 0.0, 0.0],
        TINT_WHITE,
    );
    mesh.push_quad(
        [pp, np, np + drop, pp + drop],
        side_uvs,
        direction(out_f),
        GLASS_FRONT_TINT,
    );
    mesh.push_quad(
        [nn, pn, pn + drop, nn + drop],
        side_uvs,
        direction(-out_f),
        GLASS_FRONT_TINT,
    );
    mesh.push_quad(
        [np, nn, nn + drop, np + drop],
        side_uvs,
        direction(-out_r),
        GLASS_SIDE_TINT,
    );
    mesh.push_quad(
        [pn, pp, pp + drop, pn + drop],
        side_uvs,
        direction(out_r),
        GLASS_SIDE_TINT,
    );

    mesh
}
