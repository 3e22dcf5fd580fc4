//! Wireframe terrain behind the hero section.
//!
//! [`TerrainMesh`] is a height-field plane randomized once at mount.
//! [`TerrainAnimator`] owns the mesh lifecycle and the per-frame orientation:
//! a slow spin around the plane's normal plus a pointer-driven tilt.

use crate::camera::Camera;
use crate::constants::{
    FOG_COLOR, FOG_FAR, FOG_NEAR, TERRAIN_COLOR, TERRAIN_MAX_HEIGHT, TERRAIN_OPACITY,
    TERRAIN_POSITION, TERRAIN_SEGMENTS, TERRAIN_SIZE, TERRAIN_SPIN_RATE, TERRAIN_TILT_LERP,
    TERRAIN_TILT_RANGE,
};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::FRAC_PI_2;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Height-field plane. Topology is fixed at construction: only the heights
/// are random and they are never touched again.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    vertices: Vec<TerrainVertex>,
    triangles: Vec<u32>,
    lines: Vec<u32>,
    segments: usize,
}

impl TerrainMesh {
    /// Default hero plane with heights drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::build(TERRAIN_SIZE, TERRAIN_SEGMENTS, TERRAIN_MAX_HEIGHT, rng)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Plane of `size`×`size` in local XY with `segments` quads per side.
    /// Vertices run row by row from the top-left corner; z is the height.
    pub fn build<R: Rng + ?Sized>(size: f32, segments: usize, max_height: f32, rng: &mut R) -> Self {
        let segments = segments.max(1);
        let row = segments + 1;
        let half = size * 0.5;
        let step = size / segments as f32;

        let mut vertices = Vec::with_capacity(row * row);
        for iy in 0..row {
            let y = half - iy as f32 * step;
            for ix in 0..row {
                let x = ix as f32 * step - half;
                let z = if max_height > 0.0 {
                    rng.gen_range(0.0..max_height)
                } else {
                    0.0
                };
                vertices.push(TerrainVertex {
                    position: [x, y, z],
                    normal: [0.0, 0.0, 1.0],
                });
            }
        }

        let mut triangles = Vec::with_capacity(segments * segments * 6);
        let mut lines = Vec::with_capacity((2 * segments * row + segments * segments) * 2);
        for iy in 0..segments {
            for ix in 0..segments {
                let a = (iy * row + ix) as u32;
                let b = ((iy + 1) * row + ix) as u32;
                let c = ((iy + 1) * row + ix + 1) as u32;
                let d = (iy * row + ix + 1) as u32;
                triangles.extend_from_slice(&[a, b, d, b, c, d]);
                // Top and left edges of every quad, plus the shared diagonal.
                lines.extend_from_slice(&[a, d, a, b, b, d]);
            }
        }
        // Closing right column and bottom row.
        for iy in 0..segments {
            let top = (iy * row + segments) as u32;
            lines.extend_from_slice(&[top, top + row as u32]);
        }
        for ix in 0..segments {
            let left = (segments * row + ix) as u32;
            lines.extend_from_slice(&[left, left + 1]);
        }

        let mut mesh = Self {
            vertices,
            triangles,
            lines,
            segments,
        };
        mesh.compute_normals();
        mesh
    }

    /// Smooth vertex normals: area-weighted sum of adjacent face normals.
    fn compute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.triangles.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let pa = Vec3::from(self.vertices[a].position);
            let pb = Vec3::from(self.vertices[b].position);
            let pc = Vec3::from(self.vertices[c].position);
            let n = (pc - pb).cross(pa - pb);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        for (v, n) in self.vertices.iter_mut().zip(acc) {
            v.normal = n.try_normalize().unwrap_or(Vec3::Z).to_array();
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    #[inline]
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangles
    }

    /// Line-list indices of the triangle wireframe, each edge once.
    #[inline]
    pub fn line_indices(&self) -> &[u32] {
        &self.lines
    }

    #[inline]
    pub fn segments(&self) -> usize {
        self.segments
    }
}

/// Mesh rotation in radians, applied in XYZ order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    /// Plane laid flat: local +Z pointing up.
    pub const REST: Orientation = Orientation {
        x: -FRAC_PI_2,
        y: 0.0,
        z: 0.0,
    };

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, self.x, self.y, self.z),
            Vec3::from(TERRAIN_POSITION),
        )
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::REST
    }
}

/// Pointer tilt target for a pointer in normalized device coordinates
/// (x right, y up, both in [-1, 1]).
#[inline]
pub fn tilt_target(pointer: Vec2) -> (f32, f32) {
    (
        -FRAC_PI_2 + pointer.y * TERRAIN_TILT_RANGE,
        pointer.x * TERRAIN_TILT_RANGE,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerrainPhase {
    Uninitialized,
    /// Mesh built, no frame stepped yet.
    Ready,
    Animating,
    Unmounted,
}

#[derive(Debug)]
pub struct TerrainAnimator {
    phase: TerrainPhase,
    mesh: Option<TerrainMesh>,
    orientation: Orientation,
}

impl Default for TerrainAnimator {
    fn default() -> Self {
        Self {
            phase: TerrainPhase::Uninitialized,
            mesh: None,
            orientation: Orientation::REST,
        }
    }
}

impl TerrainAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> TerrainPhase {
        self.phase
    }

    #[inline]
    pub fn mesh(&self) -> Option<&TerrainMesh> {
        self.mesh.as_ref()
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Build the mesh. Only valid once; later calls keep the existing mesh.
    pub fn mount(&mut self, mesh: TerrainMesh) -> bool {
        if self.phase != TerrainPhase::Uninitialized {
            log::warn!("[terrain] mount ignored in {:?}", self.phase);
            return false;
        }
        log::info!(
            "[terrain] mounted {} vertices, {} line indices",
            mesh.vertices().len(),
            mesh.line_indices().len()
        );
        self.mesh = Some(mesh);
        self.orientation = Orientation::REST;
        self.phase = TerrainPhase::Ready;
        true
    }

    /// Advance to `elapsed_sec` since mount with the current pointer.
    ///
    /// The tilt lerp is applied once per call, not per second. Returns the
    /// new orientation, or `None` when there is no mesh to move.
    pub fn step(&mut self, elapsed_sec: f32, pointer: Vec2) -> Option<Orientation> {
        match self.phase {
            TerrainPhase::Uninitialized | TerrainPhase::Unmounted => return None,
            TerrainPhase::Ready => self.phase = TerrainPhase::Animating,
            TerrainPhase::Animating => {}
        }
        let (tx, ty) = tilt_target(pointer);
        let o = &mut self.orientation;
        o.z = elapsed_sec * TERRAIN_SPIN_RATE;
        o.x += (tx - o.x) * TERRAIN_TILT_LERP;
        o.y += (ty - o.y) * TERRAIN_TILT_LERP;
        Some(*o)
    }

    /// Release the mesh. Further steps are no-ops.
    pub fn unmount(&mut self) -> Option<TerrainMesh> {
        if self.phase == TerrainPhase::Unmounted {
            return None;
        }
        self.phase = TerrainPhase::Unmounted;
        log::info!("[terrain] unmounted");
        self.mesh.take()
    }
}

/// Uniform block shared with `TERRAIN_WGSL`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    /// rgb + opacity
    pub color: [f32; 4],
    pub fog_color: [f32; 4],
    /// near, far, unused, unused
    pub fog_range: [f32; 4],
}

impl TerrainUniforms {
    pub fn new(camera: &Camera, orientation: &Orientation) -> Self {
        let [r, g, b] = TERRAIN_COLOR;
        let [fr, fg, fb] = FOG_COLOR;
        Self {
            model: orientation.model_matrix().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            color: [r, g, b, TERRAIN_OPACITY],
            fog_color: [fr, fg, fb, 1.0],
            fog_range: [FOG_NEAR, FOG_FAR, 0.0, 0.0],
        }
    }
}
