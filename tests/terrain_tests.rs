// Host-side tests for the terrain mesh, animator and camera.

use glam::{Vec2, Vec3, Vec4};
use std::f32::consts::FRAC_PI_2;
use temcy_core::camera::Camera;
use temcy_core::terrain::{
    tilt_target, Orientation, TerrainAnimator, TerrainMesh, TerrainPhase, TerrainUniforms,
};

fn settle(animator: &mut TerrainAnimator, pointer: Vec2) -> Orientation {
    let mut last = None;
    for frame in 0..300 {
        last = animator.step(frame as f32 / 60.0, pointer);
    }
    last.unwrap()
}

#[test]
fn default_mesh_topology() {
    let mesh = TerrainMesh::with_seed(7);
    assert_eq!(mesh.segments(), 40);
    assert_eq!(mesh.vertices().len(), 41 * 41);
    assert_eq!(mesh.triangle_indices().len(), 40 * 40 * 6);
    // 40 quads x 3 edges each, plus the closing right column and bottom row
    assert_eq!(mesh.line_indices().len(), (40 * 40 * 3 + 2 * 40) * 2);
    let n = mesh.vertices().len() as u32;
    assert!(mesh.line_indices().iter().all(|&i| i < n));
}

#[test]
fn heights_stay_in_range_and_plane_spans_fifty_units() {
    let mesh = TerrainMesh::with_seed(42);
    for v in mesh.vertices() {
        let [x, y, z] = v.position;
        assert!((0.0..2.0).contains(&z), "height {} out of range", z);
        assert!(x.abs() <= 25.0 + 1e-4 && y.abs() <= 25.0 + 1e-4);
        let len = Vec3::from(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4);
    }
    let first = mesh.vertices()[0].position;
    assert_eq!((first[0], first[1]), (-25.0, 25.0));
}

#[test]
fn same_seed_same_heights() {
    let a = TerrainMesh::with_seed(3);
    let b = TerrainMesh::with_seed(3);
    let c = TerrainMesh::with_seed(4);
    assert_eq!(a.vertices(), b.vertices());
    assert_ne!(a.vertices(), c.vertices());
}

#[test]
fn flat_mesh_normals_point_up() {
    let mut rng = rand::thread_rng();
    let mesh = TerrainMesh::build(10.0, 4, 0.0, &mut rng);
    assert!(mesh.vertices().iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
}

#[test]
fn steady_state_with_centered_pointer() {
    let mut animator = TerrainAnimator::new();
    assert!(animator.mount(TerrainMesh::with_seed(1)));
    let o = settle(&mut animator, Vec2::ZERO);
    assert!((o.x + FRAC_PI_2).abs() < 1e-4);
    assert!(o.y.abs() < 1e-4);
}

#[test]
fn steady_state_with_pointer_in_corner() {
    let mut animator = TerrainAnimator::new();
    animator.mount(TerrainMesh::with_seed(1));
    let o = settle(&mut animator, Vec2::ONE);
    assert!((o.x - (-FRAC_PI_2 + 0.05)).abs() < 1e-4);
    assert!((o.y - 0.05).abs() < 1e-4);
    assert_eq!(tilt_target(Vec2::ONE), (-FRAC_PI_2 + 0.05, 0.05));
}

#[test]
fn spin_follows_elapsed_time() {
    let mut animator = TerrainAnimator::new();
    animator.mount(TerrainMesh::with_seed(1));
    let o = animator.step(10.0, Vec2::ZERO).unwrap();
    assert!((o.z - 0.2).abs() < 1e-6);
}

#[test]
fn tilt_lerp_is_per_step() {
    let mut animator = TerrainAnimator::new();
    animator.mount(TerrainMesh::with_seed(1));
    let o = animator.step(0.0, Vec2::new(1.0, 0.0)).unwrap();
    assert!((o.y - 0.005).abs() < 1e-6);
}

#[test]
fn lifecycle_is_mount_once_then_unmount() {
    let mut animator = TerrainAnimator::new();
    assert_eq!(animator.phase(), TerrainPhase::Uninitialized);
    assert_eq!(animator.step(0.0, Vec2::ZERO), None);

    assert!(animator.mount(TerrainMesh::with_seed(1)));
    assert_eq!(animator.phase(), TerrainPhase::Ready);
    assert!(!animator.mount(TerrainMesh::with_seed(2)));

    animator.step(0.0, Vec2::ZERO);
    assert_eq!(animator.phase(), TerrainPhase::Animating);

    assert!(animator.unmount().is_some());
    assert_eq!(animator.phase(), TerrainPhase::Unmounted);
    assert!(animator.mesh().is_none());
    assert_eq!(animator.step(1.0, Vec2::ZERO), None);
    assert!(animator.unmount().is_none());
    assert!(!animator.mount(TerrainMesh::with_seed(3)));
}

#[test]
fn rest_orientation_lays_plane_flat() {
    let m = Orientation::REST.model_matrix();
    let up = m.transform_vector3(Vec3::Z);
    assert!((up - Vec3::Y).length() < 1e-5);
    let origin = m.transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(0.0, -2.0, -2.0)).length() < 1e-6);
}

#[test]
fn hero_camera_projects_origin_into_view() {
    let camera = Camera::hero(16.0 / 9.0);
    let clip = camera.projection_matrix() * camera.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!((0.0..1.0).contains(&ndc.z));
}

#[test]
fn invalid_aspect_falls_back_to_square() {
    let mut camera = Camera::hero(f32::NAN);
    assert_eq!(camera.aspect, 1.0);
    camera.set_aspect(0.0);
    assert_eq!(camera.aspect, 1.0);
    camera.set_aspect(2.0);
    assert_eq!(camera.aspect, 2.0);
}

#[test]
fn uniforms_carry_material_and_fog() {
    let u = TerrainUniforms::new(&Camera::hero(1.0), &Orientation::REST);
    assert_eq!(u.color[3], 0.3);
    assert_eq!(&u.fog_range[..2], &[5.0, 15.0]);
    assert_eq!(std::mem::size_of::<TerrainUniforms>(), 3 * 64 + 3 * 16);
}
