// Camera projection and plane unprojection.

use field_core::{Camera, Plane};
use glam::{Vec2, Vec3};

fn orbit_camera(angle: f32) -> Camera {
    let mut cam = Camera {
        eye: Vec3::ZERO,
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: 45f32.to_radians(),
        znear: 0.1,
        zfar: 3000.0,
    };
    cam.orbit(angle, 260.0, 140.0);
    cam
}

#[test]
fn orbit_places_eye_on_circle() {
    let cam = orbit_camera(std::f32::consts::FRAC_PI_2);
    assert!((cam.eye.x - 260.0).abs() < 1e-3);
    assert!((cam.eye.y - 140.0).abs() < 1e-6);
    assert!(cam.eye.z.abs() < 1e-3);
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn origin_projects_to_screen_center() {
    let cam = orbit_camera(0.3);
    let ndc = cam.project(Vec3::ZERO);
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "ndc={ndc:?}");
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn center_ray_hits_origin_on_xy_plane() {
    let cam = orbit_camera(0.0);
    let hit = cam
        .unproject_to_plane(Vec2::ZERO, &Plane::XY)
        .expect("center ray should hit the z=0 plane");
    assert!(hit.length() < 0.5, "hit={hit:?}");
}

#[test]
fn unprojected_point_projects_back_to_same_ndc() {
    let cam = orbit_camera(0.4);
    let ndc = Vec2::new(0.35, -0.2);
    let hit = cam.unproject_to_plane(ndc, &Plane::XY).unwrap();
    assert!(hit.z.abs() < 1e-2);
    let back = cam.project(hit);
    assert!((back.x - ndc.x).abs() < 5e-3, "back={back:?}");
    assert!((back.y - ndc.y).abs() < 5e-3, "back={back:?}");
}

#[test]
fn parallel_ray_misses_plane() {
    let plane = Plane::XY;
    assert!(plane.intersect_ray(Vec3::new(0.0, 0.0, 5.0), Vec3::X).is_none());
}

#[test]
fn plane_behind_ray_is_a_miss() {
    let plane = Plane::XY;
    assert!(plane.intersect_ray(Vec3::new(0.0, 0.0, 5.0), Vec3::Z).is_none());
    let hit = plane.intersect_ray(Vec3::new(1.0, 2.0, 5.0), -Vec3::Z).unwrap();
    assert_eq!(hit, Vec3::new(1.0, 2.0, 0.0));
}

#[test]
fn aspect_guards_zero_height() {
    let mut cam = orbit_camera(0.0);
    cam.set_aspect(800, 0);
    assert_eq!(cam.aspect, 800.0);
    cam.set_aspect(800, 400);
    assert_eq!(cam.aspect, 2.0);
}
