// Host-side tests for world → pixel projection and picking rays.

use glam::Vec3;
use orrery_core::{
    body_anchor, default_system, project_to_screen, screen_to_world_ray, Camera, Viewport,
};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

fn front_camera(viewport: Viewport) -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, viewport)
}

#[test]
fn target_projects_to_viewport_centre() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = front_camera(vp);
    let p = project_to_screen(&cam, vp, Vec3::ZERO).unwrap();
    assert!(approx(p.x, 400.0, 1e-2));
    assert!(approx(p.y, 300.0, 1e-2));
    assert!(p.depth > 0.0 && p.depth < 1.0);
}

#[test]
fn screen_y_grows_downwards() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = front_camera(vp);
    let up = project_to_screen(&cam, vp, Vec3::new(0.0, 1.0, 0.0)).unwrap();
    let right = project_to_screen(&cam, vp, Vec3::new(1.0, 0.0, 0.0)).unwrap();
    assert!(up.y < 300.0);
    assert!(right.x > 400.0);
}

#[test]
fn points_behind_the_camera_are_hidden() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = front_camera(vp);
    assert!(project_to_screen(&cam, vp, Vec3::new(0.0, 0.0, 20.0)).is_none());
    assert!(project_to_screen(&cam, vp, Vec3::new(0.0, 0.0, 10.0)).is_none());
}

#[test]
fn points_past_the_far_plane_are_hidden() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = front_camera(vp);
    assert!(project_to_screen(&cam, vp, Vec3::new(0.0, 0.0, -5000.0)).is_none());
}

#[test]
fn degenerate_viewport_projects_nothing() {
    let vp = Viewport::new(0.0, 600.0);
    let cam = front_camera(Viewport::default());
    assert!(project_to_screen(&cam, vp, Vec3::ZERO).is_none());
}

#[test]
fn resize_rescales_projection_without_stale_aspect() {
    let small = Viewport::new(1024.0, 768.0);
    let large = Viewport::new(1920.0, 1080.0);
    let mut cam = front_camera(small);
    let world = Vec3::new(2.0, 1.5, 0.0);

    let before = project_to_screen(&cam, small, world).unwrap();
    cam.set_viewport(large);
    let after = project_to_screen(&cam, large, world).unwrap();
    let fresh = project_to_screen(&front_camera(large), large, world).unwrap();

    assert!(approx(after.x, fresh.x, 1e-2));
    assert!(approx(after.y, fresh.y, 1e-2));
    // vertical field of view is fixed, so the y offset from centre scales with height
    let dy_before = (before.y - 384.0) / 768.0;
    let dy_after = (after.y - 540.0) / 1080.0;
    assert!(approx(dy_before, dy_after, 1e-4));
}

#[test]
fn anchor_sits_above_the_body() {
    let registry = default_system().unwrap();
    let vp = Viewport::default();
    let cam = Camera::new(Vec3::new(0.0, 20.0, 80.0), Vec3::ZERO, vp);
    let centre = project_to_screen(&cam, vp, Vec3::ZERO).unwrap();
    let anchor = body_anchor(&registry, 0, &cam, vp, 1.5).unwrap();
    assert!(anchor.y < centre.y);
    assert!(body_anchor(&registry, 99, &cam, vp, 1.5).is_none());
}

#[test]
fn centre_ray_points_at_the_target() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = Camera::new(Vec3::new(3.0, 4.0, 10.0), Vec3::new(1.0, 0.0, 0.0), vp);
    let (ro, rd) = screen_to_world_ray(&cam, vp, 400.0, 300.0);
    assert_eq!(ro, cam.eye);
    let expected = (cam.target - cam.eye).normalize();
    assert!((rd - expected).length() < 1e-3);
}

#[test]
fn ray_and_projection_agree() {
    let vp = Viewport::new(1024.0, 768.0);
    let cam = Camera::new(Vec3::new(0.0, 90.0, 150.0), Vec3::ZERO, vp);
    let world = Vec3::new(40.0, 0.0, 20.0);
    let p = project_to_screen(&cam, vp, world).unwrap();
    let (ro, rd) = screen_to_world_ray(&cam, vp, p.x, p.y);
    let expected = (world - ro).normalize();
    assert!((rd - expected).length() < 1e-3);
}

#[test]
fn pose_with_eye_on_target_stays_finite() {
    let mut cam = front_camera(Viewport::default());
    cam.set_pose(Vec3::ONE, Vec3::ONE);
    assert!(cam.view_projection().is_finite());
}
