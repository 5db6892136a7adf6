// Host-side tests for the scene controller: input routing, camera lock,
// overlay anchors and navigation.

use glam::Vec3;
use orrery_core::{
    default_system, project_to_screen, Body, HoverChange, Orbit, Response, SceneRegistry,
    SolarSystemController, TourConfig, Viewport, HOVER_GLOW,
};

const DT: f32 = 1.0 / 60.0;

fn controller() -> SolarSystemController {
    SolarSystemController::new(default_system().unwrap(), Viewport::new(1024.0, 768.0))
}

fn three_body_controller() -> SolarSystemController {
    let registry = SceneRegistry::new(vec![
        Body::star("Star", "Home", 10.0, [1.0, 0.8, 0.3]),
        Body::planet("Mercury", "About", 2.0, [0.6; 3], Orbit::new(46.0, 0.004, 0.0), "about.html"),
        Body::planet("Venus", "Projects", 3.0, [0.9, 0.7, 0.4], Orbit::new(66.0, 0.003, 1.0), "projects.html"),
    ])
    .unwrap();
    SolarSystemController::new(registry, Viewport::new(1024.0, 768.0))
}

fn run(ctl: &mut SolarSystemController, seconds: f32) {
    let frames = (seconds / DT).ceil() as usize;
    for _ in 0..frames {
        ctl.tick(DT);
    }
}

/// Pixel over the centre of body `index` with the current camera.
fn pixel_over(ctl: &SolarSystemController, index: usize) -> (f32, f32) {
    let world = ctl.registry().position_of(index).unwrap();
    let p = project_to_screen(ctl.camera(), ctl.viewport(), world).unwrap();
    (p.x, p.y)
}

#[test]
fn starts_on_the_star_with_the_card_hidden() {
    let mut ctl = controller();
    assert_eq!(ctl.focused_index(), 0);
    let out = ctl.tick(DT);
    assert!(out.card.is_none());
    assert!(out.focus_change.is_none());
    assert_eq!(out.bodies.len(), 5);
}

#[test]
fn stepping_twice_reaches_venus_then_clamps() {
    let mut ctl = three_body_controller();
    assert_eq!(ctl.step(1).index, 1);
    assert_eq!(ctl.step(1).index, 2);
    assert_eq!(ctl.registry().get(ctl.focused_index()).unwrap().id, "Venus");
    assert_eq!(ctl.step(1).index, 2);
}

#[test]
fn wheel_within_cooldown_moves_once() {
    let mut ctl = controller();
    assert!(ctl.on_wheel(100.0, 1_000.0).is_some());
    assert!(ctl.on_wheel(100.0, 1_100.0).is_none());
    assert_eq!(ctl.focused_index(), 1);
    assert!(ctl.on_wheel(100.0, 1_500.0).is_some());
    assert_eq!(ctl.focused_index(), 2);
    assert!(ctl.on_wheel(-40.0, 2_000.0).is_some());
    assert_eq!(ctl.focused_index(), 1);
}

#[test]
fn wheel_cooldown_is_configurable() {
    let config = TourConfig {
        wheel_cooldown_ms: 50.0,
        ..TourConfig::default()
    };
    let mut ctl =
        SolarSystemController::with_config(default_system().unwrap(), Viewport::default(), config);
    assert!(ctl.on_wheel(1.0, 0.0).is_some());
    assert!(ctl.on_wheel(1.0, 30.0).is_none());
    assert!(ctl.on_wheel(1.0, 60.0).is_some());
    assert_eq!(ctl.focused_index(), 2);
}

#[test]
fn zero_wheel_delta_does_not_use_up_the_cooldown() {
    let mut ctl = controller();
    assert!(ctl.on_wheel(0.0, 1_000.0).is_none());
    assert!(ctl.on_wheel(10.0, 1_010.0).is_some());
}

#[test]
fn keyboard_steps_jumps_and_opens() {
    let mut ctl = controller();
    assert!(matches!(ctl.on_key("ArrowRight"), Response::Focus(c) if c.index == 1));
    assert!(matches!(ctl.on_key("End"), Response::Focus(c) if c.index == 4));
    assert!(matches!(ctl.on_key("ArrowRight"), Response::Focus(c) if c.index == 4));
    assert!(matches!(ctl.on_key("Home"), Response::Focus(c) if c.index == 0));
    assert_eq!(ctl.on_key("q"), Response::Ignored);
    // the star has no page
    assert_eq!(ctl.on_key("Enter"), Response::Ignored);

    ctl.on_key("ArrowRight");
    match ctl.on_key("Enter") {
        Response::Navigate(nav) => assert_eq!(nav.url, "about.html"),
        other => panic!("expected navigation, got {other:?}"),
    }
}

#[test]
fn camera_locks_onto_the_focused_planet() {
    let mut ctl = controller();
    ctl.focus_on(2);
    run(&mut ctl, 2.0);
    let dest = ctl.state().focus.state().camera_destination;
    let look = ctl.state().focus.state().look_at_destination;
    assert!((ctl.camera().eye - dest).length() < 1e-3);
    assert!((ctl.camera().target - look).length() < 1e-3);
    assert!((look - ctl.registry().position_of(2).unwrap()).length() < 1e-4);

    // keeps following while the planet orbits
    let before = ctl.camera().target;
    run(&mut ctl, 1.0);
    assert_ne!(ctl.camera().target, before);
    assert!((ctl.camera().target - ctl.registry().position_of(2).unwrap()).length() < 1e-3);
}

#[test]
fn camera_glides_instead_of_jumping() {
    let mut ctl = controller();
    let start = ctl.camera().eye;
    ctl.focus_on(1);
    let out = ctl.tick(DT);
    let dest = ctl.state().focus.state().camera_destination;
    assert!((out.eye - start).length() < (dest - start).length() * 0.5);
    assert_ne!(out.eye, start);
}

#[test]
fn card_is_pinned_above_the_focused_body() {
    let mut ctl = controller();
    ctl.focus_on(3);
    run(&mut ctl, 1.5);
    let out = ctl.tick(DT);
    let card = out.card.expect("focused planet is in view");
    let (cx, cy) = pixel_over(&ctl, 3);
    assert!(card.y < cy);
    assert!((card.x - cx).abs() < 1.0);
    assert!(card.x >= 0.0 && card.x <= 1024.0);
}

#[test]
fn hovering_mercury_then_clicking_navigates_once() {
    let mut ctl = controller();
    ctl.tick(DT);
    let (x, y) = pixel_over(&ctl, 1);
    assert_eq!(ctl.on_pointer_move(x, y), HoverChange::Entered(1));
    assert_eq!(ctl.hovered(), Some(1));

    let nav = ctl.on_click().expect("hovered planet navigates");
    assert_eq!(nav.url, "about.html");
    assert!(ctl.on_click().is_none());
    assert_eq!(ctl.on_key("Enter"), Response::Ignored);

    ctl.clear_navigation();
    assert!(ctl.on_click().is_some());
}

#[test]
fn click_on_empty_space_does_nothing() {
    let mut ctl = controller();
    ctl.tick(DT);
    assert_eq!(ctl.on_pointer_move(2.0, 2.0), HoverChange::Unchanged);
    assert!(ctl.on_click().is_none());
    assert_eq!(ctl.focused_index(), 0);
}

#[test]
fn pointer_leave_clears_hover() {
    let mut ctl = controller();
    ctl.tick(DT);
    let (x, y) = pixel_over(&ctl, 1);
    ctl.on_pointer_move(x, y);
    assert_eq!(ctl.on_pointer_leave(), HoverChange::Left(1));
    assert!(ctl.on_click().is_none());
}

#[test]
fn hovered_planet_glows_and_gets_a_label() {
    let mut ctl = controller();
    ctl.tick(DT);
    let (x, y) = pixel_over(&ctl, 2);
    ctl.on_pointer_move(x, y);
    let out = ctl.tick(DT);
    assert_eq!(out.bodies[0].color_glow[3], 1.0);
    assert_eq!(out.bodies[2].color_glow[3], HOVER_GLOW);
    assert_eq!(out.bodies[1].color_glow[3], 0.0);
    assert_eq!(out.hover_label.map(|l| l.index), Some(2));
}

#[test]
fn resize_updates_viewport_and_projection() {
    let mut ctl = controller();
    ctl.tick(DT);
    let world = Vec3::ZERO;
    let before = project_to_screen(ctl.camera(), ctl.viewport(), world).unwrap();
    ctl.resize(1920.0, 1080.0);
    assert_eq!(ctl.viewport(), Viewport::new(1920.0, 1080.0));
    assert!((ctl.camera().aspect - 1920.0 / 1080.0).abs() < 1e-5);
    let after = project_to_screen(ctl.camera(), ctl.viewport(), world).unwrap();
    assert!(((before.y / 768.0) - (after.y / 1080.0)).abs() < 1e-4);
    assert!((after.x - 960.0).abs() < 1e-2);
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut ctl = controller();
    ctl.resize(0.0, 0.0);
    assert_eq!(ctl.viewport(), Viewport::new(1024.0, 768.0));
}

#[test]
fn huge_frame_delta_is_clamped() {
    let mut a = controller();
    let mut b = controller();
    a.tick(10.0);
    b.tick(0.1);
    assert_eq!(a.registry().position_of(1), b.registry().position_of(1));
}
