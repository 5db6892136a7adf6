// Host-side tests for scene construction and validation.

use orrery_core::{default_system, Body, Orbit, SceneError, SceneRegistry};

fn sun() -> Body {
    Body::star("Sun", "Home", 12.0, [1.0, 0.8, 0.3])
}

fn planet(id: &str, distance: f32) -> Body {
    Body::planet(
        id,
        id,
        2.0,
        [0.5, 0.5, 0.5],
        Orbit::new(distance, 0.001, 0.0),
        format!("{}.html", id.to_lowercase()),
    )
}

#[test]
fn default_system_is_valid_and_ordered() {
    let registry = default_system().expect("built-in scene is valid");
    assert_eq!(registry.len(), 5);
    assert!(registry.get(0).unwrap().is_star());
    let ids: Vec<&str> = registry.bodies().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["Sun", "Mercury", "Venus", "Earth", "Mars"]);

    let mut previous = 0.0;
    for i in registry.planet_indices() {
        let d = registry.get(i).unwrap().orbit().unwrap().distance;
        assert!(d > previous);
        previous = d;
    }
    assert_eq!(registry.outer_distance(), 112.0);
}

#[test]
fn every_planet_has_a_destination() {
    let registry = default_system().unwrap();
    assert_eq!(registry.get(0).unwrap().destination_url(), None);
    for i in registry.planet_indices() {
        let url = registry.get(i).unwrap().destination_url().unwrap();
        assert!(url.ends_with(".html"));
    }
    assert_eq!(
        registry.get(registry.index_of("Mercury").unwrap()).unwrap().destination_url(),
        Some("about.html")
    );
}

#[test]
fn star_sits_at_the_origin() {
    let registry = default_system().unwrap();
    assert_eq!(registry.position_of(0), Some(glam::Vec3::ZERO));
    assert_eq!(registry.radius_of(0), Some(12.0));
    assert_eq!(registry.position_of(99), None);
}

#[test]
fn rejects_scene_without_leading_star() {
    let err = SceneRegistry::new(vec![planet("Mercury", 46.0), sun()]).unwrap_err();
    assert_eq!(err, SceneError::FirstBodyNotStar);
    assert_eq!(SceneRegistry::new(vec![]).unwrap_err(), SceneError::FirstBodyNotStar);
}

#[test]
fn rejects_second_star() {
    let second = Body::star("Sirius", "Elsewhere", 9.0, [1.0, 1.0, 1.0]);
    let err = SceneRegistry::new(vec![sun(), planet("Mercury", 46.0), second]).unwrap_err();
    assert_eq!(err, SceneError::ExtraStar("Sirius".into()));
}

#[test]
fn rejects_star_only_scene() {
    assert_eq!(SceneRegistry::new(vec![sun()]).unwrap_err(), SceneError::NoPlanets);
}

#[test]
fn rejects_non_increasing_orbits() {
    let err = SceneRegistry::new(vec![sun(), planet("Venus", 66.0), planet("Mercury", 46.0)])
        .unwrap_err();
    assert!(matches!(err, SceneError::OrbitsNotIncreasing { ref id, .. } if id == "Mercury"));

    let err = SceneRegistry::new(vec![sun(), planet("A", 50.0), planet("B", 50.0)]).unwrap_err();
    assert!(matches!(err, SceneError::OrbitsNotIncreasing { .. }));
}

#[test]
fn rejects_nan_and_non_positive_orbit_distance() {
    for bad in [f32::NAN, 0.0, -5.0] {
        let err = SceneRegistry::new(vec![sun(), planet("Mercury", bad)]).unwrap_err();
        assert!(matches!(err, SceneError::OrbitsNotIncreasing { .. }), "{bad}");
    }
}

#[test]
fn rejects_bad_radius() {
    let mut tiny = planet("Mercury", 46.0);
    tiny.visual_radius = 0.0;
    let err = SceneRegistry::new(vec![sun(), tiny]).unwrap_err();
    assert!(matches!(err, SceneError::InvalidRadius { ref id, .. } if id == "Mercury"));

    let mut star = sun();
    star.visual_radius = f32::INFINITY;
    let err = SceneRegistry::new(vec![star, planet("Mercury", 46.0)]).unwrap_err();
    assert!(matches!(err, SceneError::InvalidRadius { .. }));
}

#[test]
fn rejects_blank_destination() {
    let body = Body::planet("Mercury", "About", 2.0, [0.5; 3], Orbit::new(46.0, 0.0, 0.0), "  ");
    let err = SceneRegistry::new(vec![sun(), body]).unwrap_err();
    assert_eq!(err, SceneError::MissingDestination("Mercury".into()));
}

#[test]
fn advance_orbits_moves_planets_but_not_the_star() {
    let mut registry = default_system().unwrap();
    let before: Vec<_> = (0..registry.len()).map(|i| registry.position_of(i).unwrap()).collect();
    registry.advance_orbits(60.0);
    assert_eq!(registry.position_of(0).unwrap(), before[0]);
    for i in registry.planet_indices().collect::<Vec<_>>() {
        assert_ne!(registry.position_of(i).unwrap(), before[i]);
    }
}

#[test]
fn error_messages_name_the_body() {
    let err = SceneError::MissingDestination("Mars".into());
    assert!(err.to_string().contains("Mars"));
}
