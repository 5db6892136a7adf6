//! Ordered list of focusable bodies: the star at index 0, then planets from
//! the innermost orbit outwards. Order and membership are fixed once built;
//! only orbit angles move.

use crate::body::{Body, BodyKind};
use crate::error::SceneError;
use crate::orbit::Orbit;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct SceneRegistry {
    bodies: Vec<Body>,
}

impl SceneRegistry {
    pub fn new(bodies: Vec<Body>) -> Result<Self, SceneError> {
        let mut iter = bodies.iter();
        match iter.next() {
            Some(first) if first.is_star() => check_radius(first)?,
            _ => return Err(SceneError::FirstBodyNotStar),
        }

        let mut previous: Option<f32> = None;
        for body in iter {
            check_radius(body)?;
            let info = match &body.kind {
                BodyKind::Star => return Err(SceneError::ExtraStar(body.id.clone())),
                BodyKind::Planet(info) => info,
            };
            if info.destination_url.trim().is_empty() {
                return Err(SceneError::MissingDestination(body.id.clone()));
            }
            let distance = info.orbit.distance;
            let floor = previous.unwrap_or(0.0);
            // negated so NaN distances are rejected too
            if !(distance > floor) {
                return Err(SceneError::OrbitsNotIncreasing {
                    id: body.id.clone(),
                    distance,
                    previous: floor,
                });
            }
            previous = Some(distance);
        }
        if previous.is_none() {
            return Err(SceneError::NoPlanets);
        }

        log::debug!("[registry] {} bodies", bodies.len());
        Ok(Self { bodies })
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false for a constructed registry; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.bodies.len() - 1
    }

    #[inline]
    pub fn radius_of(&self, index: usize) -> Option<f32> {
        self.get(index).map(|b| b.visual_radius)
    }

    #[inline]
    pub fn position_of(&self, index: usize) -> Option<Vec3> {
        self.get(index).map(Body::position)
    }

    pub fn planet_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_star())
            .map(|(i, _)| i)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    /// Outermost orbit radius; the intro overview frames the system with it.
    pub fn outer_distance(&self) -> f32 {
        self.bodies
            .iter()
            .filter_map(Body::orbit)
            .map(|o| o.distance)
            .fold(0.0, f32::max)
    }

    /// Advance every orbit by `frames` reference frames.
    pub fn advance_orbits(&mut self, frames: f32) {
        for body in &mut self.bodies {
            if let BodyKind::Planet(info) = &mut body.kind {
                info.orbit.advance(frames);
            }
        }
    }
}

fn check_radius(body: &Body) -> Result<(), SceneError> {
    let r = body.visual_radius;
    if r.is_finite() && r > 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidRadius {
            id: body.id.clone(),
            radius: r,
        })
    }
}

/// The portfolio scene: the Sun as home, each planet a page.
pub fn default_system() -> Result<SceneRegistry, SceneError> {
    let bodies = vec![
        Body::star("Sun", "Home", 12.0, [1.0, 0.78, 0.32]),
        Body::planet(
            "Mercury",
            "About me",
            2.4,
            [0.66, 0.62, 0.58],
            Orbit::new(46.0, 0.0040, 0.3),
            "about.html",
        ),
        Body::planet(
            "Venus",
            "Projects",
            3.6,
            [0.91, 0.76, 0.45],
            Orbit::new(66.0, 0.0030, 2.1),
            "projects.html",
        ),
        Body::planet(
            "Earth",
            "Experience",
            3.8,
            [0.30, 0.52, 0.92],
            Orbit::new(88.0, 0.0022, 4.0),
            "experience.html",
        ),
        Body::planet(
            "Mars",
            "Contact",
            3.0,
            [0.86, 0.40, 0.26],
            Orbit::new(112.0, 0.0017, 5.4),
            "contact.html",
        ),
    ];
    SceneRegistry::new(bodies)
}
