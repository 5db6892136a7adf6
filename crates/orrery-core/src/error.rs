use thiserror::Error;

/// Problems with a scene description. Everything past construction is total.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("the first body must be the star")]
    FirstBodyNotStar,
    #[error("body `{0}` is a star; only one star is allowed")]
    ExtraStar(String),
    #[error("a scene needs at least one planet")]
    NoPlanets,
    #[error("planet `{id}` orbits at {distance}, inside the previous orbit at {previous}")]
    OrbitsNotIncreasing {
        id: String,
        distance: f32,
        previous: f32,
    },
    #[error("body `{id}` has invalid visual radius {radius}")]
    InvalidRadius { id: String, radius: f32 },
    #[error("planet `{0}` has no destination url")]
    MissingDestination(String),
}
