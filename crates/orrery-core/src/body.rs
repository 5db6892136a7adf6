use crate::orbit::Orbit;
use glam::Vec3;

/// Extra data only planets carry: where they orbit and which page they open.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetInfo {
    pub orbit: Orbit,
    pub destination_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BodyKind {
    Star,
    Planet(PlanetInfo),
}

/// The star or one of the planets.
///
/// `color` is the flat material every body renders with; it is also what a
/// textured body would fall back to if its texture never arrived.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: String,
    pub label: String,
    pub visual_radius: f32,
    pub color: [f32; 3],
    pub kind: BodyKind,
}

impl Body {
    pub fn star(id: impl Into<String>, label: impl Into<String>, radius: f32, color: [f32; 3]) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            visual_radius: radius,
            color,
            kind: BodyKind::Star,
        }
    }

    pub fn planet(
        id: impl Into<String>,
        label: impl Into<String>,
        radius: f32,
        color: [f32; 3],
        orbit: Orbit,
        destination_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            visual_radius: radius,
            color,
            kind: BodyKind::Planet(PlanetInfo {
                orbit,
                destination_url: destination_url.into(),
            }),
        }
    }

    /// World position, derived from the orbit. The star sits at the origin.
    #[inline]
    pub fn position(&self) -> Vec3 {
        match &self.kind {
            BodyKind::Star => Vec3::ZERO,
            BodyKind::Planet(info) => info.orbit.position(),
        }
    }

    #[inline]
    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star)
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        match &self.kind {
            BodyKind::Star => None,
            BodyKind::Planet(info) => Some(&info.orbit),
        }
    }

    pub fn destination_url(&self) -> Option<&str> {
        match &self.kind {
            BodyKind::Star => None,
            BodyKind::Planet(info) => Some(info.destination_url.as_str()),
        }
    }
}
