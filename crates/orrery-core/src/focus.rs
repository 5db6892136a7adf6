//! Which body the camera is locked onto, and where the camera should be.
//!
//! Requests outside the registry saturate to the nearest end. There is no
//! failure mode: every request yields a focus change, even a repeat of the
//! current index, so the overlay card can always be refreshed from it.

use crate::constants::{CAMERA_DISTANCE_FACTOR, CAMERA_HEIGHT_FACTOR};
use crate::registry::SceneRegistry;
use glam::Vec3;

/// Text for the overlay card pinned above the focused body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardContent {
    pub title: String,
    pub subtitle: String,
    /// Page the card links to; `None` for the star.
    pub url: Option<String>,
}

/// Outcome of a focus request, handed to the UI layer.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusChange {
    pub index: usize,
    pub previous: usize,
    pub card: CardContent,
    pub camera_destination: Vec3,
    pub look_at_destination: Vec3,
}

impl FocusChange {
    #[inline]
    pub fn moved(&self) -> bool {
        self.index != self.previous
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusState {
    pub focused_index: usize,
    pub camera_destination: Vec3,
    pub look_at_destination: Vec3,
}

/// Offset multipliers applied to a body's visual radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusFraming {
    pub distance_factor: f32,
    pub height_factor: f32,
}

impl Default for FocusFraming {
    fn default() -> Self {
        Self {
            distance_factor: CAMERA_DISTANCE_FACTOR,
            height_factor: CAMERA_HEIGHT_FACTOR,
        }
    }
}

impl FocusFraming {
    #[inline]
    pub fn offset(&self, radius: f32) -> Vec3 {
        Vec3::new(0.0, radius * self.height_factor, radius * self.distance_factor)
    }
}

#[derive(Clone, Debug)]
pub struct FocusController {
    state: FocusState,
    framing: FocusFraming,
}

impl FocusController {
    /// Focus starts on the star.
    pub fn new(registry: &SceneRegistry, framing: FocusFraming) -> Self {
        let mut ctl = Self {
            state: FocusState {
                focused_index: 0,
                camera_destination: Vec3::ZERO,
                look_at_destination: Vec3::ZERO,
            },
            framing,
        };
        ctl.refresh(registry);
        ctl
    }

    #[inline]
    pub fn state(&self) -> &FocusState {
        &self.state
    }

    #[inline]
    pub fn focused_index(&self) -> usize {
        self.state.focused_index
    }

    #[inline]
    pub fn framing(&self) -> FocusFraming {
        self.framing
    }

    pub fn focus_on(&mut self, registry: &SceneRegistry, index: isize) -> FocusChange {
        let clamped = index.clamp(0, registry.last_index() as isize) as usize;
        let previous = self.state.focused_index;
        self.state.focused_index = clamped;
        self.refresh(registry);

        let card = card_for(registry, clamped);
        if clamped != previous {
            log::info!("[focus] {} -> {} ({})", previous, clamped, card.title);
        }
        FocusChange {
            index: clamped,
            previous,
            card,
            camera_destination: self.state.camera_destination,
            look_at_destination: self.state.look_at_destination,
        }
    }

    pub fn step(&mut self, registry: &SceneRegistry, delta: isize) -> FocusChange {
        let current = self.state.focused_index as isize;
        self.focus_on(registry, current.saturating_add(delta))
    }

    /// Recompute destinations for the current index from live body positions.
    pub fn refresh(&mut self, registry: &SceneRegistry) {
        let index = self.state.focused_index;
        let (Some(position), Some(radius)) = (registry.position_of(index), registry.radius_of(index))
        else {
            return;
        };
        self.state.camera_destination = position + self.framing.offset(radius);
        self.state.look_at_destination = position;
    }
}

pub fn card_for(registry: &SceneRegistry, index: usize) -> CardContent {
    match registry.get(index) {
        Some(body) => CardContent {
            title: body.id.clone(),
            subtitle: body.label.clone(),
            url: body.destination_url().map(str::to_owned),
        },
        None => CardContent {
            title: String::new(),
            subtitle: String::new(),
            url: None,
        },
    }
}

/// Wide shot of the whole system, scaled to the outermost orbit.
pub fn overview_pose(registry: &SceneRegistry, base_eye: Vec3) -> (Vec3, Vec3) {
    let outer = registry.outer_distance().max(1.0);
    // base_eye is tuned for an outer orbit of ~112 units
    let scale = (outer / 112.0).max(0.25);
    (base_eye * scale, Vec3::ZERO)
}
