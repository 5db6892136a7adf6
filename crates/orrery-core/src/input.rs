use crate::constants::{PICK_RADIUS_SCALE, WHEEL_COOLDOWN_MS};
use crate::registry::SceneRegistry;
use glam::Vec3;

/// Suppresses wheel events that arrive within `cooldown_ms` of the last
/// accepted one. A trackpad fires dozens of events per gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelDebounce {
    pub cooldown_ms: f64,
    pub last_accepted_ms: Option<f64>,
}

impl Default for WheelDebounce {
    fn default() -> Self {
        Self::new(WHEEL_COOLDOWN_MS)
    }
}

impl WheelDebounce {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_accepted_ms: None,
        }
    }

    /// Returns true and records `now_ms` if the cooldown has elapsed.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.cooldown_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

/// Sign of the wheel delta as a focus step. Zero and NaN map to 0.
#[inline]
pub fn wheel_step(delta_y: f64) -> isize {
    if delta_y > 0.0 {
        1
    } else if delta_y < 0.0 {
        -1
    } else {
        0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Step(isize),
    /// Jump to the star.
    First,
    /// Jump to the outermost planet.
    Last,
    /// Open the focused planet's page.
    Open,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowRight" => Some(KeyAction::Step(1)),
        "ArrowLeft" => Some(KeyAction::Step(-1)),
        "Home" => Some(KeyAction::First),
        "End" => Some(KeyAction::Last),
        "Enter" => Some(KeyAction::Open),
        _ => None,
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest planet hit by the ray. The star is never pickable.
pub fn pick_planet(registry: &SceneRegistry, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for i in registry.planet_indices() {
        let Some(body) = registry.get(i) else { continue };
        let radius = body.visual_radius * PICK_RADIUS_SCALE;
        if let Some(t) = ray_sphere(ray_origin, ray_dir, body.position(), radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Entered(usize),
    Left(usize),
    /// Pointer slid straight from one planet onto another.
    Moved { from: usize, to: usize },
}

/// Which planet is under the pointer. Independent of focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub hovered: Option<usize>,
}

impl HoverState {
    pub fn update(&mut self, hit: Option<usize>) -> HoverChange {
        let change = match (self.hovered, hit) {
            (None, None) => HoverChange::Unchanged,
            (Some(a), Some(b)) if a == b => HoverChange::Unchanged,
            (None, Some(b)) => HoverChange::Entered(b),
            (Some(a), None) => HoverChange::Left(a),
            (Some(a), Some(b)) => HoverChange::Moved { from: a, to: b },
        };
        self.hovered = hit;
        change
    }
}

/// A full-page navigation the host should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub index: usize,
    pub url: String,
}

pub fn navigation_for(registry: &SceneRegistry, index: usize) -> Option<NavigationRequest> {
    let url = registry.get(index)?.destination_url()?;
    Some(NavigationRequest {
        index,
        url: url.to_owned(),
    })
}
