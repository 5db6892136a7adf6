//! The saucer takeoff that plays over the wormhole before the solar system
//! appears: a spinning spiral along a short motion path, an overlapping
//! shrink into the singularity, then a fade of the entry overlay. The end of
//! the fade is the one and only hand-off to the scene.

use crate::tween::Easing;
use glam::Vec2;

/// Motion path for the spiral, in CSS pixels relative to the button's rest spot.
pub const SPIRAL_PATH: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(-40.0, -20.0),
    Vec2::new(60.0, 30.0),
    Vec2::new(0.0, 0.0),
];
pub const SPIRAL_SEC: f32 = 0.9;
pub const SPIRAL_TURN_DEG: f32 = 360.0;
// the shrink overlaps the tail of the spiral
pub const SHRINK_START_SEC: f32 = SPIRAL_SEC - 0.4;
pub const SHRINK_SEC: f32 = 0.9;
pub const SHRINK_TO: f32 = 0.06;
pub const FADE_SEC: f32 = 0.5;
pub const WORMHOLE_BOOST: f32 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TakeoffPhase {
    Idle,
    Spiral,
    Shrink,
    Fading,
    Done,
}

/// Everything the page needs to draw one frame of the takeoff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TakeoffFrame {
    pub phase: TakeoffPhase,
    pub offset_px: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub overlay_alpha: f32,
    pub wormhole_intensity: f32,
    /// True while the saucer is still moving and trailing smoke.
    pub emit_smoke: bool,
    /// Set on exactly one frame: the scene should boot now.
    pub handoff: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TakeoffTimeline {
    elapsed: Option<f32>,
    handed_off: bool,
}

impl TakeoffTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: a second click while flying does not restart the timeline.
    pub fn start(&mut self) -> bool {
        if self.elapsed.is_some() {
            return false;
        }
        log::info!("[takeoff] start");
        self.elapsed = Some(0.0);
        true
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.elapsed.is_some()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.handed_off
    }

    #[inline]
    pub fn total_sec() -> f32 {
        SHRINK_START_SEC + SHRINK_SEC + FADE_SEC
    }

    pub fn tick(&mut self, dt: f32) -> TakeoffFrame {
        let Some(t) = self.elapsed.as_mut() else {
            return frame_at(None, false);
        };
        *t += dt.max(0.0);
        let t = *t;
        let handoff = !self.handed_off && t >= Self::total_sec();
        if handoff {
            self.handed_off = true;
            log::info!("[takeoff] hand-off");
        }
        frame_at(Some(t), handoff)
    }
}

fn frame_at(t: Option<f32>, handoff: bool) -> TakeoffFrame {
    let Some(t) = t else {
        return TakeoffFrame {
            phase: TakeoffPhase::Idle,
            offset_px: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: 1.0,
            overlay_alpha: 1.0,
            wormhole_intensity: 1.0,
            emit_smoke: false,
            handoff: false,
        };
    };

    let spiral = Easing::CubicInOut.apply(t / SPIRAL_SEC);
    let shrink_t = (t - SHRINK_START_SEC) / SHRINK_SEC;
    let shrink = Easing::QuartIn.apply(shrink_t);
    let shrink_end = SHRINK_START_SEC + SHRINK_SEC;
    let fade = Easing::QuadOut.apply((t - shrink_end) / FADE_SEC);

    let phase = if t >= shrink_end + FADE_SEC {
        TakeoffPhase::Done
    } else if t >= shrink_end {
        TakeoffPhase::Fading
    } else if t >= SHRINK_START_SEC {
        TakeoffPhase::Shrink
    } else {
        TakeoffPhase::Spiral
    };

    TakeoffFrame {
        phase,
        offset_px: catmull_rom(&SPIRAL_PATH, spiral),
        rotation_deg: SPIRAL_TURN_DEG * spiral,
        scale: 1.0 + (SHRINK_TO - 1.0) * shrink,
        overlay_alpha: 1.0 - fade,
        wormhole_intensity: if shrink_t > 0.0 { WORMHOLE_BOOST } else { 1.0 },
        emit_smoke: t < shrink_end,
        handoff,
    }
}

/// Uniform Catmull-Rom through `points`, `u` in `[0, 1]` over the whole path.
pub fn catmull_rom(points: &[Vec2], u: f32) -> Vec2 {
    match points.len() {
        0 => return Vec2::ZERO,
        1 => return points[0],
        _ => {}
    }
    let segments = points.len() - 1;
    let s = u.clamp(0.0, 1.0) * segments as f32;
    let i = (s.floor() as usize).min(segments - 1);
    let t = s - i as f32;

    let p1 = points[i];
    let p2 = points[i + 1];
    let p0 = if i == 0 { p1 } else { points[i - 1] };
    let p3 = points.get(i + 2).copied().unwrap_or(p2);

    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}
