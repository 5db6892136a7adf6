//! Explicit interpolation state for the camera, advanced once per frame.
//!
//! A tween is `{start, end, elapsed, duration, easing}`; there are no callbacks.
//! Retargeting an in-flight tween restarts it from wherever it currently is, so
//! at most one animation per property exists and nothing ever jumps.

use crate::constants::CAMERA_TWEEN_SEC;
use glam::Vec3;

/// Easing curves, named after their tweening-library equivalents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `power1.out`
    QuadOut,
    /// `power2.in`
    CubicIn,
    /// `power2.out`
    #[default]
    CubicOut,
    /// `power2.inOut`
    CubicInOut,
    /// `power3.in`
    QuartIn,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::QuartIn => t * t * t * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3Tween {
    pub start: Vec3,
    pub end: Vec3,
    pub elapsed: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Vec3Tween {
    pub fn new(start: Vec3, end: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            elapsed: 0.0,
            duration,
            easing,
        }
    }

    /// A finished tween resting at `at`.
    pub fn settled(at: Vec3) -> Self {
        Self {
            start: at,
            end: at,
            elapsed: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn value(&self) -> Vec3 {
        self.start.lerp(self.end, self.easing.apply(self.progress()))
    }

    pub fn tick(&mut self, dt: f32) -> Vec3 {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration.max(0.0));
        }
        self.value()
    }

    /// Animate from the current value to `end` over `duration`.
    pub fn retarget(&mut self, end: Vec3, duration: f32, easing: Easing) {
        let current = self.value();
        *self = Self::new(current, end, duration, easing);
    }

    /// Move the destination without restarting. Progress is kept, so the value
    /// shifts by at most how far `end` moved.
    pub fn track(&mut self, end: Vec3) {
        self.end = end;
    }
}

/// Eye and look-at tweens moved as a pair.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub eye: Vec3Tween,
    pub target: Vec3Tween,
}

impl CameraRig {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye: Vec3Tween::settled(eye),
            target: Vec3Tween::settled(target),
        }
    }

    /// Start (or restart) the default ease-out glide towards a new pose.
    pub fn go_to(&mut self, eye: Vec3, target: Vec3) {
        self.go_to_with(eye, target, CAMERA_TWEEN_SEC, Easing::CubicOut);
    }

    pub fn go_to_with(&mut self, eye: Vec3, target: Vec3, duration: f32, easing: Easing) {
        self.eye.retarget(eye, duration, easing);
        self.target.retarget(target, duration, easing);
    }

    /// Follow a destination that drifts (an orbiting body) without restarting.
    pub fn follow(&mut self, eye: Vec3, target: Vec3) {
        self.eye.track(eye);
        self.target.track(target);
    }

    pub fn snap(&mut self, eye: Vec3, target: Vec3) {
        *self = Self::new(eye, target);
    }

    pub fn tick(&mut self, dt: f32) -> (Vec3, Vec3) {
        (self.eye.tick(dt), self.target.tick(dt))
    }

    #[inline]
    pub fn pose(&self) -> (Vec3, Vec3) {
        (self.eye.value(), self.target.value())
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        !(self.eye.is_complete() && self.target.is_complete())
    }
}
