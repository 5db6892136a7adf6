//! Circular orbits on the ecliptic (y = 0) plane.
//!
//! An orbit carries no hidden state beyond its current `angle`, so a body can
//! be re-simulated from any starting angle and land in the same place.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Radius of the orbit in world units.
    pub distance: f32,
    /// Radians advanced per reference frame.
    pub angular_speed: f32,
    /// Current angle in radians. Never wrapped.
    pub angle: f32,
}

impl Orbit {
    pub fn new(distance: f32, angular_speed: f32, angle: f32) -> Self {
        Self {
            distance,
            angular_speed,
            angle,
        }
    }

    /// Advance by `frames` reference frames. Fractional frames are fine.
    #[inline]
    pub fn advance(&mut self, frames: f32) {
        self.angle += self.angular_speed * frames;
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        position_at(self.distance, self.angle)
    }
}

#[inline]
pub fn position_at(distance: f32, angle: f32) -> Vec3 {
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}
