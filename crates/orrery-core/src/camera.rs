//! Perspective camera and the viewport it renders into.
//!
//! The aspect ratio is only ever changed through [`Camera::set_viewport`], so
//! projection and pixel mapping cannot disagree after a resize.

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3, Vec4};

/// Drawing surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, viewport: Viewport) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_pose(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        // look_at with eye == target yields NaNs; nudge the target instead
        self.target = if (target - eye).length_squared() < 1e-8 {
            eye - Vec3::Z
        } else {
            target
        };
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if !viewport.is_degenerate() {
            self.aspect = viewport.aspect();
        }
    }
}

/// World-space ray through pixel `(sx, sy)` of `viewport`.
///
/// Returns `(ray_origin, ray_direction)`; the origin is the camera eye.
pub fn screen_to_world_ray(camera: &Camera, viewport: Viewport, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let width = viewport.width.max(1.0);
    let height = viewport.height.max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}
