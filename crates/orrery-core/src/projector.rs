//! World → pixel projection for HTML overlays pinned to bodies.
//!
//! Both the camera and the bodies move every frame, so anchors are recomputed
//! per frame and never cached. A point behind the camera yields `None`, and the
//! overlay is hidden rather than drawn somewhere meaningless.

use crate::camera::{Camera, Viewport};
use crate::registry::SceneRegistry;
use glam::{Vec3, Vec4};

/// Pixel coordinates with the origin at the top-left of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Normalized device depth, `[0, 1]` between the near and far planes.
    pub depth: f32,
}

pub fn project_to_screen(camera: &Camera, viewport: Viewport, world: Vec3) -> Option<ScreenPoint> {
    if viewport.is_degenerate() {
        return None;
    }
    let clip = camera.view_projection() * Vec4::from((world, 1.0));
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !ndc.is_finite() || !(-1.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(ScreenPoint {
        x: (ndc.x + 1.0) * 0.5 * viewport.width,
        y: (1.0 - ndc.y) * 0.5 * viewport.height,
        depth: ndc.z,
    })
}

/// Point just above body `index`'s silhouette, projected to pixels.
pub fn body_anchor(
    registry: &SceneRegistry,
    index: usize,
    camera: &Camera,
    viewport: Viewport,
    margin: f32,
) -> Option<ScreenPoint> {
    let body = registry.get(index)?;
    let world = body.position() + Vec3::new(0.0, body.visual_radius + margin, 0.0);
    project_to_screen(camera, viewport, world)
}
