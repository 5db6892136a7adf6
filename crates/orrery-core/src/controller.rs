//! The tour as a single owned object.
//!
//! `SolarSystemController` owns every piece of mutable scene state. Input
//! handlers and the frame loop call into it; nothing else writes focus, orbit
//! angles or tween state. All calls happen on one thread, between frames.

use crate::body::BodyKind;
use crate::camera::{screen_to_world_ray, Camera, Viewport};
use crate::constants::{
    CAMERA_TWEEN_SEC, CARD_MARGIN, HOVER_LABEL_MARGIN, MAX_FRAME_DT_SEC, OVERVIEW_EYE,
    OVERVIEW_HOLD_SEC, OVERVIEW_TWEEN_SEC, REFERENCE_FPS, WHEEL_COOLDOWN_MS,
};
use crate::focus::{overview_pose, FocusChange, FocusController, FocusFraming};
use crate::input::{
    key_action, navigation_for, pick_planet, wheel_step, HoverChange, HoverState, KeyAction,
    NavigationRequest, WheelDebounce,
};
use crate::intro::WelcomeSequence;
use crate::projector::{body_anchor, ScreenPoint};
use crate::registry::SceneRegistry;
use crate::tween::{CameraRig, Easing};
use glam::{Mat4, Vec3};

/// Tunables. `Default` gives the values in `constants`.
#[derive(Clone, Copy, Debug)]
pub struct TourConfig {
    pub wheel_cooldown_ms: f64,
    pub framing: FocusFraming,
    pub tween_sec: f32,
    pub card_margin: f32,
    pub hover_label_margin: f32,
    pub overview_eye: Vec3,
    pub overview_glide_sec: f32,
    pub overview_hold_sec: f32,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            wheel_cooldown_ms: WHEEL_COOLDOWN_MS,
            framing: FocusFraming::default(),
            tween_sec: CAMERA_TWEEN_SEC,
            card_margin: CARD_MARGIN,
            hover_label_margin: HOVER_LABEL_MARGIN,
            overview_eye: OVERVIEW_EYE,
            overview_glide_sec: OVERVIEW_TWEEN_SEC,
            overview_hold_sec: OVERVIEW_HOLD_SEC,
        }
    }
}

/// Per-body data the renderer uploads as-is.
///
/// `color_glow.w` is 1 for the emissive star, a small highlight for the
/// hovered planet, 0 otherwise.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub pos_radius: [f32; 4],
    pub color_glow: [f32; 4],
}

pub const HOVER_GLOW: f32 = 0.35;

/// Result of a discrete input event.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Ignored,
    Focus(FocusChange),
    Navigate(NavigationRequest),
}

/// Floating label for the planet under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverLabel {
    pub index: usize,
    pub at: ScreenPoint,
}

#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub eye: Vec3,
    pub target: Vec3,
    pub view_projection: Mat4,
    pub bodies: Vec<BodyInstance>,
    /// Where to pin the overlay card; `None` hides it.
    pub card: Option<ScreenPoint>,
    pub hover_label: Option<HoverLabel>,
    pub hover_change: HoverChange,
    /// Focus changes originating inside the frame (the intro locking on).
    pub focus_change: Option<FocusChange>,
}

pub struct SceneState {
    pub registry: SceneRegistry,
    pub focus: FocusController,
    pub wheel: WheelDebounce,
    pub hover: HoverState,
    pub rig: CameraRig,
    pub camera: Camera,
    pub viewport: Viewport,
    pub intro: WelcomeSequence,
    pub card_visible: bool,
    pub pointer_px: Option<(f32, f32)>,
    pub navigation_pending: bool,
}

pub struct SolarSystemController {
    state: SceneState,
    config: TourConfig,
}

impl SolarSystemController {
    pub fn new(registry: SceneRegistry, viewport: Viewport) -> Self {
        Self::with_config(registry, viewport, TourConfig::default())
    }

    pub fn with_config(registry: SceneRegistry, viewport: Viewport, config: TourConfig) -> Self {
        let focus = FocusController::new(&registry, config.framing);
        let (eye, target) = overview_pose(&registry, config.overview_eye);
        let mut camera = Camera::new(eye, target, viewport);
        camera.set_pose(eye, target);
        log::info!(
            "[scene] {} bodies, viewport {}x{}",
            registry.len(),
            viewport.width,
            viewport.height
        );
        Self {
            state: SceneState {
                registry,
                focus,
                wheel: WheelDebounce::new(config.wheel_cooldown_ms),
                hover: HoverState::default(),
                rig: CameraRig::new(eye, target),
                camera,
                viewport,
                intro: WelcomeSequence::new(config.overview_glide_sec, config.overview_hold_sec),
                card_visible: false,
                pointer_px: None,
                navigation_pending: false,
            },
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    #[inline]
    pub fn registry(&self) -> &SceneRegistry {
        &self.state.registry
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.state.camera
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    #[inline]
    pub fn focused_index(&self) -> usize {
        self.state.focus.focused_index()
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.state.hover.hovered
    }

    // ---------------- Focus ----------------

    /// Explicit focus always wins over a running intro.
    pub fn focus_on(&mut self, index: isize) -> FocusChange {
        let s = &mut self.state;
        s.intro.cancel();
        let change = s.focus.focus_on(&s.registry, index);
        s.rig.go_to_with(
            change.camera_destination,
            change.look_at_destination,
            self.config.tween_sec,
            Easing::CubicOut,
        );
        s.card_visible = true;
        change
    }

    pub fn step(&mut self, delta: isize) -> FocusChange {
        let target = (self.focused_index() as isize).saturating_add(delta);
        self.focus_on(target)
    }

    /// Entry hand-off: wide shot, hold, then lock onto the first planet.
    pub fn start_welcome_sequence(&mut self) {
        let s = &mut self.state;
        let (eye, target) = overview_pose(&s.registry, self.config.overview_eye);
        s.rig
            .go_to_with(eye, target, self.config.overview_glide_sec, Easing::CubicInOut);
        s.card_visible = false;
        s.intro.start();
        log::info!("[intro] overview");
    }

    // ---------------- Input ----------------

    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) -> Option<FocusChange> {
        let delta = wheel_step(delta_y);
        if delta == 0 {
            return None;
        }
        if !self.state.wheel.accept(now_ms) {
            log::debug!("[wheel] debounced at {:.0}ms", now_ms);
            return None;
        }
        Some(self.step(delta))
    }

    pub fn on_key(&mut self, key: &str) -> Response {
        let Some(action) = key_action(key) else {
            return Response::Ignored;
        };
        match action {
            KeyAction::Step(delta) => Response::Focus(self.step(delta)),
            KeyAction::First => Response::Focus(self.focus_on(0)),
            KeyAction::Last => {
                let last = self.state.registry.last_index() as isize;
                Response::Focus(self.focus_on(last))
            }
            KeyAction::Open => match self.request_navigation(self.focused_index()) {
                Some(nav) => Response::Navigate(nav),
                None => Response::Ignored,
            },
        }
    }

    /// Pointer position in viewport pixels.
    pub fn on_pointer_move(&mut self, px: f32, py: f32) -> HoverChange {
        self.state.pointer_px = Some((px, py));
        self.repick()
    }

    pub fn on_pointer_leave(&mut self) -> HoverChange {
        self.state.pointer_px = None;
        self.state.hover.update(None)
    }

    /// A click only means something while a planet is hovered.
    pub fn on_click(&mut self) -> Option<NavigationRequest> {
        let index = self.state.hover.hovered?;
        self.request_navigation(index)
    }

    /// The page came back (e.g. from the back/forward cache); allow clicks again.
    pub fn clear_navigation(&mut self) {
        self.state.navigation_pending = false;
    }

    fn request_navigation(&mut self, index: usize) -> Option<NavigationRequest> {
        if self.state.navigation_pending {
            return None;
        }
        let nav = navigation_for(&self.state.registry, index)?;
        self.state.navigation_pending = true;
        log::info!("[nav] {} -> {}", index, nav.url);
        Some(nav)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if viewport.is_degenerate() {
            return;
        }
        self.state.viewport = viewport;
        self.state.camera.set_viewport(viewport);
    }

    fn repick(&mut self) -> HoverChange {
        let s = &mut self.state;
        let hit = s.pointer_px.and_then(|(px, py)| {
            let (ro, rd) = screen_to_world_ray(&s.camera, s.viewport, px, py);
            pick_planet(&s.registry, ro, rd)
        });
        s.hover.update(hit)
    }

    // ---------------- Frame ----------------

    pub fn tick(&mut self, dt_sec: f32) -> FrameOutput {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        self.state.registry.advance_orbits(dt * REFERENCE_FPS);

        let focus_change = if self.state.intro.tick(dt) {
            Some(self.focus_on(1))
        } else {
            None
        };

        {
            let s = &mut self.state;
            // only a locked camera follows its body
            if s.card_visible && !s.intro.is_running() {
                s.focus.refresh(&s.registry);
                let dest = *s.focus.state();
                s.rig.follow(dest.camera_destination, dest.look_at_destination);
            }
            let (eye, target) = s.rig.tick(dt);
            s.camera.set_pose(eye, target);
        }

        // planets drift under a resting pointer
        let hover_change = self.repick();

        let s = &self.state;
        let card = if s.card_visible {
            body_anchor(
                &s.registry,
                s.focus.focused_index(),
                &s.camera,
                s.viewport,
                self.config.card_margin,
            )
        } else {
            None
        };
        let hover_label = s.hover.hovered.and_then(|index| {
            body_anchor(
                &s.registry,
                index,
                &s.camera,
                s.viewport,
                self.config.hover_label_margin,
            )
            .map(|at| HoverLabel { index, at })
        });

        FrameOutput {
            eye: s.camera.eye,
            target: s.camera.target,
            view_projection: s.camera.view_projection(),
            bodies: self.body_instances(),
            card,
            hover_label,
            hover_change,
            focus_change,
        }
    }

    pub fn body_instances(&self) -> Vec<BodyInstance> {
        let s = &self.state;
        s.registry
            .bodies()
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let p = b.position();
                let glow = match b.kind {
                    BodyKind::Star => 1.0,
                    BodyKind::Planet(_) if s.hover.hovered == Some(i) => HOVER_GLOW,
                    BodyKind::Planet(_) => 0.0,
                };
                BodyInstance {
                    pos_radius: [p.x, p.y, p.z, b.visual_radius],
                    color_glow: [b.color[0], b.color[1], b.color[2], glow],
                }
            })
            .collect()
    }
}
