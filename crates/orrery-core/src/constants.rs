use glam::Vec3;

// Shared tuning constants for the tour. None of these are contracts; they are
// the values the scene looks right with.

// Orbits advance by `angular_speed` per reference frame.
pub const REFERENCE_FPS: f32 = 60.0;
// Clamp for a single frame's delta so a backgrounded tab doesn't fling planets.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Input
pub const WHEEL_COOLDOWN_MS: f64 = 350.0; // one body per intentional scroll gesture

// Camera offset from a focused body, as multiples of its visual radius
pub const CAMERA_DISTANCE_FACTOR: f32 = 4.8;
pub const CAMERA_HEIGHT_FACTOR: f32 = 1.9;

// Camera tween
pub const CAMERA_TWEEN_SEC: f32 = 0.85;

// Perspective
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 2000.0;

// Overlay card sits this far above the body's silhouette (world units)
pub const CARD_MARGIN: f32 = 1.5;
// Hover label sits a little closer than the card
pub const HOVER_LABEL_MARGIN: f32 = 0.8;

// Intro: wide shot of the whole system before locking onto the first planet
pub const OVERVIEW_EYE: Vec3 = Vec3::new(0.0, 90.0, 150.0);
pub const OVERVIEW_HOLD_SEC: f32 = 1.4;
pub const OVERVIEW_TWEEN_SEC: f32 = 1.6;

// Picking slack so small planets stay clickable
pub const PICK_RADIUS_SCALE: f32 = 1.15;
