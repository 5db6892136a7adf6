// DOM hooks and page-level tuning for the web frontend.
// Kept free of `web_sys` so the host tests can include this file directly.

// Canvas the scene renders into; created on the fly if the page lacks it.
pub const CANVAS_ID: &str = "solar-scene";
pub const CANVAS_FALLBACK_ID: &str = "scene";
pub const CANVAS_FALLBACK_STYLE: &str =
    "position:fixed;inset:0;width:100%;height:100%;display:block;";

// Overlay card pinned above the focused body
pub const CARD_ID: &str = "planet-card";
pub const CARD_TITLE_ID: &str = "planet-card-title";
pub const CARD_SUBTITLE_ID: &str = "planet-card-subtitle";
pub const CARD_LINK_ID: &str = "planet-card-link";

// Floating label for the hovered planet
pub const HOVER_LABEL_ID: &str = "planet-hover-label";

// Entry overlay with the wormhole and the saucer button
pub const ENTRY_ID: &str = "entry";
pub const ENTRY_START_ID: &str = "alien-start";
pub const ENTRY_WORMHOLE_ID: &str = "entry-wormhole";

// Globals published on `window` for page scripts
pub const GLOBAL_INIT: &str = "initSolarSystem";
pub const GLOBAL_WELCOME: &str = "startWelcomeSequence";

pub const HIDDEN_CLASS: &str = "hidden";
pub const SMOKE_CLASS: &str = "smoking";

// Card is lifted so its bottom edge sits on the anchor
pub const CARD_LIFT_PX: f32 = 12.0;

// Device pixel ratio cap for the backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
