pub mod body;
pub mod camera;
pub mod constants;
pub mod controller;
pub mod error;
pub mod focus;
pub mod input;
pub mod intro;
pub mod orbit;
pub mod projector;
pub mod registry;
pub mod takeoff;
pub mod tween;

pub use body::*;
pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use focus::*;
pub use input::*;
pub use intro::*;
pub use orbit::*;
pub use projector::*;
pub use registry::*;
pub use takeoff::*;
pub use tween::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
