pub mod camera;
pub mod constants;
pub mod easing;
pub mod effects;
pub mod error;
pub mod form;
pub mod palette;
pub mod particles;
pub mod pointer;
#[cfg(feature = "gpu")]
pub mod render;
pub mod scene;
pub mod shapes;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use easing::CubicBezier;
pub use effects::*;
pub use error::*;
pub use form::*;
pub use palette::*;
pub use particles::*;
pub use pointer::*;
pub use scene::*;
pub use shapes::*;
