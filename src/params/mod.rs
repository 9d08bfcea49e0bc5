//! Parameter definitions with documented defaults and slider bounds.

pub mod bounds;
mod camera;
mod render;
mod water;

// Re-export all types
pub use bounds::ParamRange;
pub use camera::OrbitParams;
pub use render::RenderConfig;
pub use water::{
    ColorParams, FogParams, WaterConfig, WaveParams, BACKGROUND_COLOR, DEFAULT_DEPTH_COLOR,
    DEFAULT_SURFACE_COLOR,
};
