//! Water surface: wave height field, displaced grid mesh and color shading.

mod mesh;
pub mod shading;
mod waves;

// Re-export public types
pub use mesh::{Vertex, WaterGrid};
pub use waves::{WaveField, NOISE_SEED};
