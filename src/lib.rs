//! Raging Sea library - animated water surface with live-tunable waves

pub mod camera;
pub mod cli;
pub mod clock;
pub mod color;
pub mod error;
pub mod frame;
pub mod panel;
pub mod params;
pub mod rendering;
pub mod water;
