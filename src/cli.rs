//! Command-line argument parsing.

use clap::Parser;

use crate::color::Rgb;
use crate::params::{RenderConfig, WaterConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ragingsea")]
#[command(about = "Animated water surface with a live-tuning debug panel", long_about = None)]
pub struct Args {
    /// Initial window width
    #[arg(long, value_name = "PIXELS", default_value_t = 1280, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height
    #[arg(long, value_name = "PIXELS", default_value_t = 720, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Grid subdivisions per side
    #[arg(long, value_name = "N", default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..=2048))]
    pub subdivisions: u32,

    /// Trough color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub depth_color: Option<Rgb>,

    /// Crest color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub surface_color: Option<Rgb>,

    /// Small wave octaves (0 disables the chop)
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u32).range(0..=5))]
    pub small_iterations: Option<u32>,

    /// Start with the debug panel hidden (H toggles it)
    #[arg(long)]
    pub hide_panel: bool,
}

impl Args {
    /// Defaults with any overrides from the command line
    pub fn water_config(&self) -> WaterConfig {
        let mut config = WaterConfig::default();

        if let Some(color) = self.depth_color {
            config.colors.depth_color = color;
        }
        if let Some(color) = self.surface_color {
            config.colors.surface_color = color;
        }
        if let Some(iterations) = self.small_iterations {
            config.waves.small_iterations = iterations;
        }

        config.clamped()
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            subdivisions: self.subdivisions as usize,
            ..Default::default()
        }
    }
}
