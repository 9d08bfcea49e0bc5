//! Water surface parameters: wave shape, color mix and fog.

use crate::color::Rgb;

use super::bounds;

/// Wave displacement parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Big wave amplitude (mesh units)
    pub big_elevation: f32,

    /// Big wave spatial frequency along X (radians per mesh unit)
    pub big_frequency_x: f32,

    /// Big wave spatial frequency along Z (radians per mesh unit)
    pub big_frequency_z: f32,

    /// Big wave phase speed (radians per second)
    pub big_speed: f32,

    /// Small wave amplitude of the first octave (mesh units)
    pub small_elevation: f32,

    /// Small wave noise frequency of the first octave
    pub small_frequency: f32,

    /// Small wave time scale (noise units per second)
    pub small_speed: f32,

    /// Number of small wave octaves (0 = big waves only)
    pub small_iterations: u32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            big_elevation: 0.2,
            big_frequency_x: 4.0,
            big_frequency_z: 1.5,
            big_speed: 1.2,
            small_elevation: 0.15,
            small_frequency: 3.0,
            small_speed: 0.2,
            small_iterations: 4,
        }
    }
}

impl WaveParams {
    /// Clamp every field into its slider range
    pub fn clamped(self) -> Self {
        Self {
            big_elevation: bounds::BIG_WAVES_ELEVATION.apply(self.big_elevation),
            big_frequency_x: bounds::BIG_WAVES_FREQUENCY_X.apply(self.big_frequency_x),
            big_frequency_z: bounds::BIG_WAVES_FREQUENCY_Z.apply(self.big_frequency_z),
            big_speed: bounds::BIG_WAVES_SPEED.apply(self.big_speed),
            small_elevation: bounds::SMALL_WAVES_ELEVATION.apply(self.small_elevation),
            small_frequency: bounds::SMALL_WAVES_FREQUENCY.apply(self.small_frequency),
            small_speed: bounds::SMALL_WAVES_SPEED.apply(self.small_speed),
            small_iterations: self.small_iterations.min(bounds::SMALL_ITERATIONS_MAX),
        }
    }
}

/// Elevation-driven color mix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorParams {
    /// Color of the troughs
    pub depth_color: Rgb,

    /// Color of the crests
    pub surface_color: Rgb,

    /// Shifts elevation before scaling
    pub color_offset: f32,

    /// Steepness of the depth to surface transition
    pub color_multiplier: f32,
}

pub const DEFAULT_DEPTH_COLOR: Rgb = Rgb::new(
    0x18 as f32 / 255.0,
    0x66 as f32 / 255.0,
    0x91 as f32 / 255.0,
);
pub const DEFAULT_SURFACE_COLOR: Rgb = Rgb::new(
    0x9b as f32 / 255.0,
    0xd8 as f32 / 255.0,
    0xff as f32 / 255.0,
);

impl Default for ColorParams {
    fn default() -> Self {
        Self {
            depth_color: DEFAULT_DEPTH_COLOR,
            surface_color: DEFAULT_SURFACE_COLOR,
            color_offset: 0.08,
            color_multiplier: 5.0,
        }
    }
}

impl ColorParams {
    pub fn clamped(self) -> Self {
        Self {
            color_offset: bounds::COLOR_OFFSET.apply(self.color_offset),
            color_multiplier: bounds::COLOR_MULTIPLIER.apply(self.color_multiplier),
            ..self
        }
    }
}

/// Distance fog, blended toward `color` between `near` and `far`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogParams {
    pub color: Rgb,

    /// Distance where fog starts (mesh units from the camera)
    pub near: f32,

    /// Distance where fog is opaque
    pub far: f32,
}

/// Scene background; fog fades into it
pub const BACKGROUND_COLOR: Rgb = Rgb::new(
    0x26 as f32 / 255.0,
    0x28 as f32 / 255.0,
    0x37 as f32 / 255.0,
);

impl Default for FogParams {
    fn default() -> Self {
        Self {
            color: BACKGROUND_COLOR,
            near: 1.0,
            far: 2.0,
        }
    }
}

/// Complete per-frame configuration snapshot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaterConfig {
    pub waves: WaveParams,
    pub colors: ColorParams,
    pub fog: FogParams,
}

impl WaterConfig {
    /// Clamp the tunable fields into their slider ranges (fog is not tunable)
    pub fn clamped(self) -> Self {
        Self {
            waves: self.waves.clamped(),
            colors: self.colors.clamped(),
            fog: self.fog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_match_hex() {
        assert_eq!(DEFAULT_DEPTH_COLOR.to_hex(), "#186691");
        assert_eq!(DEFAULT_SURFACE_COLOR.to_hex(), "#9bd8ff");
        assert_eq!(BACKGROUND_COLOR.to_hex(), "#262837");
    }

    #[test]
    fn test_defaults_survive_clamping() {
        let config = WaterConfig::default();
        let clamped = config.clamped();

        assert_eq!(clamped.waves.small_iterations, 4);
        assert!((clamped.waves.big_elevation - 0.2).abs() < 1e-6);
        assert!((clamped.waves.big_speed - 1.2).abs() < 1e-5);
        assert!((clamped.colors.color_offset - 0.08).abs() < 1e-6);
        assert_eq!(clamped.colors.depth_color, config.colors.depth_color);
    }

    #[test]
    fn test_clamping_caps_iterations() {
        let waves = WaveParams {
            small_iterations: 12,
            ..Default::default()
        };
        assert_eq!(waves.clamped().small_iterations, 5);
    }
}
