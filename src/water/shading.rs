//! Elevation color mix and depth fog.
//!
//! CPU twins of the fragment stage in `water.wgsl`; keep the two in step.

use crate::color::Rgb;
use crate::params::{ColorParams, FogParams, WaterConfig};

/// Blend weight toward the surface color, clamped to [0, 1]
pub fn mix_strength(elevation: f32, colors: &ColorParams) -> f32 {
    ((elevation + colors.color_offset) * colors.color_multiplier).clamp(0.0, 1.0)
}

/// Water color before fog
pub fn water_color(elevation: f32, colors: &ColorParams) -> Rgb {
    colors
        .depth_color
        .lerp(colors.surface_color, mix_strength(elevation, colors))
}

/// Hermite ramp from `near` to `far`, as in linear scene fog
pub fn fog_factor(depth: f32, fog: &FogParams) -> f32 {
    if fog.far <= fog.near {
        return if depth >= fog.far { 1.0 } else { 0.0 };
    }
    let t = ((depth - fog.near) / (fog.far - fog.near)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub fn apply_fog(color: Rgb, depth: f32, fog: &FogParams) -> Rgb {
    color.lerp(fog.color, fog_factor(depth, fog))
}

/// Final color of a fragment at `elevation`, `depth` along the view axis
pub fn shade(elevation: f32, depth: f32, config: &WaterConfig) -> Rgb {
    apply_fog(water_color(elevation, &config.colors), depth, &config.fog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_strength_is_clamped() {
        let colors = ColorParams {
            color_multiplier: 10.0,
            ..Default::default()
        };
        assert_eq!(mix_strength(1000.0, &colors), 1.0);
        assert_eq!(mix_strength(-1000.0, &colors), 0.0);

        let extreme = ColorParams {
            color_offset: 1.0,
            color_multiplier: 1e30,
            ..Default::default()
        };
        assert_eq!(mix_strength(0.5, &extreme), 1.0);
    }

    #[test]
    fn test_mix_endpoints_give_exact_colors() {
        let colors = ColorParams::default();

        // (e + 0.08) * 5 <= 0 for e <= -0.08
        assert_eq!(water_color(-0.5, &colors), colors.depth_color);
        // >= 1 for e >= 0.12
        assert_eq!(water_color(0.5, &colors), colors.surface_color);
    }

    #[test]
    fn test_default_mix_at_rest() {
        let colors = ColorParams::default();
        assert!((mix_strength(0.0, &colors) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_fog_ramp() {
        let fog = FogParams::default();
        assert_eq!(fog_factor(0.5, &fog), 0.0);
        assert_eq!(fog_factor(1.0, &fog), 0.0);
        assert!((fog_factor(1.5, &fog) - 0.5).abs() < 1e-6);
        assert_eq!(fog_factor(2.0, &fog), 1.0);
        assert_eq!(fog_factor(50.0, &fog), 1.0);
    }

    #[test]
    fn test_fog_with_collapsed_range() {
        let fog = FogParams {
            near: 2.0,
            far: 2.0,
            ..Default::default()
        };
        assert_eq!(fog_factor(1.99, &fog), 0.0);
        assert_eq!(fog_factor(2.0, &fog), 1.0);
    }

    #[test]
    fn test_shade_fades_into_fog_color() {
        let config = WaterConfig::default();
        assert_eq!(shade(0.0, 10.0, &config), config.fog.color);
        assert_eq!(
            shade(0.0, 0.5, &config),
            water_color(0.0, &config.colors)
        );
    }
}
