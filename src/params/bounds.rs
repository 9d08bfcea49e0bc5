//! Slider bounds for the tunable water parameters.
//!
//! The debug panel and the CLI both go through these ranges, so a value can only
//! leave them if it is set in code.

/// Closed numeric range with a step granularity
///
/// Kept in f64 so decimal steps like 0.001 stay exact while snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into range, then snap to the nearest step above `min`
    ///
    /// Values already on a step come back unchanged.
    pub fn apply(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.min as f32;
        }
        let clamped = (value as f64).clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped as f32;
        }

        let steps = (clamped - self.min) / self.step;
        let nearest = steps.round();
        if (steps - nearest).abs() < 1e-3 {
            return clamped as f32;
        }
        (self.min + nearest * self.step).clamp(self.min, self.max) as f32
    }

    pub fn contains(&self, value: f32) -> bool {
        let value = value as f64;
        value >= self.min && value <= self.max
    }

    pub fn as_range(&self) -> std::ops::RangeInclusive<f32> {
        self.min as f32..=self.max as f32
    }
}

pub const BIG_WAVES_ELEVATION: ParamRange = ParamRange::new(0.0, 1.0, 0.001);
pub const BIG_WAVES_FREQUENCY_X: ParamRange = ParamRange::new(0.0, 10.0, 0.001);
pub const BIG_WAVES_FREQUENCY_Z: ParamRange = ParamRange::new(0.0, 10.0, 0.001);
pub const BIG_WAVES_SPEED: ParamRange = ParamRange::new(0.1, 10.0, 0.01);
pub const COLOR_OFFSET: ParamRange = ParamRange::new(0.0, 1.0, 0.001);
pub const COLOR_MULTIPLIER: ParamRange = ParamRange::new(0.0, 10.0, 0.01);
pub const SMALL_WAVES_ELEVATION: ParamRange = ParamRange::new(0.0, 1.0, 0.001);
pub const SMALL_WAVES_FREQUENCY: ParamRange = ParamRange::new(0.0, 30.0, 0.001);
pub const SMALL_WAVES_SPEED: ParamRange = ParamRange::new(0.0, 4.0, 0.001);

/// Octave count is integral, so it gets its own bound
pub const SMALL_ITERATIONS_MAX: u32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_clamps_to_range() {
        assert_eq!(BIG_WAVES_ELEVATION.apply(3.0), 1.0);
        assert_eq!(BIG_WAVES_ELEVATION.apply(-1.0), 0.0);
        assert_eq!(BIG_WAVES_SPEED.apply(0.0), 0.1);
    }

    #[test]
    fn test_apply_snaps_to_step() {
        let snapped = COLOR_MULTIPLIER.apply(4.996);
        assert!((snapped - 5.0).abs() < 1e-5, "got {}", snapped);

        let snapped = BIG_WAVES_SPEED.apply(1.2049);
        assert!((snapped - 1.2).abs() < 1e-5, "got {}", snapped);
    }

    #[test]
    fn test_apply_rejects_non_finite() {
        assert_eq!(SMALL_WAVES_FREQUENCY.apply(f32::NAN), 0.0);
        assert_eq!(BIG_WAVES_SPEED.apply(f32::INFINITY), 0.1);
    }

    #[test]
    fn test_values_on_a_step_are_untouched() {
        assert_eq!(COLOR_OFFSET.apply(0.08), 0.08);
        assert_eq!(BIG_WAVES_ELEVATION.apply(0.2), 0.2);
        assert_eq!(BIG_WAVES_SPEED.apply(1.2), 1.2);
        assert_eq!(SMALL_WAVES_ELEVATION.apply(0.15), 0.15);
    }

    #[test]
    fn test_defaults_fall_inside_bounds() {
        assert!(BIG_WAVES_FREQUENCY_X.contains(4.0));
        assert!(BIG_WAVES_FREQUENCY_Z.contains(1.5));
        assert!(COLOR_OFFSET.contains(0.08));
        assert!(SMALL_WAVES_SPEED.contains(0.2));
        assert!(SMALL_WAVES_ELEVATION.contains(0.15));
    }
}
