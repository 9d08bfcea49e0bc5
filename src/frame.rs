//! Per-frame inputs: the configuration store and the tick that snapshots it.
//!
//! The window loop calls [`FrameDriver::tick`] once per redraw. Everything the
//! surface needs for that frame is in the returned [`Frame`]; nothing else is read
//! while the frame is built.

use crate::clock::FrameClock;
use crate::params::WaterConfig;

/// Holder of the current configuration snapshot
///
/// Edits replace the whole snapshot, so a frame never sees half an update.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: WaterConfig,
    revision: u64,
}

impl ConfigStore {
    pub fn new(config: WaterConfig) -> Self {
        Self {
            current: config,
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> WaterConfig {
        self.current
    }

    /// Bumped on every effective change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in `config`; returns whether anything changed
    pub fn replace(&mut self, config: WaterConfig) -> bool {
        if config == self.current {
            return false;
        }
        self.current = config;
        self.revision += 1;
        log::debug!("Water config revision {}", self.revision);
        true
    }

    /// Apply `edit` to a copy of the snapshot and swap it in
    pub fn update(&mut self, edit: impl FnOnce(&mut WaterConfig)) -> bool {
        let mut next = self.current;
        edit(&mut next);
        self.replace(next)
    }

    pub fn reset(&mut self) -> bool {
        self.replace(WaterConfig::default())
    }
}

/// Inputs of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Frames ticked before this one
    pub index: u64,

    /// Elapsed seconds, never less than the previous frame's
    pub time_s: f32,

    /// Configuration read once for this frame
    pub config: WaterConfig,
}

/// Turns clock readings and the config store into frames
#[derive(Debug, Default)]
pub struct FrameDriver {
    frames: u64,
    last_time_s: f32,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, clock: &dyn FrameClock, store: &ConfigStore) -> Frame {
        let reading = clock.elapsed_secs();
        let time_s = if reading.is_finite() {
            reading.max(self.last_time_s)
        } else {
            self.last_time_s
        };

        let frame = Frame {
            index: self.frames,
            time_s,
            config: store.snapshot(),
        };

        self.frames += 1;
        self.last_time_s = time_s;
        frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::color::Rgb;
    use crate::water::{shading, WaveField};

    #[test]
    fn test_tick_counts_frames_and_reads_clock() {
        let clock = ManualClock::new(0.0);
        let store = ConfigStore::default();
        let mut driver = FrameDriver::new();

        let first = driver.tick(&clock, &store);
        clock.advance(0.016);
        let second = driver.tick(&clock, &store);

        assert_eq!(first.index, 0);
        assert_eq!(second.index, 1);
        assert_eq!(first.time_s, 0.0);
        assert!((second.time_s - 0.016).abs() < 1e-7);
        assert_eq!(driver.frames(), 2);
    }

    #[test]
    fn test_time_never_goes_backwards() {
        let clock = ManualClock::new(5.0);
        let store = ConfigStore::default();
        let mut driver = FrameDriver::new();

        assert_eq!(driver.tick(&clock, &store).time_s, 5.0);
        clock.set(2.0);
        assert_eq!(driver.tick(&clock, &store).time_s, 5.0);
        clock.set(f32::NAN);
        assert_eq!(driver.tick(&clock, &store).time_s, 5.0);
        clock.set(6.0);
        assert_eq!(driver.tick(&clock, &store).time_s, 6.0);
    }

    #[test]
    fn test_replace_bumps_revision_only_on_change() {
        let mut store = ConfigStore::default();
        assert!(!store.replace(WaterConfig::default()));
        assert_eq!(store.revision(), 0);

        assert!(store.update(|c| c.waves.small_iterations = 2));
        assert_eq!(store.revision(), 1);
        assert_eq!(store.snapshot().waves.small_iterations, 2);

        assert!(store.reset());
        assert_eq!(store.snapshot(), WaterConfig::default());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_color_change_reaches_next_frame() {
        let clock = ManualClock::new(0.0);
        let mut store = ConfigStore::default();
        let mut driver = FrameDriver::new();

        let before = driver.tick(&clock, &store);
        let red = Rgb::new(1.0, 0.0, 0.0);
        store.update(|c| {
            c.colors.depth_color = red;
            c.colors.surface_color = red;
        });
        let after = driver.tick(&clock, &store);

        // Frame already taken keeps its snapshot
        assert_ne!(before.config.colors.depth_color, red);
        assert_eq!(shading::water_color(0.0, &after.config.colors), red);
    }

    #[test]
    fn test_default_scene_at_origin() {
        let clock = ManualClock::new(0.0);
        let store = ConfigStore::default();
        let frame = FrameDriver::new().tick(&clock, &store);

        let field = WaveField::default();
        let elevation = field.elevation(0.0, 0.0, frame.time_s, &frame.config.waves);
        assert_eq!(elevation, 0.0);

        let mix = shading::mix_strength(elevation, &frame.config.colors);
        assert!((mix - 0.4).abs() < 1e-6);
    }
}
