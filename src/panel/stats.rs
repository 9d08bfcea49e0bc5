//! Readouts shown in the debug panel: frame rate and a surface probe.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::frame::Frame;
use crate::water::{shading, WaterGrid};

/// Rolling average over the last 60 frame times
pub struct FpsTracker {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
}

impl FpsTracker {
    const WINDOW: usize = 60;

    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(Self::WINDOW),
            last_frame: Instant::now(),
        }
    }

    pub fn record_frame(&mut self) {
        let now = Instant::now();
        self.record(now - self.last_frame);
        self.last_frame = now;
    }

    fn record(&mut self, frame_time: Duration) {
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > Self::WINDOW {
            self.frame_times.pop_front();
        }
    }

    pub fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f32() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Surface state at one point for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReading {
    pub x: f32,
    pub z: f32,
    pub elevation: f32,
    pub mix_strength: f32,
}

impl ProbeReading {
    pub fn sample(grid: &WaterGrid, frame: &Frame, x: f32, z: f32) -> Self {
        let elevation = grid.elevation_at(x, z, frame.time_s, &frame.config.waves);
        Self {
            x,
            z,
            elevation,
            mix_strength: shading::mix_strength(elevation, &frame.config.colors),
        }
    }
}

/// Everything the panel displays besides the editable config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStats {
    pub fps: f32,
    pub frame_index: u64,
    pub revision: u64,
    pub probe: ProbeReading,
}
