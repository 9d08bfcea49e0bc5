//! Wave displacement: sine big waves plus folded Perlin octaves.

use noise::{NoiseFn, Perlin};

use crate::params::WaveParams;

/// Perlin noise seed
pub const NOISE_SEED: u32 = 0;

/// Height field of the water surface
///
/// Pure function of position, time and parameters; holds only the noise
/// permutation table.
#[derive(Clone)]
pub struct WaveField {
    perlin: Perlin,
}

impl WaveField {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Large swell: product of two travelling sines, one per axis
    pub fn big_waves(x: f32, z: f32, time_s: f32, p: &WaveParams) -> f32 {
        let phase = time_s * p.big_speed;
        (x * p.big_frequency_x + phase).sin()
            * (z * p.big_frequency_z + phase).sin()
            * p.big_elevation
    }

    /// Fine chop: `iterations` octaves of |perlin|, octave `i` sampled at
    /// frequency `small_frequency * i` and weighted `small_elevation / i`
    ///
    /// Always <= 0: the folded noise carves troughs, leaving sharp crests.
    pub fn small_waves(&self, x: f32, z: f32, time_s: f32, p: &WaveParams) -> f32 {
        let t = (time_s * p.small_speed) as f64;
        let mut elevation = 0.0;

        for i in 1..=p.small_iterations {
            let octave = i as f32;
            let frequency = p.small_frequency * octave;
            let noise = self.perlin.get([(x * frequency) as f64, (z * frequency) as f64, t]) as f32;
            elevation -= noise.abs() * p.small_elevation / octave;
        }

        elevation
    }

    /// Vertical displacement at `(x, z)` for `time_s`
    pub fn elevation(&self, x: f32, z: f32, time_s: f32, p: &WaveParams) -> f32 {
        Self::big_waves(x, z, time_s, p) + self.small_waves(x, z, time_s, p)
    }
}

impl Default for WaveField {
    fn default() -> Self {
        Self::new(NOISE_SEED)
    }
}
