//! The three independent noise channels driving landscape generation.
//!
//! Each channel is seeded separately so terrain shape, pathways, and
//! vegetation placement are fully decorrelated. Seeds are randomized per
//! generation run by default — terrain differs between sessions — but can be
//! pinned for reproducible tests.

use noise::{NoiseFn, Perlin, Value};
use rand::Rng;

/// Base frequency of the terrain-height channel.
const TERRAIN_FREQUENCY: f64 = 0.025;
/// Frequency of the path channel.
const PATH_FREQUENCY: f64 = 0.05;
/// Frequency of the vegetation placement dice-roll channel. High enough
/// that adjacent cells are effectively independent samples.
const PLACEMENT_FREQUENCY: f64 = 10.0;

/// Seeds for the three noise channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelSeeds {
    /// Terrain-height Perlin seed.
    pub terrain: u32,
    /// Pathway Perlin seed.
    pub path: u32,
    /// Placement dice-roll seed.
    pub placement: u32,
}

impl ChannelSeeds {
    /// Roll fresh seeds from the thread RNG.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self {
            terrain: rng.random(),
            path: rng.random(),
            placement: rng.random(),
        }
    }

    /// Derive all three seeds from one value, for reproducible terrain.
    pub fn from_base(base: u32) -> Self {
        Self {
            terrain: base,
            path: base.wrapping_add(0x9E37_79B9),
            placement: base.wrapping_add(0x3C6E_F372),
        }
    }
}

/// Seeded noise sources sampled once per grid cell during generation.
pub struct NoiseChannels {
    terrain: Perlin,
    path: Perlin,
    placement: Value,
    seeds: ChannelSeeds,
}

impl NoiseChannels {
    /// Create the channels from explicit seeds.
    pub fn new(seeds: ChannelSeeds) -> Self {
        Self {
            terrain: Perlin::new(seeds.terrain),
            path: Perlin::new(seeds.path),
            // Value noise rather than gradient noise: the placement channel
            // is sampled at whole-number lattice points, where Perlin is
            // identically zero and simplex stays well under the sparse
            // placement gates. Value noise returns the per-corner hash
            // there, spread across the full [-1, 1] span.
            placement: Value::new(seeds.placement),
            seeds,
        }
    }

    /// The seeds this channel set was built from.
    pub fn seeds(&self) -> ChannelSeeds {
        self.seeds
    }

    /// Multi-octave terrain height sample, un-normalized.
    ///
    /// Three octaves at `f`, `2f`, `4f` with amplitudes 1, 0.5, 0.25; the
    /// raw sum lies in roughly `[-1.75, 1.75]` and is what biome
    /// classification operates on. Divide by 1.75 to normalize.
    pub fn terrain_sample(&self, x: f64, y: f64) -> f32 {
        let base = self.terrain.get([x * TERRAIN_FREQUENCY, y * TERRAIN_FREQUENCY]);
        let mid = self
            .terrain
            .get([2.0 * x * TERRAIN_FREQUENCY, 2.0 * y * TERRAIN_FREQUENCY]);
        let high = self
            .terrain
            .get([4.0 * x * TERRAIN_FREQUENCY, 4.0 * y * TERRAIN_FREQUENCY]);
        (base + 0.5 * mid + 0.25 * high) as f32
    }

    /// Single-octave turbulence sample for pathways.
    ///
    /// Taking the absolute value folds the noise around zero, producing the
    /// winding low-value channels the path biome keys on.
    pub fn path_sample(&self, x: f64, y: f64) -> f32 {
        self.path.get([x * PATH_FREQUENCY, y * PATH_FREQUENCY]).abs() as f32
    }

    /// High-frequency placement dice roll in `[-1, 1]`.
    ///
    /// Grid cells land on distinct lattice corners, so each cell reads an
    /// independent value covering the whole range, including the tail the
    /// placement thresholds gate on.
    pub fn placement_sample(&self, x: f64, y: f64) -> f32 {
        self.placement
            .get([x * PLACEMENT_FREQUENCY, y * PLACEMENT_FREQUENCY]) as f32
    }
}
