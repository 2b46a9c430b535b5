//! Landscape generation: drives the noise channels and biome classifier
//! across the grid to produce heights, per-vertex biome weights, and the
//! vegetation anchor lists.

use std::hash::{DefaultHasher, Hash, Hasher};

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::biome::{Biome, biome_weight, classify, should_place};
use crate::channels::{ChannelSeeds, NoiseChannels};
use crate::mesh::TerrainMesh;
use crate::normals::estimate_normals;

/// Sum of the three octave amplitudes (1 + 0.5 + 0.25); normalizes the raw
/// terrain sample before height scaling.
const OCTAVE_NORM: f32 = 1.75;
/// Extra vertical range applied after normalization.
const HEIGHT_SCALE: f32 = 2.0;
/// Highest vegetation variant id rolled per anchor.
const VARIANT_COUNT: u8 = 3;
/// Largest scale divisor rolled per anchor.
const MAX_SCALE_DIVISOR: u8 = 4;

/// Errors from landscape generation.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// The grid needs at least two vertices per side to form a quad.
    #[error("terrain width {0} is too small, need at least 2")]
    WidthTooSmall(u32),

    /// Vertex spacing must be a positive distance.
    #[error("terrain spacing {0} must be positive")]
    InvalidSpacing(f32),
}

/// A world-space position where a vegetation model should be drawn.
///
/// Generated once at landscape-generation time and immutable afterward; the
/// render layer reads these every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VegetationAnchor {
    /// World-space anchor position (terrain origin already applied).
    pub position: Vec3,
    /// Which model variant to draw, in `[0, 3)`.
    pub variant: u8,
    /// Rotation around the up axis, degrees in `[-180, 180]`.
    pub rotation_degrees: f32,
    /// Divisor applied to the model's base scale, in `[1, 4]`.
    pub scale_divisor: u8,
}

/// Configuration for a generation run.
#[derive(Clone, Copy, Debug)]
pub struct LandscapeConfig {
    /// Vertices per side of the grid.
    pub width: u32,
    /// World-space distance between adjacent vertices.
    pub spacing: f32,
    /// World-space translation applied to the whole terrain when drawn.
    pub origin: Vec3,
    /// Pinned noise seeds; `None` rolls fresh seeds for this run.
    pub seeds: Option<ChannelSeeds>,
}

impl Default for LandscapeConfig {
    fn default() -> Self {
        Self {
            width: 512,
            spacing: 0.1,
            origin: Vec3::new(0.0, -2.0, -1.5),
            seeds: None,
        }
    }
}

/// A fully generated terrain: mesh plus vegetation anchors, partitioned by
/// the biome group that produced them.
#[derive(Clone, Debug)]
pub struct Landscape {
    /// The generated grid mesh.
    pub mesh: TerrainMesh,
    /// World-space translation of the terrain.
    pub origin: Vec3,
    /// Anchors generated in the grass biome (cacti, dry grass).
    pub grass_anchors: Vec<VegetationAnchor>,
    /// Anchors generated at the oasis rim (palms).
    pub oasis_anchors: Vec<VegetationAnchor>,
    /// The seeds the landscape was generated from.
    pub seeds: ChannelSeeds,
}

/// Runs the generation pipeline described at module level.
pub struct LandscapeGenerator;

impl LandscapeGenerator {
    /// Generate a landscape from the given configuration.
    pub fn generate(config: &LandscapeConfig) -> Result<Landscape, TerrainError> {
        if config.width < 2 {
            return Err(TerrainError::WidthTooSmall(config.width));
        }
        if !(config.spacing > 0.0) {
            return Err(TerrainError::InvalidSpacing(config.spacing));
        }

        let seeds = config.seeds.unwrap_or_else(ChannelSeeds::random);
        let channels = NoiseChannels::new(seeds);
        let mut mesh = TerrainMesh::grid(config.width, config.spacing);
        // Anchor variant/rotation/scale rolls are decoupled from the noise
        // channels but still deterministic for pinned seeds.
        let mut anchor_rng = ChaCha8Rng::seed_from_u64(derive_anchor_seed(seeds));

        let mut grass_anchors = Vec::new();
        let mut oasis_anchors = Vec::new();

        let w = config.width as usize;
        for row in 0..w {
            for col in 0..w {
                let index = row * w + col;
                let (nx, ny) = (row as f64, col as f64);

                let terrain_val = channels.terrain_sample(nx, ny);
                let path_val = channels.path_sample(nx, ny);
                let placement_val = channels.placement_sample(nx, ny);

                mesh.vertices[index].position[1] = terrain_val / OCTAVE_NORM * HEIGHT_SCALE;

                // Classification runs on the raw octave sum, not the
                // normalized height.
                let biome = classify(terrain_val, path_val);
                mesh.vertices[index].biome_weight = biome_weight(biome);

                if should_place(biome, placement_val) {
                    let anchor = VegetationAnchor {
                        position: Vec3::from_array(mesh.vertices[index].position)
                            + config.origin,
                        variant: anchor_rng.random_range(0..VARIANT_COUNT),
                        rotation_degrees: anchor_rng.random_range(-180.0..=180.0),
                        scale_divisor: anchor_rng.random_range(1..=MAX_SCALE_DIVISOR),
                    };
                    match biome {
                        Biome::Grass => grass_anchors.push(anchor),
                        Biome::DesertOasis => oasis_anchors.push(anchor),
                        _ => unreachable!("should_place only admits grass and oasis-rim cells"),
                    }
                }
            }
        }

        estimate_normals(&mut mesh);

        Ok(Landscape {
            mesh,
            origin: config.origin,
            grass_anchors,
            oasis_anchors,
            seeds,
        })
    }
}

/// Combine the three channel seeds into one u64 for the anchor RNG.
fn derive_anchor_seed(seeds: ChannelSeeds) -> u64 {
    let mut hasher = DefaultHasher::new();
    seeds.terrain.hash(&mut hasher);
    seeds.path.hash(&mut hasher);
    seeds.placement.hash(&mut hasher);
    hasher.finish()
}
