//! Procedural desert terrain: grid mesh construction, noise-driven height and
//! biome assignment, vertex normal estimation, vegetation anchors, and the
//! ground queries the player camera runs every frame.

mod biome;
mod channels;
mod landscape;
mod mesh;
mod normals;
mod query;

pub use biome::{Biome, BiomeGroup, biome_weight, classify, should_place};
pub use channels::{ChannelSeeds, NoiseChannels};
pub use landscape::{
    Landscape, LandscapeConfig, LandscapeGenerator, TerrainError, VegetationAnchor,
};
pub use mesh::{TerrainMesh, TerrainVertex};
pub use normals::estimate_normals;
pub use query::{GroundSample, TerrainQuery};
