//! Read-only ground queries the camera runs every frame: edge containment
//! and height/biome lookup beneath an arbitrary world position.

use glam::Vec3;

use crate::biome::BiomeGroup;
use crate::landscape::Landscape;
use crate::mesh::TerrainMesh;

/// The ground directly beneath a queried world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundSample {
    /// World-space terrain height (terrain origin already applied).
    pub height: f32,
    /// Coarse biome group at the cell, for footstep audio.
    pub group: BiomeGroup,
}

/// A cheap read-only view over a generated landscape.
///
/// The rectangular bounds are read from the four corner vertices rather
/// than recomputed from grid dimensions, so an irregular future grid would
/// still be contained correctly. Cell lookup resolves the containing cell
/// directly from position arithmetic instead of scanning vertices; a query
/// outside the grid returns `None` rather than silently handing back stale
/// data.
#[derive(Clone, Copy, Debug)]
pub struct TerrainQuery<'a> {
    mesh: &'a TerrainMesh,
    origin: Vec3,
    left_x: f32,
    right_x: f32,
    top_z: f32,
    bottom_z: f32,
}

impl<'a> TerrainQuery<'a> {
    /// Build a query view over a landscape.
    pub fn new(landscape: &'a Landscape) -> Self {
        let mesh = &landscape.mesh;
        let w = mesh.width;
        let bottom_left = mesh.vertices[TerrainMesh::bottom_left_index(w)].position;
        let bottom_right = mesh.vertices[TerrainMesh::bottom_right_index(w)].position;
        let top_left = mesh.vertices[TerrainMesh::top_left_index(w)].position;
        Self {
            mesh,
            origin: landscape.origin,
            left_x: bottom_left[0],
            right_x: bottom_right[0],
            // Rows march along -z, so the top corner has the smaller z.
            top_z: top_left[2],
            bottom_z: bottom_left[2],
        }
    }

    /// Whether a world position lies outside the terrain rectangle.
    pub fn is_at_edge(&self, world_pos: Vec3) -> bool {
        let local = world_pos - self.origin;
        local.x < self.left_x
            || local.x > self.right_x
            || local.z < self.top_z
            || local.z > self.bottom_z
    }

    /// Ground height and biome group at the cell beneath `world_pos`, or
    /// `None` when the position is off the grid.
    pub fn sample(&self, world_pos: Vec3) -> Option<GroundSample> {
        let local = world_pos - self.origin;
        let spacing = self.mesh.spacing;
        let w = self.mesh.width as i64;

        let col = (local.x / spacing - 1.0).round() as i64;
        let row = (1.0 - local.z / spacing).round() as i64;
        if col < 0 || col >= w || row < 0 || row >= w {
            return None;
        }

        let vertex = &self.mesh.vertices[(row * w + col) as usize];
        Some(GroundSample {
            height: vertex.position[1] + self.origin.y,
            group: BiomeGroup::from_weight(vertex.biome_weight),
        })
    }

    /// World-space position of the grid's first vertex, the bottom-left
    /// corner where generation starts (y carries only the terrain origin's
    /// height).
    pub fn start_anchor(&self) -> Vec3 {
        self.origin + Vec3::new(self.left_x, 0.0, self.bottom_z)
    }

    /// World-space centre of the terrain rectangle (y carries only the
    /// terrain origin's height).
    pub fn center(&self) -> Vec3 {
        self.origin
            + Vec3::new(
                (self.left_x + self.right_x) * 0.5,
                0.0,
                (self.top_z + self.bottom_z) * 0.5,
            )
    }
}
