//! Fixed-size grid mesh for the terrain: vertex layout, triangle indices,
//! and texture coordinates.
//!
//! The grid is row-major: vertex `i` sits at cell `(i / width, i % width)`.
//! The x axis runs along a row (left to right), the z axis along a column.
//! Rows are laid out front to back, so z *decreases* by one spacing step per
//! row; row 0 is the bottom (nearest) edge of the map.

use bytemuck::{Pod, Zeroable};

/// One terrain vertex as uploaded to the GPU.
///
/// `biome_weight` is not a display colour: the terrain shader reads it as a
/// per-vertex biome marker / texture blend weight (see [`crate::biome_weight`]).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    /// World-local position. y is written by landscape generation.
    pub position: [f32; 3],
    /// RGBA biome marker consumed by the terrain shader as a blend weight.
    pub biome_weight: [f32; 4],
    /// Smooth vertex normal, filled in by [`crate::estimate_normals`].
    pub normal: [f32; 3],
    /// Texture coordinate in `[0, 1]`.
    pub uv: [f32; 2],
}

/// A square grid of terrain vertices plus the triangle index list.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    /// Vertices per side of the grid.
    pub width: u32,
    /// World-space distance between adjacent vertices.
    pub spacing: f32,
    /// `width * width` vertices in row-major order.
    pub vertices: Vec<TerrainVertex>,
    /// `2 * (width - 1)^2` triangles, counter-ordered to face +Y.
    pub indices: Vec<[u32; 3]>,
}

impl TerrainMesh {
    /// Build a flat grid with positions, indices, and texture coordinates set.
    /// Heights, biome weights, and normals are left at zero for the landscape
    /// generator to fill in.
    pub fn grid(width: u32, spacing: f32) -> Self {
        let w = width as usize;
        let count = w * w;
        let mut vertices = vec![TerrainVertex::default(); count];

        for (i, vertex) in vertices.iter_mut().enumerate() {
            let row = (i / w) as f32;
            let col = (i % w) as f32;
            // The first vertex sits one spacing step in from the local
            // origin; rows march backwards along -z.
            vertex.position = [spacing * (col + 1.0), 0.0, spacing * (1.0 - row)];
            vertex.uv = [col / width as f32, row / width as f32];
        }

        // Corner texture coordinates are pinned exactly so the full texture
        // spans the terrain edge to edge.
        vertices[Self::bottom_left_index(width)].uv = [0.0, 0.0];
        vertices[Self::bottom_right_index(width)].uv = [1.0, 0.0];
        vertices[Self::top_left_index(width)].uv = [0.0, 1.0];
        vertices[Self::top_right_index(width)].uv = [1.0, 1.0];

        let quads = (w - 1) * (w - 1);
        let mut indices = Vec::with_capacity(quads * 2);
        for row in 0..w - 1 {
            for col in 0..w - 1 {
                // Row `row` is the near (bottom) edge of the quad; the next
                // row back sits one spacing step along -z.
                let bottom_left = (row * w + col) as u32;
                let bottom_right = bottom_left + 1;
                let top_left = bottom_left + width;
                let top_right = top_left + 1;
                indices.push([bottom_left, bottom_right, top_left]);
                indices.push([bottom_right, top_right, top_left]);
            }
        }

        Self {
            width,
            spacing,
            vertices,
            indices,
        }
    }

    /// Index of the bottom-left corner vertex (grid cell `(0, 0)`).
    pub fn bottom_left_index(width: u32) -> usize {
        let _ = width;
        0
    }

    /// Index of the bottom-right corner vertex.
    pub fn bottom_right_index(width: u32) -> usize {
        width as usize - 1
    }

    /// Index of the top-left corner vertex.
    pub fn top_left_index(width: u32) -> usize {
        let w = width as usize;
        w * w - w
    }

    /// Index of the top-right corner vertex.
    pub fn top_right_index(width: u32) -> usize {
        let w = width as usize;
        w * w - 1
    }

    /// Vertex count (`width * width`).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Triangle count (`2 * (width - 1)^2`).
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}
