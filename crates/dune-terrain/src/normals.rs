//! Smooth per-vertex normal estimation for terrain lighting.

use glam::Vec3;

use crate::mesh::TerrainMesh;

/// Compute averaged vertex normals from the mesh quads, in place.
///
/// Every quad contributes its face normal to all four corner vertices, and
/// each vertex divides by its contribution count afterwards. The face
/// normal comes from the cross product of the quad's top edge and left
/// edge, negated so it faces up for this mesh's winding.
///
/// Accumulation is commutative, so the result is independent of quad
/// iteration order once the full pass completes.
///
/// Edge note: the quad scan starts one full row in and pairs each vertex
/// with the row before it, so boundary vertices collect fewer than four
/// contributions. Every vertex that received at least one contribution is
/// averaged, boundary rows included, which keeps edge normals unit-scale.
pub fn estimate_normals(mesh: &mut TerrainMesh) {
    let w = mesh.width as usize;
    let count = mesh.vertices.len();
    let mut contributions = vec![0u32; count];
    let mut accumulated = vec![Vec3::ZERO; count];

    for i in w..count {
        // The right edge column has no quad to its right.
        if i % w == w - 1 {
            continue;
        }

        let top_left = Vec3::from_array(mesh.vertices[i].position);
        let top_right = Vec3::from_array(mesh.vertices[i + 1].position);
        let bottom_left = Vec3::from_array(mesh.vertices[i - w].position);

        // Negated so lighting doesn't come out reversed.
        let normal = -(top_right - top_left).cross(bottom_left - top_left).normalize();

        for corner in [i, i + 1, i - w, i - w + 1] {
            accumulated[corner] += normal;
            contributions[corner] += 1;
        }
    }

    for (i, vertex) in mesh.vertices.iter_mut().enumerate() {
        if contributions[i] > 0 {
            vertex.normal = (accumulated[i] / contributions[i] as f32).to_array();
        }
    }
}
