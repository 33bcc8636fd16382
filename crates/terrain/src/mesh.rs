//! Mesh assembly: triangulation, smooth normals, per-vertex band colors.
//!
//! Every quad is split along the same diagonal into two triangles:
//!
//! ```text
//!     c---d        A = (v, v+1, v+map_size)       = (a, b, c)
//!     | \ |        B = (v+1, v+1+map_size, v+map_size) = (b, d, c)
//!     a---b
//! ```
//!
//! Face normals are accumulated (summed) into each triangle's three vertex
//! slots and every per-vertex sum is normalized exactly once at the end,
//! giving smooth Gouraud-style lighting normals. All accumulation state is
//! owned by the one `build_mesh` call; nothing leaks between generations.

use glam::Vec3;

use crate::coloring::classify;
use crate::heightfield::Heightfield;

/// Cross products shorter than this are treated as degenerate and contribute
/// nothing to the accumulated normals.
const DEGENERATE_EPS: f32 = 1e-8;

/// Flat buffers ready for upload to a GPU vertex/index buffer pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    /// 3 floats per vertex: `(x, height, z)`.
    pub positions: Vec<f32>,
    /// 3 floats per vertex, unit length except degenerate-only vertices.
    pub normals: Vec<f32>,
    /// 4 floats per vertex, alpha fixed at 1.0.
    pub colors: Vec<f32>,
    /// 3 indices per triangle.
    pub indices: Vec<u32>,
    /// Number of triangles in `indices`: `2 * n^2`.
    pub triangle_count: usize,
}

impl TerrainMesh {
    /// Number of vertices in the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Unit face normal of the triangle `(a, b, c)`, oriented +Y for the grid's
/// winding. Zero-area triangles yield `Vec3::ZERO` instead of NaN.
fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    // edge2 x edge1 so an upward-facing triangle's normal points up.
    let cross = (c - a).cross(b - a);
    let len = cross.length();
    if len < DEGENERATE_EPS {
        Vec3::ZERO
    } else {
        cross / len
    }
}

/// Assemble the four output buffers from a displaced heightfield.
pub fn build_mesh(field: &Heightfield) -> TerrainMesh {
    let map_size = field.map_size();
    let n = field.n();
    let vertex_count = field.vertex_count();

    let mut accum = vec![Vec3::ZERO; vertex_count];
    let mut indices: Vec<u32> = Vec::with_capacity(6 * n * n);
    let mut triangle_count = 0;

    for row in 0..n {
        for col in 0..n {
            let v = col + row * map_size;
            let a = field.position(col, row);
            let b = field.position(col + 1, row);
            let c = field.position(col, row + 1);
            let d = field.position(col + 1, row + 1);

            indices.push(v as u32);
            indices.push((v + 1) as u32);
            indices.push((v + map_size) as u32);
            let n1 = face_normal(a, b, c);
            accum[v] += n1;
            accum[v + 1] += n1;
            accum[v + map_size] += n1;

            indices.push((v + 1) as u32);
            indices.push((v + 1 + map_size) as u32);
            indices.push((v + map_size) as u32);
            let n2 = face_normal(b, d, c);
            accum[v + 1] += n2;
            accum[v + 1 + map_size] += n2;
            accum[v + map_size] += n2;

            triangle_count += 2;
        }
    }

    let mut positions = Vec::with_capacity(3 * vertex_count);
    let mut normals = Vec::with_capacity(3 * vertex_count);
    let mut colors = Vec::with_capacity(4 * vertex_count);

    for row in 0..map_size {
        for col in 0..map_size {
            let p = field.position(col, row);
            positions.extend_from_slice(&[p.x, p.y, p.z]);

            let sum = accum[col + row * map_size];
            let len = sum.length();
            let normal = if len < DEGENERATE_EPS {
                Vec3::ZERO
            } else {
                sum / len
            };
            normals.extend_from_slice(&[normal.x, normal.y, normal.z]);

            colors.extend_from_slice(&classify(p.y).rgba());
        }
    }

    TerrainMesh {
        positions,
        normals,
        colors,
        indices,
        triangle_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerrainError;

    fn flat_field(n: usize, height: f32) -> Heightfield {
        let mut field = Heightfield::new(n, -10.0, 10.0, -10.0, 10.0).unwrap();
        for row in 0..field.map_size() {
            for col in 0..field.map_size() {
                field.set_height(col, row, height);
            }
        }
        field
    }

    #[test]
    fn test_buffer_length_contracts() {
        for n in [1, 2, 3, 8] {
            let mesh = build_mesh(&flat_field(n, 0.0));
            let map_size = n + 1;
            assert_eq!(mesh.positions.len(), 3 * map_size * map_size);
            assert_eq!(mesh.normals.len(), 3 * map_size * map_size);
            assert_eq!(mesh.colors.len(), 4 * map_size * map_size);
            assert_eq!(mesh.indices.len(), 6 * n * n);
            assert_eq!(mesh.triangle_count, 2 * n * n);
            assert_eq!(mesh.vertex_count(), map_size * map_size);
        }
    }

    #[test]
    fn test_flat_grid_normals_point_straight_up() {
        let mesh = build_mesh(&flat_field(2, 300.0));
        for normal in mesh.normals.chunks_exact(3) {
            assert_eq!(normal, &[0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_index_triples_match_fixed_diagonal_split() {
        // 2x2-vertex grid: one quad, triangles (0,1,2)... in row-major terms
        // A = (0, 1, 2), B = (1, 3, 2) with map_size = 2.
        let mesh = build_mesh(&flat_field(1, 0.0));
        assert_eq!(mesh.indices, vec![0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn test_all_indices_in_range() {
        let mesh = build_mesh(&flat_field(4, 0.0));
        let vcount = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < vcount));
    }

    #[test]
    fn test_sloped_grid_normals_unit_length_and_upward() {
        let mut field = Heightfield::new(4, -100.0, 100.0, -100.0, 100.0).unwrap();
        for row in 0..field.map_size() {
            for col in 0..field.map_size() {
                field.set_height(col, row, 10.0 * col as f32 + 3.0 * row as f32);
            }
        }
        let mesh = build_mesh(&field);
        for normal in mesh.normals.chunks_exact(3) {
            let len = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2])
                .sqrt();
            assert!((len - 1.0).abs() < 1e-4, "normal not unit length: {normal:?}");
            assert!(normal[1] > 0.0, "normal not upward: {normal:?}");
        }
    }

    #[test]
    fn test_degenerate_triangles_yield_zero_normal() {
        // Collapse the grid to a line in world space: every triangle has
        // zero area, so accumulation must be skipped, never NaN.
        let field = Heightfield::new(2, 0.0, 0.0, 0.0, 0.0).unwrap();
        let mesh = build_mesh(&field);
        assert!(mesh.normals.iter().all(|v| *v == 0.0));
        assert!(mesh.normals.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_colors_follow_height_bands() {
        let mesh = build_mesh(&flat_field(1, 750.0));
        let expected = crate::coloring::Band::High.rgba();
        for color in mesh.colors.chunks_exact(4) {
            assert_eq!(color, &expected);
        }
    }

    #[test]
    fn test_field_and_mesh_reject_invalid_grid() {
        assert!(matches!(
            Heightfield::new(0, 0.0, 1.0, 0.0, 1.0),
            Err(TerrainError::InvalidGridSize { n: 0 })
        ));
    }
}
