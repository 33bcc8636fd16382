//! Square heightfield lattice.
//!
//! A `Heightfield` is a `(n + 1) x (n + 1)` grid of elevations. X/Z
//! positions are fixed at allocation time from linear interpolation over the
//! bounding rectangle; only the heights are mutated, and only by the
//! displacement engine. Row-major indexing: vertex `(col, row)` lives at
//! `col + row * map_size`.

use glam::Vec3;

use crate::error::TerrainError;

#[derive(Debug, Clone)]
pub struct Heightfield {
    n: usize,
    map_size: usize,
    min_x: f32,
    min_y: f32,
    dx: f32,
    dy: f32,
    heights: Vec<f32>,
}

impl Heightfield {
    /// Allocate a flat heightfield over `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// All heights start at zero. Fails if `n < 1` or any bound is
    /// non-finite; no partial grid is ever returned.
    pub fn new(
        n: usize,
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
    ) -> Result<Self, TerrainError> {
        if n < 1 {
            return Err(TerrainError::InvalidGridSize { n });
        }
        if [min_x, max_x, min_y, max_y].iter().any(|v| !v.is_finite()) {
            return Err(TerrainError::NonFiniteBounds);
        }
        let map_size = n + 1;
        Ok(Self {
            n,
            map_size,
            min_x,
            min_y,
            dx: (max_x - min_x) / n as f32,
            dy: (max_y - min_y) / n as f32,
            heights: vec![0.0; map_size * map_size],
        })
    }

    /// Grid resolution (`map_size - 1`).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Vertices per side.
    pub fn map_size(&self) -> usize {
        self.map_size
    }

    /// Total vertex count.
    pub fn vertex_count(&self) -> usize {
        self.heights.len()
    }

    /// All heights in row-major order.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    #[inline]
    fn idx(&self, col: usize, row: usize) -> usize {
        col + row * self.map_size
    }

    /// Height at an in-bounds vertex.
    #[inline]
    pub fn height(&self, col: usize, row: usize) -> f32 {
        self.heights[self.idx(col, row)]
    }

    /// Overwrite the height at an in-bounds vertex.
    #[inline]
    pub fn set_height(&mut self, col: usize, row: usize, height: f32) {
        let i = self.idx(col, row);
        self.heights[i] = height;
    }

    /// Height lookup with toroidal wrap: out-of-range indices on either axis
    /// are reduced modulo `map_size`, negatives wrapping from the far edge.
    /// Never fails, by design of the displacement neighbor policy.
    #[inline]
    pub fn wrapped_height(&self, col: isize, row: isize) -> f32 {
        let m = self.map_size as isize;
        let c = col.rem_euclid(m) as usize;
        let r = row.rem_euclid(m) as usize;
        self.heights[self.idx(c, r)]
    }

    /// World-space position of a vertex: `(x, height, z)`.
    #[inline]
    pub fn position(&self, col: usize, row: usize) -> Vec3 {
        Vec3::new(
            self.min_x + self.dx * col as f32,
            self.height(col, row),
            self.min_y + self.dy * row as f32,
        )
    }
}
