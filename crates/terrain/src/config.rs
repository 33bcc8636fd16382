//! Terrain generation parameters.
//!
//! `TerrainParams` bundles everything one generation call needs: grid
//! resolution, the world-space bounding rectangle, the corner seed height,
//! and the fractal roughness controls. The defaults reproduce the classic
//! 256x256 configuration (grid n = 255, bounds [-1000, 1000]^2, corner
//! height 300, roughness 300 decaying by 0.6 per recursion level).

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Parameters for one terrain generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Grid resolution: the lattice has `(n + 1) x (n + 1)` vertices.
    /// Conventionally a power of two.
    pub n: usize,
    /// Minimum world-space X of the terrain rectangle.
    pub min_x: f32,
    /// Maximum world-space X of the terrain rectangle.
    pub max_x: f32,
    /// Minimum world-space Z of the terrain rectangle.
    pub min_y: f32,
    /// Maximum world-space Z of the terrain rectangle.
    pub max_y: f32,
    /// Elevation assigned to the four grid corners before recursion.
    pub base_height: f32,
    /// Initial amplitude of the per-point random displacement.
    pub roughness: f32,
    /// Multiplicative decay applied to `roughness` per recursion level.
    /// Smaller values produce smoother terrain.
    pub roughness_decay: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            n: 255,
            min_x: -1000.0,
            max_x: 1000.0,
            min_y: -1000.0,
            max_y: 1000.0,
            base_height: 300.0,
            roughness: 300.0,
            roughness_decay: 0.6,
        }
    }
}

impl TerrainParams {
    /// Vertices per grid side.
    pub fn map_size(&self) -> usize {
        self.n + 1
    }

    /// Total vertex count of the lattice.
    pub fn vertex_count(&self) -> usize {
        self.map_size() * self.map_size()
    }

    /// Check the parameters before generation. No partial output is ever
    /// produced from invalid parameters.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.n < 1 {
            return Err(TerrainError::InvalidGridSize { n: self.n });
        }
        let bounds = [self.min_x, self.max_x, self.min_y, self.max_y];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(TerrainError::NonFiniteBounds);
        }
        let scalars = [
            ("base_height", self.base_height),
            ("roughness", self.roughness),
            ("roughness_decay", self.roughness_decay),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(TerrainError::NonFiniteParameter(name));
            }
        }
        Ok(())
    }
}
