//! Post-generation summary statistics.
//!
//! Built on demand from a displaced heightfield; the CLI logs these after
//! generation and tests use them as a cheap consistency check.

use std::fmt;

use serde::Serialize;

use crate::coloring::{classify, Band};
use crate::heightfield::Heightfield;

/// Summary of one generated terrain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerrainStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub min_height: f32,
    pub max_height: f32,
    pub mean_height: f32,
    /// Vertices per color band: low, mid, high.
    pub low_count: usize,
    pub mid_count: usize,
    pub high_count: usize,
}

impl TerrainStats {
    /// Summarize a displaced heightfield.
    pub fn from_field(field: &Heightfield) -> Self {
        let heights = field.heights();
        let mut min_height = f32::INFINITY;
        let mut max_height = f32::NEG_INFINITY;
        let mut sum = 0.0_f64;
        let (mut low_count, mut mid_count, mut high_count) = (0, 0, 0);

        for &h in heights {
            min_height = min_height.min(h);
            max_height = max_height.max(h);
            sum += f64::from(h);
            match classify(h) {
                Band::Low => low_count += 1,
                Band::Mid => mid_count += 1,
                Band::High => high_count += 1,
            }
        }

        let n = field.n();
        Self {
            vertex_count: heights.len(),
            triangle_count: 2 * n * n,
            min_height,
            max_height,
            mean_height: (sum / heights.len() as f64) as f32,
            low_count,
            mid_count,
            high_count,
        }
    }
}

impl fmt::Display for TerrainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "terrain: {} vertices, {} triangles",
            self.vertex_count, self.triangle_count
        )?;
        writeln!(
            f,
            "heights: min {:.1}, mean {:.1}, max {:.1}",
            self.min_height, self.mean_height, self.max_height
        )?;
        write!(
            f,
            "bands: {} low, {} mid, {} high",
            self.low_count, self.mid_count, self.high_count
        )
    }
}
