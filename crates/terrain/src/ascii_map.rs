//! ASCII overview of a generated heightfield.
//!
//! One character per sampled block, chosen from the block's color band.
//! Built on demand from `&Heightfield`; the CLI prints this as its
//! visualization.

use crate::coloring::{classify, Band};
use crate::heightfield::Heightfield;

/// Character for a color band.
pub fn band_char(band: Band) -> char {
    match band {
        Band::Low => '.',
        Band::Mid => '+',
        Band::High => '^',
    }
}

/// Downsampled character map, at most `max_side` characters per side.
///
/// Each character covers a square block of vertices and shows the band of
/// the block's highest vertex, so ridgelines stay visible after
/// downsampling. Rows are newline-terminated.
pub fn overview(field: &Heightfield, max_side: usize) -> String {
    let map_size = field.map_size();
    let max_side = max_side.max(1);
    let step = map_size.div_ceil(max_side).max(1);

    let mut out = String::with_capacity((map_size / step + 2) * (map_size / step + 1));
    let mut row = 0;
    while row < map_size {
        let mut col = 0;
        while col < map_size {
            let mut peak = f32::NEG_INFINITY;
            for r in row..(row + step).min(map_size) {
                for c in col..(col + step).min(map_size) {
                    peak = peak.max(field.height(c, r));
                }
            }
            out.push(band_char(classify(peak)));
            col += step;
        }
        out.push('\n');
        row += step;
    }
    out
}
