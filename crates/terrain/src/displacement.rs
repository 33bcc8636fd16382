//! Diamond-square midpoint displacement.
//!
//! Seeds the four grid corners to the base height, then recursively refines
//! the interior: the square step averages the four diagonal corners of each
//! cell center, the diamond step averages the four cardinal neighbors of
//! each edge midpoint, and both add `U(0,1) * randomness` before the
//! amplitude decays for the next level.
//!
//! Out-of-range neighbor lookups wrap toroidally (see
//! [`Heightfield::wrapped_height`]). Height writes only land on indices
//! within `[0, n-1]` on both axes, so the seeded corners and the last
//! row/column are never overwritten.

use log::debug;
use rand::Rng;

use crate::config::TerrainParams;
use crate::heightfield::Heightfield;

/// Populate `field` with fractal heights. Identical `params` and RNG state
/// produce bit-identical heightfields.
pub fn displace(field: &mut Heightfield, params: &TerrainParams, rng: &mut impl Rng) {
    let n = field.n();
    field.set_height(0, 0, params.base_height);
    field.set_height(n, 0, params.base_height);
    field.set_height(0, n, params.base_height);
    field.set_height(n, n, params.base_height);

    divide(
        field,
        field.map_size(),
        params.roughness,
        params.roughness_decay,
        rng,
    );
}

/// One recursion level: square step at spacing `size`, diamond step at
/// spacing `size / 2`, then recurse with halved spacing and decayed
/// randomness. Stops once the half-spacing reaches zero.
fn divide(
    field: &mut Heightfield,
    size: usize,
    randomness: f32,
    decay: f32,
    rng: &mut impl Rng,
) {
    let half = size / 2;
    if half < 1 {
        return;
    }
    debug!("diamond-square level: size={size} randomness={randomness}");

    let map_size = field.map_size();
    let limit = field.n();
    let h = half as isize;

    // Square step: cell centers at (half + k*size, half + m*size).
    let mut row = half;
    while row < map_size {
        let mut col = half;
        while col < map_size {
            let (c, r) = (col as isize, row as isize);
            let avg = (field.wrapped_height(c - h, r - h)
                + field.wrapped_height(c + h, r - h)
                + field.wrapped_height(c + h, r + h)
                + field.wrapped_height(c - h, r + h))
                / 4.0;
            if col < limit && row < limit {
                field.set_height(col, row, avg + rng.gen::<f32>() * randomness);
            }
            col += size;
        }
        row += size;
    }

    // Diamond step: edge midpoints, staggered per row by (row + half) % size.
    let mut row = 0;
    while row < map_size {
        let mut col = (row + half) % size;
        while col < map_size {
            let (c, r) = (col as isize, row as isize);
            let avg = (field.wrapped_height(c, r - h)
                + field.wrapped_height(c + h, r)
                + field.wrapped_height(c - h, r)
                + field.wrapped_height(c, r + h))
                / 4.0;
            if col < limit && row < limit {
                field.set_height(col, row, avg + rng.gen::<f32>() * randomness);
            }
            col += size;
        }
        row += half;
    }

    divide(field, size / 2, randomness * decay, decay, rng);
}
