//! Fractal terrain synthesis.
//!
//! A one-shot batch pipeline that turns a seed and a handful of parameters
//! into the four flat buffers a renderer uploads to the GPU:
//!
//! 1. [`heightfield`] — allocate the `(n+1) x (n+1)` lattice over the
//!    bounding rectangle.
//! 2. [`displacement`] — diamond-square midpoint displacement with decaying
//!    randomness.
//! 3. [`mesh`] — triangulate, accumulate smooth vertex normals, classify
//!    per-vertex colors, flatten everything into [`TerrainMesh`].
//!
//! Everything is deterministic for a given seed: generation takes any
//! `rand::Rng`, and [`TerrainRng`] provides the ChaCha8-backed default.
//! All scratch state is owned by the single call; repeated generations
//! never contaminate each other.

pub mod ascii_map;
pub mod coloring;
pub mod config;
pub mod displacement;
pub mod error;
pub mod heightfield;
pub mod mesh;
pub mod rng;
pub mod stats;


pub use config::TerrainParams;
pub use error::TerrainError;
pub use heightfield::Heightfield;
pub use mesh::TerrainMesh;
pub use rng::TerrainRng;
pub use stats::TerrainStats;

use log::info;
use rand::Rng;

/// Run the full pipeline: validate, allocate, displace, assemble.
///
/// Returns the renderer-ready buffers, or an error before any generation
/// work if the parameters are invalid.
pub fn generate(params: &TerrainParams, rng: &mut impl Rng) -> Result<TerrainMesh, TerrainError> {
    params.validate()?;
    let mut field = Heightfield::new(
        params.n,
        params.min_x,
        params.max_x,
        params.min_y,
        params.max_y,
    )?;
    displacement::displace(&mut field, params, rng);
    let out = mesh::build_mesh(&field);
    info!(
        "generated terrain: {} vertices, {} triangles",
        out.vertex_count(),
        out.triangle_count
    );
    Ok(out)
}
