//! fractalfield CLI: generate one terrain from a seed and print a summary.
//!
//! Usage: `fractalfield [seed] [n]`
//!   seed — u64 RNG seed (default 42)
//!   n    — grid resolution, lattice is (n+1) x (n+1) (default 255)

use log::info;

use terrain::{ascii_map, displacement, mesh, Heightfield, TerrainParams, TerrainRng, TerrainStats};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let n: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(255);

    let params = TerrainParams {
        n,
        ..Default::default()
    };
    if let Err(e) = params.validate() {
        eprintln!("invalid parameters: {e}");
        std::process::exit(1);
    }

    let mut rng = TerrainRng::from_seed_u64(seed);
    let mut field = match Heightfield::new(
        params.n,
        params.min_x,
        params.max_x,
        params.min_y,
        params.max_y,
    ) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("failed to allocate heightfield: {e}");
            std::process::exit(1);
        }
    };
    displacement::displace(&mut field, &params, &mut rng.0);

    let buffers = mesh::build_mesh(&field);
    info!(
        "mesh buffers: {} position floats, {} indices",
        buffers.positions.len(),
        buffers.indices.len()
    );

    println!("seed {seed}, grid {}x{}", params.map_size(), params.map_size());
    println!("{}", TerrainStats::from_field(&field));
    println!();
    print!("{}", ascii_map::overview(&field, 64));
}
