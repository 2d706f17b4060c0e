//! Utility to generate synthetic route catalogs.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::edge::Edge;
use crate::location::LocationId;

/// Generates a synthetic catalog of priced connections.
///
/// Locations get synthetic three-letter codes (`AAA`, `AAB`, ...).
/// Each location is given up to `fanout` outgoing connections to
/// randomly drawn locations, priced between 20 and 500; draws that
/// land on the origin itself are dropped rather than redrawn, so the
/// catalog never contains self-loops. The same seed always yields the
/// same catalog, which keeps tests built on top of it reproducible.
///
/// # Arguments
/// * `location_count` - How many locations to name.
/// * `fanout` - Connection draws per location.
/// * `seed` - Seed for the random generator.
pub fn generate_catalog(location_count: usize, fanout: usize, seed: u64) -> Vec<Edge> {
    let mut rng = StdRng::seed_from_u64(seed);
    let codes: Vec<LocationId> = (0..location_count).map(code_for).collect();

    let mut edges = Vec::new();
    for origin in &codes {
        for _ in 0..fanout {
            let destination = &codes[rng.gen_range(0..codes.len())];
            if destination == origin {
                continue;
            }
            let price = rng.gen_range(20.0..500.0);
            edges.push(Edge::new(origin, destination, price));
        }
    }
    edges
}

/// Maps an index to a synthetic three-letter location code.
fn code_for(index: usize) -> LocationId {
    [
        (b'A' + (index / 676 % 26) as u8) as char,
        (b'A' + (index / 26 % 26) as u8) as char,
        (b'A' + (index % 26) as u8) as char,
    ]
    .iter()
    .collect()
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
