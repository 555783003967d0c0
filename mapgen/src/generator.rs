//! Generator strategies: the `generate(seed) -> MapData` capability.
//!
//! Generators are statically linked and looked up through [`generator_by_name`];
//! an unknown name is an immediate [`GenerateError::UnknownGenerator`], never a
//! retry. Generation is deterministic: the seed string is hashed to a `u64`
//! and drives a seeded PRNG, so equal seeds yield equal maps.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::map::{MapData, Point, Segment};

/// Errors from generator lookup or generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested generator backend is not registered.
    #[error("unknown generator: {name}")]
    UnknownGenerator { name: String },
}

/// A map-generation strategy.
///
/// Implementations must return a complete (possibly empty) map or an error;
/// a partially built map is never observable. Equal seeds must produce equal
/// maps.
pub trait MapGenerator: std::fmt::Debug {
    /// Produce the road network for `seed`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; [`RandomSprawl`] cannot fail.
    fn generate(&self, seed: &str) -> Result<MapData, GenerateError>;

    /// Registry name for this strategy.
    fn name(&self) -> &'static str;
}

// Distribution parameters for the placeholder generator.
const SEGMENT_COUNT_MIN: usize = 50;
const SEGMENT_COUNT_MAX: usize = 150;
const COORD_MIN: f64 = -500.0;
const COORD_MAX: f64 = 500.0;
const END_DELTA_MIN: f64 = -50.0;
const END_DELTA_MAX: f64 = 50.0;
const WIDTH_MIN: f64 = 1.0;
const WIDTH_MAX: f64 = 6.0;
const HIGHWAY_PROBABILITY: f64 = 0.1;

/// The placeholder strategy: disconnected random segments, not a street
/// layout. Segments may overlap, be disjoint, or be zero-length; no spatial
/// relationship between them is enforced.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSprawl;

impl RandomSprawl {
    fn segment<R: Rng>(rng: &mut R) -> Segment {
        let start = Point::new(
            rng.random_range(COORD_MIN..COORD_MAX),
            rng.random_range(COORD_MIN..COORD_MAX),
        );
        let end = Point::new(
            start.x + rng.random_range(END_DELTA_MIN..END_DELTA_MAX),
            start.y + rng.random_range(END_DELTA_MIN..END_DELTA_MAX),
        );
        Segment {
            start,
            end,
            width: rng.random_range(WIDTH_MIN..WIDTH_MAX),
            highway: rng.random_bool(HIGHWAY_PROBABILITY),
        }
    }
}

impl MapGenerator for RandomSprawl {
    fn generate(&self, seed: &str) -> Result<MapData, GenerateError> {
        let mut rng = StdRng::seed_from_u64(hash_seed(seed));
        let count = rng.random_range(SEGMENT_COUNT_MIN..SEGMENT_COUNT_MAX);
        let segments = (0..count).map(|_| Self::segment(&mut rng)).collect();
        Ok(MapData::new(segments))
    }

    fn name(&self) -> &'static str {
        "sprawl"
    }
}

/// Look up a generator by registry name.
///
/// # Errors
///
/// Returns [`GenerateError::UnknownGenerator`] for names with no registered
/// strategy.
pub fn generator_by_name(name: &str) -> Result<&'static dyn MapGenerator, GenerateError> {
    match name {
        "sprawl" => Ok(&RandomSprawl),
        _ => Err(GenerateError::UnknownGenerator { name: name.to_owned() }),
    }
}

fn hash_seed(seed: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    hasher.finish()
}
