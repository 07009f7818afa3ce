use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::maze::Direction;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Source of the per-cell direction order used while carving.
///
/// Any [`Rng`] is a shuffle source and yields a uniform permutation of the four
/// directions. Tests can plug in a fixed order to pin down a layout.
pub trait ShuffleSource {
    fn shuffle_directions(&mut self, directions: &mut [Direction; 4]);
}

impl<R: Rng + ?Sized> ShuffleSource for R {
    fn shuffle_directions(&mut self, directions: &mut [Direction; 4]) {
        directions.shuffle(self);
    }
}
