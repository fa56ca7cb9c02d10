//! Randomness source for masked and random values.
//!
//! Every random draw made during synthesis goes through [`SymbolSource`].
//! Any `rand` RNG is a source, so a seeded `StdRng` gives exact reproducibility
//! and `rand::rng()` gives fresh values on every run.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Supplier of the random symbols used by pattern expansion and UUIDs.
pub trait SymbolSource {
    /// A uniformly chosen decimal digit `0`-`9`.
    fn digit(&mut self) -> char;

    /// A uniformly chosen uppercase Latin letter `A`-`Z`.
    fn letter(&mut self) -> char;

    /// A uniformly chosen position in `0..len`. Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize;

    /// Sixteen random bytes.
    fn fill_bytes16(&mut self) -> [u8; 16];
}

impl<R: RngCore> SymbolSource for R {
    fn digit(&mut self) -> char {
        char::from(b'0' + self.random_range(0..10u8))
    }

    fn letter(&mut self) -> char {
        char::from(b'A' + self.random_range(0..26u8))
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.random_range(0..len)
    }

    fn fill_bytes16(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.fill_bytes(&mut bytes);
        bytes
    }
}

/// Create a seeded source.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
