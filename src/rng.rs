//! The two randomness seams of the engine.
//!
//! Rule generation uses a seeded stream ([`seeded_stream`]) so identical
//! seeds reproduce identical rules across runs and platforms. Per-attempt
//! layout (which hue is neutral, where the live hues sit, stage fillers)
//! comes from an [`AttemptRng`], kept behind a trait so tests can drive
//! the engine with a scripted source while a host plugs in
//! `rand::thread_rng()`.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::color::SquareColor;
use crate::grid::Cell;

/// Deterministic stream for rule generation.
///
/// ChaCha is stable across platforms, unlike `StdRng`, whose algorithm
/// is allowed to change between rand releases.
pub fn seeded_stream(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Unseeded randomness consumed by the engine during an attempt.
pub trait AttemptRng {
    /// Shuffle a slice of cells in place.
    fn shuffle_cells(&mut self, cells: &mut [Cell]);

    /// Shuffle a slice of colors in place.
    fn shuffle_colors(&mut self, colors: &mut [SquareColor]);

    /// Uniform draw from `lo..hi` (exclusive upper bound).
    fn pick(&mut self, lo: usize, hi: usize) -> usize;
}

impl<R: Rng> AttemptRng for R {
    fn shuffle_cells(&mut self, cells: &mut [Cell]) {
        cells.shuffle(self);
    }

    fn shuffle_colors(&mut self, colors: &mut [SquareColor]) {
        colors.shuffle(self);
    }

    fn pick(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..hi)
    }
}
