//! Seeded RNG wrapper for reproducible draws.
//!
//! The draw operations on [`Bag`](crate::Bag) accept any `rand::Rng`, so
//! callers that don't care about reproducibility can pass a thread-local
//! RNG. `DrawRng` is the crate's scoped source for everyone else: seed it
//! once and every draw sequence is replayable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A deterministic draw source backed by `SmallRng`.
///
/// Two `DrawRng`s built from the same seed produce identical draw
/// sequences; `from_entropy` gives a non-reproducible source for callers
/// that don't need replay.
pub struct DrawRng(SmallRng);

impl DrawRng {
    pub fn new(seed: u64) -> Self {
        DrawRng(SmallRng::seed_from_u64(seed))
    }

    /// OS-entropy-seeded source for non-reproducible draws.
    pub fn from_entropy() -> Self {
        DrawRng(SmallRng::from_entropy())
    }

    /// Derive a child `DrawRng` for an independent draw stream (e.g. one
    /// per prize tier), deterministically from this source and `offset`.
    pub fn child(&mut self, offset: u64) -> DrawRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        DrawRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for passing to the `Bag` draw methods
    /// and `rand` distribution APIs.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
