//! RNG module - kid-friendly piece sequencing
//!
//! Pieces are drawn uniformly, with repeats, from a fixed 7-entry list that
//! doubles up on O and I, keeps L, J and T, and leaves S and Z out entirely.
//! This is a weighting toward easy shapes, not a 7-bag permutation.
//!
//! Also provides a simple LCG so sessions are reproducible from a seed.

use crate::types::PieceKind;

/// The biased draw list. O and I appear twice; S and Z never.
pub const KID_FRIENDLY_BAG: [PieceKind; 7] = [
    PieceKind::O,
    PieceKind::I,
    PieceKind::T,
    PieceKind::O,
    PieceKind::I,
    PieceKind::L,
    PieceKind::J,
];

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits (multiply-shift), the low bits of an LCG cycle
    /// with a tiny period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Produces piece kinds from [`KID_FRIENDLY_BAG`].
#[derive(Debug, Clone)]
pub struct PieceBag {
    rng: SimpleRng,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind. Every entry of the list is equally likely.
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(KID_FRIENDLY_BAG.len() as u32) as usize;
        KID_FRIENDLY_BAG[idx]
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
