//! RNG module - seeded piece selection
//!
//! Each new piece kind is drawn uniformly from the seven shapes. A small LCG keeps
//! games reproducible from a seed (tests, benches, `--seed`).

use crate::piece::Piece;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Mix the seed so small consecutive seeds do not start on neighbouring states.
        Self {
            state: seed ^ 0x9E37_79B9,
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in [0, max). Uses the high bits, which have a longer period than the low ones.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }

    /// Value in [lo, hi] (inclusive)
    pub fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        lo + self.next_range((hi - lo + 1) as u32) as i32
    }
}

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    seed: u32,
    rng: SimpleRng,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[index]
    }

    /// A new piece at the spawn origin
    pub fn next_piece(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceGenerator::new(42);
        let mut b = PieceGenerator::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_every_kind_appears() {
        let mut generator = PieceGenerator::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[generator.next_kind().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "{seen:?}");
    }

    #[test]
    fn test_next_in_stays_in_range() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..1000 {
            let v = rng.next_in(-2, 4);
            assert!((-2..=4).contains(&v));
        }
    }
}
