//! RNG module - uniform next-piece generation
//!
//! Every kind and every rotation is equally likely for each new piece; there
//! is no bag or history. A small LCG keeps rounds reproducible from a seed.

use crate::types::{PieceKind, Rotation};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`, taken from the high bits (the low bits of an LCG
    /// have short periods)
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }

    /// Next piece: uniform kind and uniform rotation
    pub fn next_piece(&mut self) -> (PieceKind, Rotation) {
        let kind = PieceKind::ALL[self.next_range(PieceKind::COUNT as u32) as usize];
        let rotation = Rotation::from_index(self.next_range(4) as usize);
        (kind, rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.next_piece(), rng2.next_piece());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_every_kind_and_rotation_appears() {
        let mut rng = SimpleRng::new(7);
        let mut kinds = [0u32; PieceKind::COUNT];
        let mut rotations = [0u32; 4];
        for _ in 0..3000 {
            let (kind, rotation) = rng.next_piece();
            kinds[kind.index()] += 1;
            rotations[rotation.index()] += 1;
        }
        // 200 expected per kind, 750 per rotation.
        assert!(kinds.iter().all(|&n| n > 100), "{:?}", kinds);
        assert!(rotations.iter().all(|&n| n > 500), "{:?}", rotations);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(0);
        for _ in 0..1000 {
            assert!(rng.next_range(15) < 15);
        }
    }
}
