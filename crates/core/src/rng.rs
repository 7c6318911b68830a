//! RNG module - deterministic random source
//!
//! The shop draws customers from a [`RandomSource`]. Production code seeds a
//! [`SimpleRng`] from the wall clock; tests seed it with a constant so a whole
//! day of customers is reproducible.

use crate::ports::RandomSource;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Current internal state (for resuming the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn uniform(&mut self) -> f64 {
        // Top 24 bits; the low bits of an LCG are weak.
        f64::from(self.next_u32() >> 8) / f64::from(1u32 << 24)
    }

    fn int_below(&mut self, n: usize) -> usize {
        let max = u32::try_from(n).unwrap_or(u32::MAX);
        self.next_range(max) as usize
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_uniform_stays_in_unit_interval() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..10_000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u), "uniform out of range: {u}");
        }
    }

    #[test]
    fn test_int_below_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1_000 {
            assert!(rng.int_below(5) < 5);
        }
        assert_eq!(rng.int_below(0), 0);
        assert_eq!(rng.int_below(1), 0);
    }
}
