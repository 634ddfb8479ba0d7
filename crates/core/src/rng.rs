//! RNG module - small deterministic generator
//!
//! Spawning and the autopilot fallback both need "a uniformly chosen cell". Games
//! are reproducible from a single seed, so the generator is a plain LCG instead of
//! a thread-local source.

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
    ///
    /// Uses the high bits; the low bits of an LCG with a power-of-two modulus
    /// cycle with a very short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Pick one element uniformly, `None` for an empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i).copied()
    }

    /// Pick two distinct elements uniformly, `None` if fewer than two exist.
    pub fn choose_pair<T: Copy>(&mut self, items: &[T]) -> Option<(T, T)> {
        let n = items.len();
        if n < 2 {
            return None;
        }
        let a = self.next_range(n as u32) as usize;
        // Draw from the remaining n-1 slots and skip over `a`.
        let mut b = self.next_range((n - 1) as u32) as usize;
        if b >= a {
            b += 1;
        }
        Some((items[a], items[b]))
    }

    /// Current generator state; `SimpleRng::new(state)` resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
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
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_choose_covers_all_items() {
        let mut rng = SimpleRng::new(99);
        let items = [10, 20, 30, 40];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = rng.choose(&items).unwrap();
            seen[items.iter().position(|&x| x == v).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.choose::<u8>(&[]), None);
    }

    #[test]
    fn test_choose_pair_is_distinct() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..200 {
            let (a, b) = rng.choose_pair(&[1, 2, 3]).unwrap();
            assert_ne!(a, b);
        }
        assert_eq!(rng.choose_pair(&[1]), None);
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }
}
