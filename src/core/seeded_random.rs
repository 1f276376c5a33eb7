//! SeededRandom: one linear congruential step per call
//!
//! There is no generator state. Callers derive independent draws by
//! offsetting the seed (`seed + 17`, `seed + i * 31`, ...) with u32
//! wraparound, and the same seed always yields the same value.

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_DIVISOR: f64 = 4_294_967_295.0;

/// Largest f64 strictly below 1.0
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct SeededRandom;

impl SeededRandom {
    /// Map a seed to a value in [0, 1)
    pub fn next(seed: u32) -> f64 {
        let state = seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
        // state == u32::MAX would land exactly on 1.0
        (f64::from(state) / LCG_DIVISOR).min(BELOW_ONE)
    }

    /// `next(seed)` after adding `offset` with wraparound
    pub fn next_offset(seed: u32, offset: u32) -> f64 {
        Self::next(seed.wrapping_add(offset))
    }

    /// floor(next(seed) * len), kept inside 0..len. `len` must be non-zero.
    pub fn index(seed: u32, len: usize) -> usize {
        let index = (Self::next(seed) * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert!((SeededRandom::next(0) - 0.236_067_972_899_430_43).abs() < 1e-15);
        assert!((SeededRandom::next(1) - 0.236_455_525_326_648_62).abs() < 1e-15);
    }

    #[test]
    fn test_distinct_seeds_differ() {
        assert_ne!(SeededRandom::next(0), SeededRandom::next(1));
    }

    #[test]
    fn test_repeatable() {
        for seed in [0, 7, 42, u32::MAX] {
            assert_eq!(SeededRandom::next(seed), SeededRandom::next(seed));
        }
    }

    #[test]
    fn test_range_over_sample() {
        for seed in (0..u32::MAX).step_by(9_973_331) {
            let value = SeededRandom::next(seed);
            assert!((0.0..1.0).contains(&value), "seed {} gave {}", seed, value);
        }
    }

    #[test]
    fn test_state_at_max_stays_below_one() {
        // seed * 1664525 + 1013904223 == u32::MAX (mod 2^32)
        let inverse = modular_inverse(LCG_MULTIPLIER);
        let seed = (u32::MAX.wrapping_sub(LCG_INCREMENT)).wrapping_mul(inverse);
        assert_eq!(seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT), u32::MAX);
        assert!(SeededRandom::next(seed) < 1.0);
        assert_eq!(SeededRandom::index(seed, 7), 6);
    }

    #[test]
    fn test_offset_wraps() {
        assert_eq!(SeededRandom::next_offset(u32::MAX, 17), SeededRandom::next(16));
    }

    fn modular_inverse(a: u32) -> u32 {
        // Newton iteration for odd a modulo 2^32
        let mut x = a;
        for _ in 0..5 {
            x = x.wrapping_mul(2u32.wrapping_sub(a.wrapping_mul(x)));
        }
        x
    }
}
