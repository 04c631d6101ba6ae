//! Seeded pseudo-random values for puzzle generation
//!
//! The generator needs a pure function of a numeric seed: same seed, same
//! value, on every platform. A splitmix64 finalizer gives well-mixed bits
//! from consecutive seeds, which matters because the generator derives its
//! seeds as small offsets from a date number.

/// Mix a seed into a uniformly distributed 64-bit value
///
/// The splitmix64 finalizer: one additive constant, two xor-shift-multiply
/// rounds, one final xor-shift.
const fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic value in `[0, 1)` for a seed
///
/// Uses the top 53 bits of the mixed seed so the full f64 mantissa carries
/// entropy.
#[must_use]
pub fn unit_value(seed: u64) -> f64 {
    (splitmix64(seed) >> 11) as f64 / (1u64 << 53) as f64
}

/// Deterministic index into a collection of `len` elements
///
/// `len` must be greater than zero.
#[must_use]
pub(crate) fn pick_index(seed: u64, len: usize) -> usize {
    debug_assert!(len > 0);
    (unit_value(seed) * len as f64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_value_is_deterministic() {
        for seed in [0u64, 1, 20_260_828, u64::MAX] {
            assert_eq!(unit_value(seed).to_bits(), unit_value(seed).to_bits());
        }
    }

    #[test]
    fn unit_value_in_half_open_range() {
        for seed in 0..10_000u64 {
            let v = unit_value(seed);
            assert!((0.0..1.0).contains(&v), "seed {seed} gave {v}");
        }
    }

    #[test]
    fn consecutive_seeds_decorrelate() {
        // Small seed deltas (dates differ by 1) must still produce distinct
        // values.
        let mut values = std::collections::HashSet::new();
        for seed in 20_260_801..20_260_829u64 {
            assert!(values.insert(unit_value(seed).to_bits()), "seed {seed}");
        }
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        for seed in 0..1_000u64 {
            for len in [1usize, 2, 9, 37] {
                assert!(pick_index(seed, len) < len);
            }
        }
    }

    #[test]
    fn pick_index_covers_all_positions() {
        let mut seen = [false; 9];
        for seed in 0..200u64 {
            seen[pick_index(seed, 9)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
