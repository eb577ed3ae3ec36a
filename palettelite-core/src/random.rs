//! Randomness source used by the palette generator.
//!
//! Every `rand::Rng` is a [`RandomSource`]. Tests can use [`SequenceSource`]
//! to script exact draws.

use rand::Rng;
use std::collections::VecDeque;

/// Uniform integer sampling over an inclusive range.
pub trait RandomSource {
    /// Draw an integer uniformly from `min..=max`.
    fn int_inclusive(&mut self, min: i32, max: i32) -> i32;
}

impl<R: Rng> RandomSource for R {
    fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// Replays scripted draws in order.
///
/// Each value is clamped into the requested range. Once the script runs
/// out, draws return the range minimum.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    values: VecDeque<i32>,
    draws: usize,
}

impl SequenceSource {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for SequenceSource {
    fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.draws += 1;
        self.values
            .pop_front()
            .map(|v| v.clamp(min, max.max(min)))
            .unwrap_or(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn rng_draws_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.int_inclusive(-10, 10);
            assert!((-10..=10).contains(&v));
        }
    }

    #[test]
    fn rng_degenerate_range_returns_min() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(rng.int_inclusive(5, 5), 5);
    }

    #[test]
    fn sequence_replays_and_clamps() {
        let mut src = SequenceSource::new([3, 100, -100]);
        assert_eq!(src.int_inclusive(0, 10), 3);
        assert_eq!(src.int_inclusive(0, 10), 10);
        assert_eq!(src.int_inclusive(0, 10), 0);
        assert_eq!(src.int_inclusive(4, 10), 4);
        assert_eq!(src.draws(), 4);
        assert_eq!(src.remaining(), 0);
    }
}
