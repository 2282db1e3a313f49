//! Random-number utilities shared by the samplers.
//!
//! [`UniformRandomGenerator`] is a small wrapper around `rand` that is bounded
//! to a closed range when it is built and yields one value per call.
//! [`draw_distinct`] builds a set of pairwise-distinct values on top of any
//! [`RangeGenerator`] by rejecting repeats.

use std::collections::HashSet;
use std::hash::Hash;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::prelude::*;

/// Stateful source of random values drawn from a fixed range.
pub trait RangeGenerator {
    /// Type of the produced values.
    type Value;

    /// Draw one value. Every call advances the internal state.
    fn next_value(&mut self) -> Self::Value;
}

/// Uniform random-number generator over the closed range `[min, max]`.
///
/// By default this uses an entropy-seeded RNG, but test code can construct
/// it from a fixed seed for reproducible behavior.
pub struct UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    rng: StdRng,
    dist: Uniform<T>,
    min: T,
    max: T,
}

impl<T> UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    /// Construct over `[min, max]` with an entropy seed.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn new(min: T, max: T) -> Self {
        Self::with_rng(StdRng::from_entropy(), min, max)
    }

    /// Construct over `[min, max]` from a fixed seed (useful for tests).
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn from_seed(seed: u64, min: T, max: T) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min, max)
    }

    fn with_rng(rng: StdRng, min: T, max: T) -> Self {
        Self {
            rng,
            dist: Uniform::new_inclusive(min, max),
            min,
            max,
        }
    }

    /// Lower bound of the range.
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> T {
        self.max
    }

    /// Draw a single random value.
    pub fn next(&mut self) -> T {
        self.rng.sample(&self.dist)
    }

    /// Draw `count` pairwise-distinct values.
    ///
    /// The caller must make sure `count` does not exceed the number of values
    /// in the range, otherwise this never returns.
    pub fn gen_unique(&mut self, count: usize) -> Vec<T>
    where
        T: Eq + Hash,
    {
        draw_distinct(self, count)
    }
}

impl UniformRandomGenerator<usize> {
    /// Number of distinct values the generator can produce.
    pub fn domain_size(&self) -> usize {
        self.max - self.min + 1
    }
}

impl<T> RangeGenerator for UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    type Value = T;

    fn next_value(&mut self) -> T {
        self.next()
    }
}

/// Collect `count` pairwise-distinct values from `generator`.
///
/// Values are returned in the order they were first drawn; repeats are
/// discarded and redrawn. Requires `count` to be no larger than the size of
/// the generator's domain, otherwise the loop never terminates.
pub fn draw_distinct<G>(generator: &mut G, count: usize) -> Vec<G::Value>
where
    G: RangeGenerator + ?Sized,
    G::Value: Copy + Eq + Hash,
{
    let mut drawn = Vec::with_capacity(count);
    let mut seen = HashSet::with_capacity(count);
    while drawn.len() < count {
        let candidate = generator.next_value();
        if !seen.contains(&candidate) {
            seen.insert(candidate);
            drawn.push(candidate);
        }
    }
    drawn
}

/// Derive the seed of one trial from a base seed and its iteration number.
///
/// SplitMix64 finaliser, so neighbouring iterations get unrelated streams.
pub(crate) fn trial_seed(base: u64, iteration: usize) -> u64 {
    let mut z = base.wrapping_add((iteration as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Replays a fixed script of values, cycling when exhausted.
    struct Scripted {
        values: Vec<u32>,
        pos: usize,
        calls: usize,
    }

    impl RangeGenerator for Scripted {
        type Value = u32;

        fn next_value(&mut self) -> u32 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            self.calls += 1;
            v
        }
    }

    #[test]
    fn unique_samples_within_bounds() {
        let mut rng = UniformRandomGenerator::<u32>::from_seed(1234, 0, 10);
        let buf = rng.gen_unique(5);

        assert_eq!(buf.len(), 5);
        assert!(buf.iter().all(|&v| v <= 10));
        for i in 0..buf.len() {
            for j in (i + 1)..buf.len() {
                assert_ne!(buf[i], buf[j]);
            }
        }
    }

    #[test]
    fn deterministic_with_same_seed() {
        let mut rng1 = UniformRandomGenerator::<u32>::from_seed(42, 0, 100);
        let mut rng2 = UniformRandomGenerator::<u32>::from_seed(42, 0, 100);

        let a1: Vec<u32> = (0..10).map(|_| rng1.next()).collect();
        let a2: Vec<u32> = (0..10).map(|_| rng2.next()).collect();

        assert_eq!(a1, a2);
    }

    #[test]
    fn draw_distinct_keeps_first_draw_order_and_skips_repeats() {
        let mut generator = Scripted {
            values: vec![3, 3, 1, 3, 1, 7],
            pos: 0,
            calls: 0,
        };
        let drawn = draw_distinct(&mut generator, 3);
        assert_eq!(drawn, vec![3, 1, 7]);
        assert_eq!(generator.calls, 6);
    }

    #[test]
    fn draw_distinct_zero_count_draws_nothing() {
        let mut generator = Scripted {
            values: vec![1],
            pos: 0,
            calls: 0,
        };
        assert!(draw_distinct(&mut generator, 0).is_empty());
        assert_eq!(generator.calls, 0);
    }

    #[test]
    fn full_domain_draw_is_a_permutation() {
        let mut rng = UniformRandomGenerator::<usize>::from_seed(7, 0, 9);
        assert_eq!(rng.domain_size(), 10);
        let mut drawn = rng.gen_unique(10);
        drawn.sort_unstable();
        assert_eq!(drawn, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn single_value_range() {
        let mut rng = UniformRandomGenerator::<usize>::from_seed(3, 4, 4);
        assert_eq!(rng.domain_size(), 1);
        assert_eq!(rng.gen_unique(1), vec![4]);
        assert_eq!(rng.next(), 4);
    }

    #[test]
    fn trial_seeds_differ_between_iterations() {
        let seeds: HashSet<u64> = (0..1000).map(|i| trial_seed(99, i)).collect();
        assert_eq!(seeds.len(), 1000);
        assert_eq!(trial_seed(99, 5), trial_seed(99, 5));
    }

    proptest! {
        #[test]
        fn drawn_values_are_distinct_and_in_range(
            seed in any::<u64>(),
            min in 0usize..50,
            width in 1usize..40,
            pick in 0usize..64,
        ) {
            let max = min + width - 1;
            let count = pick % (width + 1);
            let mut rng = UniformRandomGenerator::<usize>::from_seed(seed, min, max);
            let drawn = rng.gen_unique(count);

            prop_assert_eq!(drawn.len(), count);
            prop_assert!(drawn.iter().all(|&v| v >= min && v <= max));
            let unique: HashSet<usize> = drawn.iter().copied().collect();
            prop_assert_eq!(unique.len(), count);
        }
    }
}
