//! Uniform random sampler drawing minimal samples without replacement.

use crate::core::Sampler;
use crate::error::{RansacError, Result};
use crate::types::Sample;
use crate::utils::{draw_distinct, UniformRandomGenerator};

/// Uniform random sampler over the indices `[0, data_len)`.
///
/// The sample size is checked against the dataset size on construction, so
/// [`Sampler::sample`] always terminates.
pub struct UniformRandomSampler {
    rng: UniformRandomGenerator<usize>,
    sample_size: usize,
}

impl UniformRandomSampler {
    /// Construct a new sampler with an entropy seed.
    pub fn new(data_len: usize, sample_size: usize) -> Result<Self> {
        Self::check_domain(data_len, sample_size)?;
        Ok(Self {
            rng: UniformRandomGenerator::new(0, data_len - 1),
            sample_size,
        })
    }

    /// Construct a sampler from a fixed seed.
    pub fn from_seed(seed: u64, data_len: usize, sample_size: usize) -> Result<Self> {
        Self::check_domain(data_len, sample_size)?;
        Ok(Self {
            rng: UniformRandomGenerator::from_seed(seed, 0, data_len - 1),
            sample_size,
        })
    }

    /// Wrap an already bounded generator. The caller guarantees that
    /// `sample_size` does not exceed the generator's domain.
    pub(crate) fn from_generator(rng: UniformRandomGenerator<usize>, sample_size: usize) -> Self {
        debug_assert!(sample_size <= rng.domain_size());
        Self { rng, sample_size }
    }

    pub(crate) fn check_domain(data_len: usize, sample_size: usize) -> Result<()> {
        if data_len == 0 || sample_size > data_len {
            return Err(RansacError::InsufficientData {
                required: sample_size.max(1),
                available: data_len,
            });
        }
        Ok(())
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}

impl Sampler for UniformRandomSampler {
    /// Indices come back in draw order.
    fn sample(&mut self) -> Sample {
        draw_distinct(&mut self.rng, self.sample_size)
    }
}
