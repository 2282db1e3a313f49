//! RANSAC configuration types.
//!
//! [`RansacSettings`] holds the run configuration that fixes the iteration
//! count of an engine; [`ExecutionSettings`] controls how the trials of a run
//! are scheduled and seeded and may change between runs.

use crate::error::{RansacError, Result};

/// How trial generators are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Every worker split draws from its own entropy-seeded generator.
    #[default]
    Entropy,
    /// Every trial draws from a generator seeded by this value and its
    /// iteration number. Runs are reproducible regardless of worker count.
    Fixed(u64),
}

/// Scheduling of the trials of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionSettings {
    /// Number of worker threads. `0` lets the pool use one worker per
    /// logical CPU, `1` runs the trials sequentially on the calling thread.
    pub workers: usize,
    /// Seeding of the per-trial random generators.
    pub seed: SeedPolicy,
}

impl ExecutionSettings {
    /// Sequential execution on the calling thread.
    pub fn sequential() -> Self {
        Self {
            workers: 1,
            ..Self::default()
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedPolicy::Fixed(seed);
        self
    }
}

/// Main configuration object for the RANSAC engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RansacSettings {
    /// Number of data points needed to build one model.
    pub min_sample: usize,
    /// Assumed fraction of inliers in the data, strictly inside (0, 1).
    pub inlier_rate: f64,
    /// Desired probability that at least one trial samples only inliers,
    /// strictly inside (0, 1).
    pub confidence: f64,
    /// Trial scheduling.
    pub execution: ExecutionSettings,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            min_sample: 2,
            inlier_rate: 0.5,
            confidence: 0.99,
            execution: ExecutionSettings::default(),
        }
    }
}

impl RansacSettings {
    pub fn new(min_sample: usize, inlier_rate: f64, confidence: f64) -> Self {
        Self {
            min_sample,
            inlier_rate,
            confidence,
            ..Self::default()
        }
    }

    pub fn with_execution(mut self, execution: ExecutionSettings) -> Self {
        self.execution = execution;
        self
    }

    /// Reject configurations for which the iteration bound is undefined.
    ///
    /// NaN fails the open-interval checks as well.
    pub fn validate(&self) -> Result<()> {
        if self.min_sample == 0 {
            return Err(RansacError::InvalidMinSample);
        }
        if !(self.inlier_rate > 0.0 && self.inlier_rate < 1.0) {
            return Err(RansacError::InvalidInlierRate(self.inlier_rate));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(RansacError::InvalidConfidence(self.confidence));
        }
        Ok(())
    }
}
