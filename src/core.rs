//! Core RANSAC traits and orchestrator.
//!
//! - [`Estimator`] is the capability interface a consumer implements for its
//!   data and model types: dataset access, model construction, the inlier
//!   predicate and a sink for the winning inlier set.
//! - [`Sampler`] draws the minimal sample of a trial.
//! - [`Ransac`] derives a fixed iteration count from the assumed inlier rate
//!   and the desired success probability, runs that many independent trials
//!   as a fork-join batch and hands the best inlier set to the estimator.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, trace, warn};

use crate::error::{RansacError, Result};
use crate::samplers::UniformRandomSampler;
use crate::scoring::{collect_inliers, select_best, Score};
use crate::settings::{ExecutionSettings, RansacSettings, SeedPolicy};
use crate::types::{InlierSet, Sample};
use crate::utils::{trial_seed, UniformRandomGenerator};

/// Capability interface supplied by a concrete consumer.
///
/// Everything except [`accept_best`](Estimator::accept_best) is called from
/// several trials at once and must not have side effects. The dataset must
/// not change while a run is in progress.
pub trait Estimator: Sync {
    /// A single data point.
    type Datum: Send;
    /// Model type produced from a minimal sample.
    type Model;

    /// Number of addressable data points.
    fn data_len(&self) -> usize;

    /// Data point at `index`, with `index < data_len()`.
    fn datum(&self, index: usize) -> Self::Datum;

    /// Resolve the indices of a sample to their data points.
    fn sample_data(&self, sample: &[usize]) -> Vec<Self::Datum> {
        sample.iter().map(|&index| self.datum(index)).collect()
    }

    /// Build a model from the data points of a minimal sample.
    ///
    /// Returns `None` if the sample is degenerate; the trial then contributes
    /// an empty inlier set and the run carries on.
    fn estimate_model(&self, data: &[Self::Datum]) -> Option<Self::Model>;

    /// Whether `datum` is consistent with `model`.
    fn is_inlier(&self, datum: &Self::Datum, model: &Self::Model) -> bool;

    /// Receive the winning inlier set. Called exactly once per completed run.
    fn accept_best(&mut self, inliers: &[usize]);
}

/// Sampler responsible for drawing minimal samples from the data.
pub trait Sampler {
    /// Draw one sample of pairwise-distinct indices.
    fn sample(&mut self) -> Sample;
}

/// Largest iteration count whose per-iteration arena can be allocated.
fn max_iterations() -> usize {
    isize::MAX as usize / std::mem::size_of::<InlierSet>()
}

/// Number of trials needed so that, with probability `confidence`, at least
/// one minimal sample of size `min_sample` contains only inliers when a
/// fraction `inlier_rate` of the data are inliers.
///
/// `ceil(ln(1 - confidence) / ln(1 - inlier_rate^min_sample))`, never less
/// than one. Fails with [`RansacError::IterationOverflow`] when the count is
/// not finite or too large for one inlier-set slot per iteration.
pub fn required_iterations(min_sample: usize, inlier_rate: f64, confidence: f64) -> Result<usize> {
    RansacSettings::new(min_sample, inlier_rate, confidence).validate()?;

    // ln_1p keeps both logarithms accurate when their argument is close to 0.
    let p_good_sample = inlier_rate.powf(min_sample as f64);
    let log_one_minus_conf = (-confidence).ln_1p();
    let log_one_minus_p = (-p_good_sample).ln_1p();

    let required = (log_one_minus_conf / log_one_minus_p).ceil();
    if !required.is_finite() || required >= max_iterations() as f64 {
        return Err(RansacError::IterationOverflow {
            inlier_rate,
            min_sample,
        });
    }
    Ok((required as usize).max(1))
}

/// Lifecycle of a [`Ransac`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Constructed, no run finished yet.
    Configured,
    /// Trials are executing. Only observable after a run unwound part way,
    /// since [`Ransac::run`] holds the engine exclusively until it returns.
    Running,
    /// The last run delivered its winner.
    Completed,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Iteration number of the winning trial.
    pub best_iteration: usize,
    /// Size of the delivered inlier set.
    pub inlier_count: usize,
    /// Number of trials executed.
    pub iterations: usize,
    /// Trials whose sample could not produce a model.
    pub degenerate_trials: usize,
}

/// Fixed-iteration RANSAC orchestrator.
///
/// The iteration count is derived once on construction. Each call to
/// [`run`](Self::run) is an independent run over the estimator's current data.
#[derive(Debug, Clone)]
pub struct Ransac {
    settings: RansacSettings,
    iterations: usize,
    state: RunState,
}

impl Ransac {
    /// Create an engine with default execution settings.
    pub fn new(min_sample: usize, inlier_rate: f64, confidence: f64) -> Result<Self> {
        Self::from_settings(RansacSettings::new(min_sample, inlier_rate, confidence))
    }

    /// Create an engine from a full settings object.
    pub fn from_settings(settings: RansacSettings) -> Result<Self> {
        let iterations =
            required_iterations(settings.min_sample, settings.inlier_rate, settings.confidence)?;
        debug!(
            min_sample = settings.min_sample,
            inlier_rate = settings.inlier_rate,
            confidence = settings.confidence,
            iterations,
            "configured RANSAC"
        );
        Ok(Self {
            settings,
            iterations,
            state: RunState::Configured,
        })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn min_sample(&self) -> usize {
        self.settings.min_sample
    }

    pub fn settings(&self) -> &RansacSettings {
        &self.settings
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Replace the execution settings used by subsequent runs.
    pub fn set_execution(&mut self, execution: ExecutionSettings) {
        self.settings.execution = execution;
    }

    /// Run all trials, pick the winner and deliver it to
    /// [`Estimator::accept_best`].
    ///
    /// Fails before any trial runs if the dataset is smaller than the minimal
    /// sample or the worker pool cannot be built; `accept_best` is not called
    /// in that case.
    pub fn run<E: Estimator>(&mut self, estimator: &mut E) -> Result<RunSummary> {
        let previous = self.state;
        self.state = RunState::Running;

        let (mut arena, degenerate_trials) = match self.execute(&*estimator) {
            Ok(batch) => batch,
            Err(err) => {
                self.state = previous;
                return Err(err);
            }
        };

        let best = select_best(&arena).unwrap_or(Score::new(0, 0));
        let inliers = arena
            .get_mut(best.iteration)
            .map(std::mem::take)
            .unwrap_or_default();

        if inliers.is_empty() {
            warn!(
                iterations = self.iterations,
                degenerate_trials, "no trial found any inliers"
            );
        }
        estimator.accept_best(&inliers);

        let summary = RunSummary {
            best_iteration: best.iteration,
            inlier_count: inliers.len(),
            iterations: self.iterations,
            degenerate_trials,
        };
        debug!(?summary, "RANSAC run completed");
        self.state = RunState::Completed;
        Ok(summary)
    }

    /// Run all trials and return the per-iteration inlier sets, indexed by
    /// iteration number, without selecting or delivering a winner.
    pub fn run_trials<E: Estimator>(&self, estimator: &E) -> Result<Vec<InlierSet>> {
        self.execute(estimator).map(|(arena, _)| arena)
    }

    fn execute<E: Estimator>(&self, estimator: &E) -> Result<(Vec<InlierSet>, usize)> {
        let data_len = estimator.data_len();
        let min_sample = self.settings.min_sample;
        UniformRandomSampler::check_domain(data_len, min_sample)?;

        let execution = self.settings.execution;
        debug!(
            iterations = self.iterations,
            data_len,
            workers = execution.workers,
            "starting RANSAC trials"
        );

        let degenerate = AtomicUsize::new(0);
        let batch = Batch {
            estimator,
            data_len,
            min_sample,
            iterations: self.iterations,
            seed: execution.seed,
            degenerate: &degenerate,
        };

        let arena = match execution.workers {
            0 => batch.run_parallel(),
            1 => batch.run_sequential(),
            workers => {
                let pool = ThreadPoolBuilder::new().num_threads(workers).build()?;
                pool.install(|| batch.run_parallel())
            }
        };

        Ok((arena, degenerate.into_inner()))
    }
}

/// Everything a single run needs, shared read-only by all trials.
struct Batch<'a, E> {
    estimator: &'a E,
    data_len: usize,
    min_sample: usize,
    iterations: usize,
    seed: SeedPolicy,
    degenerate: &'a AtomicUsize,
}

impl<E: Estimator> Batch<'_, E> {
    fn entropy_sampler(&self) -> UniformRandomSampler {
        UniformRandomSampler::from_generator(
            UniformRandomGenerator::new(0, self.data_len - 1),
            self.min_sample,
        )
    }

    fn seeded_sampler(&self, base: u64, iteration: usize) -> UniformRandomSampler {
        UniformRandomSampler::from_generator(
            UniformRandomGenerator::from_seed(trial_seed(base, iteration), 0, self.data_len - 1),
            self.min_sample,
        )
    }

    fn run_sequential(&self) -> Vec<InlierSet> {
        match self.seed {
            SeedPolicy::Fixed(base) => (0..self.iterations)
                .map(|iteration| self.trial(&mut self.seeded_sampler(base, iteration), iteration))
                .collect(),
            SeedPolicy::Entropy => {
                let mut sampler = self.entropy_sampler();
                (0..self.iterations)
                    .map(|iteration| self.trial(&mut sampler, iteration))
                    .collect()
            }
        }
    }

    fn run_parallel(&self) -> Vec<InlierSet> {
        // Indexed collect keeps slot `i` for iteration `i` whatever the
        // completion order.
        match self.seed {
            SeedPolicy::Fixed(base) => (0..self.iterations)
                .into_par_iter()
                .map(|iteration| self.trial(&mut self.seeded_sampler(base, iteration), iteration))
                .collect(),
            SeedPolicy::Entropy => (0..self.iterations)
                .into_par_iter()
                .map_init(
                    || self.entropy_sampler(),
                    |sampler, iteration| self.trial(sampler, iteration),
                )
                .collect(),
        }
    }

    fn trial<S: Sampler>(&self, sampler: &mut S, iteration: usize) -> InlierSet {
        let sample = sampler.sample();
        let data = self.estimator.sample_data(&sample);
        match self.estimator.estimate_model(&data) {
            Some(model) => collect_inliers(self.estimator, &model),
            None => {
                self.degenerate.fetch_add(1, Ordering::Relaxed);
                trace!(iteration, ?sample, "degenerate sample");
                Vec::new()
            }
        }
    }
}
