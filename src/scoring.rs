//! Scoring primitives for the RANSAC engine.
//!
//! A candidate model is scored by the number of data points the consumer's
//! inlier predicate accepts. After all trials finish, [`select_best`] picks
//! the winner out of the per-iteration inlier sets.

use crate::core::Estimator;
use crate::types::InlierSet;

/// Score of one trial: its inlier count and the iteration that produced it.
///
/// A later trial only displaces the current best with strictly more inliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub inlier_count: usize,
    pub iteration: usize,
}

impl Score {
    pub fn new(inlier_count: usize, iteration: usize) -> Self {
        Self {
            inlier_count,
            iteration,
        }
    }

    /// Whether `self` replaces `best` as the current winner.
    pub fn beats(&self, best: &Score) -> bool {
        self.inlier_count > best.inlier_count
    }
}

/// Test every data point against `model` and return the accepted indices in
/// ascending order.
pub fn collect_inliers<E>(estimator: &E, model: &E::Model) -> InlierSet
where
    E: Estimator + ?Sized,
{
    (0..estimator.data_len())
        .filter(|&index| estimator.is_inlier(&estimator.datum(index), model))
        .collect()
}

/// Index of the winning inlier set in a per-iteration arena.
///
/// Sets are scanned in iteration order and a set only replaces the current
/// best when it is strictly larger, so the earliest iteration wins ties.
/// Returns `None` for an empty arena.
pub fn select_best(arena: &[InlierSet]) -> Option<Score> {
    let mut sets = arena.iter().enumerate();
    let (_, first) = sets.next()?;
    let mut best = Score::new(first.len(), 0);
    for (iteration, inliers) in sets {
        let candidate = Score::new(inliers.len(), iteration);
        if candidate.beats(&best) {
            best = candidate;
        }
    }
    Some(best)
}
