//! High-level API for the bundled estimators.
//!
//! These functions wire a concrete [`Estimator`](crate::core::Estimator) to
//! the [`Ransac`] engine and return the fitted model together with the
//! winning inliers.

use nalgebra::DMatrix;

use crate::core::{Ransac, RunSummary};
use crate::error::{RansacError, Result};
use crate::estimators::LineEstimator;
use crate::models::Line;
use crate::settings::RansacSettings;

/// Result of a RANSAC estimation.
#[derive(Debug, Clone)]
pub struct EstimationResult<M> {
    /// The estimated model, refit on the inliers.
    pub model: M,
    /// Indices of inlier points.
    pub inliers: Vec<usize>,
    /// Bookkeeping of the run that produced the inliers.
    pub summary: RunSummary,
}

/// Robustly fit a 2D line.
///
/// # Arguments
/// * `points` - 2D points (Nx2 matrix, each row is `[x, y]`)
/// * `threshold` - Maximum point-to-line distance of an inlier
/// * `settings_opt` - Optional RANSAC settings (uses defaults if None); the
///   minimal sample size is always two points
///
/// # Example
///
/// ```rust
/// use nalgebra::DMatrix;
/// use ransac_engine::api::estimate_line;
///
/// let mut points = DMatrix::<f64>::zeros(10, 2);
/// for i in 0..10 {
///     points[(i, 0)] = i as f64;
///     points[(i, 1)] = 3.0 * i as f64 + 1.0;
/// }
///
/// let result = estimate_line(&points, 0.01, None).unwrap();
/// assert_eq!(result.inliers.len(), 10);
/// ```
pub fn estimate_line(
    points: &DMatrix<f64>,
    threshold: f64,
    settings_opt: Option<RansacSettings>,
) -> Result<EstimationResult<Line>> {
    let mut settings = settings_opt.unwrap_or_default();
    settings.min_sample = LineEstimator::SAMPLE_SIZE;

    let mut estimator = LineEstimator::new(points.clone(), threshold)?;
    let mut ransac = Ransac::from_settings(settings)?;
    let summary = ransac.run(&mut estimator)?;

    let model = estimator.refit().ok_or(RansacError::NoConsensus)?;
    Ok(EstimationResult {
        model,
        inliers: estimator.best_inliers().to_vec(),
        summary,
    })
}
