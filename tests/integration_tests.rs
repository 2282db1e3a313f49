//! Integration tests for the public API.
//!
//! These tests run the engine end to end on synthetic data with a known
//! ground truth: 60 points exactly on a line and 40 scattered outliers.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use nalgebra::{DMatrix, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ransac_engine::estimators::LineEstimator;
use ransac_engine::*;

const N_INLIERS: usize = 60;
const N_OUTLIERS: usize = 40;

/// Rows `0..60` lie on `y = 2x + 1`, rows `60..100` are at least 0.5 away
/// from it.
fn planted_line(seed: u64) -> DMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = DMatrix::<f64>::zeros(N_INLIERS + N_OUTLIERS, 2);

    for i in 0..N_INLIERS {
        let x = (i as f64) * 0.25 - 7.0;
        points[(i, 0)] = x;
        points[(i, 1)] = 2.0 * x + 1.0;
    }

    let mut row = N_INLIERS;
    while row < N_INLIERS + N_OUTLIERS {
        let x: f64 = rng.gen_range(-10.0..10.0);
        let y: f64 = rng.gen_range(-20.0..20.0);
        // Distance to 2x - y + 1 = 0.
        if (2.0 * x - y + 1.0).abs() / 5f64.sqrt() < 0.5 {
            continue;
        }
        points[(row, 0)] = x;
        points[(row, 1)] = y;
        row += 1;
    }
    points
}

#[test]
fn recovers_planted_inliers() {
    let points = planted_line(7);
    let settings = RansacSettings::new(2, 0.5, 0.999_999);

    for _ in 0..20 {
        let result = estimate_line(&points, 0.05, Some(settings.clone())).unwrap();
        assert!(result.inliers.len() >= 55, "found {}", result.inliers.len());
        assert!(result.inliers.iter().all(|&i| i < N_INLIERS));

        let (slope, intercept) = result.model.to_slope_intercept().unwrap();
        assert!((slope - 2.0).abs() < 1e-6);
        assert!((intercept - 1.0).abs() < 1e-6);
    }
}

#[test]
fn sequential_and_parallel_runs_agree_on_a_fixed_seed() {
    let points = planted_line(11);
    let base = RansacSettings::new(2, 0.5, 0.99);

    let run = |execution: ExecutionSettings| {
        let mut estimator = LineEstimator::new(points.clone(), 0.05).unwrap();
        let mut ransac = Ransac::from_settings(base.clone().with_execution(execution)).unwrap();
        let summary = ransac.run(&mut estimator).unwrap();
        (summary, estimator.best_inliers().to_vec())
    };

    let sequential = run(ExecutionSettings::sequential().with_seed(2024));
    let parallel = run(ExecutionSettings::default().with_workers(4).with_seed(2024));
    assert_eq!(sequential, parallel);
}

#[test]
fn sample_size_equal_to_dataset_size() {
    let points = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 3.0, 4.0]);
    let result = estimate_line(&points, 1e-9, None).unwrap();
    assert_eq!(result.inliers, vec![0, 1]);
    assert_eq!(result.summary.best_iteration, 0);
}

/// Counts callbacks to check the engine's contract with the consumer.
struct Counting {
    values: Vec<f64>,
    model_calls: AtomicUsize,
    accepted: Vec<Vec<usize>>,
}

impl Estimator for Counting {
    type Datum = f64;
    type Model = f64;

    fn data_len(&self) -> usize {
        self.values.len()
    }

    fn datum(&self, index: usize) -> f64 {
        self.values[index]
    }

    fn estimate_model(&self, data: &[f64]) -> Option<f64> {
        self.model_calls.fetch_add(1, Ordering::Relaxed);
        Some(data.iter().sum::<f64>() / data.len() as f64)
    }

    fn is_inlier(&self, datum: &f64, model: &f64) -> bool {
        (datum - model).abs() < 0.5
    }

    fn accept_best(&mut self, inliers: &[usize]) {
        self.accepted.push(inliers.to_vec());
    }
}

#[test]
fn one_model_per_trial_and_one_delivery_per_run() {
    let mut estimator = Counting {
        values: vec![0.0, 0.1, 0.2, 10.0, 10.1, 0.15, -0.1, 20.0],
        model_calls: AtomicUsize::new(0),
        accepted: Vec::new(),
    };
    let mut ransac = Ransac::new(2, 0.4, 0.95).unwrap();

    let first = ransac.run(&mut estimator).unwrap();
    let second = ransac.run(&mut estimator).unwrap();

    assert_eq!(
        estimator.model_calls.load(Ordering::Relaxed),
        2 * ransac.iterations()
    );
    assert_eq!(estimator.accepted.len(), 2);
    assert_eq!(first.inlier_count, estimator.accepted[0].len());
    assert_eq!(second.inlier_count, estimator.accepted[1].len());

    for inliers in &estimator.accepted {
        let unique: HashSet<usize> = inliers.iter().copied().collect();
        assert_eq!(unique.len(), inliers.len());
        assert!(inliers.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn configuration_errors_surface_before_running() {
    assert_eq!(Ransac::new(2, 1.0, 0.99).err(), Some(RansacError::InvalidInlierRate(1.0)));
    assert_eq!(Ransac::new(0, 0.5, 0.99).err(), Some(RansacError::InvalidMinSample));
    assert!(estimate_line(&DMatrix::zeros(5, 2), 0.1, Some(RansacSettings::new(2, 0.0, 0.9))).is_err());
}

#[test]
fn iteration_count_matches_the_closed_form() {
    assert_eq!(required_iterations(4, 0.5, 0.99).unwrap(), 72);
    let w: f64 = 0.7;
    let expected = ((1.0f64 - 0.95).ln() / (1.0 - w.powi(3)).ln()).ceil() as usize;
    assert_eq!(required_iterations(3, 0.7, 0.95).unwrap(), expected);
}

#[test]
fn datum_lookup_matches_matrix_rows() {
    let points = planted_line(1);
    let estimator = LineEstimator::new(points.clone(), 0.1).unwrap();
    assert_eq!(estimator.data_len(), 100);
    assert_eq!(
        estimator.datum(3),
        Vector2::new(points[(3, 0)], points[(3, 1)])
    );
}
