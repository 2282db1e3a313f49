//! Example: Robust line fitting using RANSAC
//!
//! This example fits a line to noisy points mixed with outliers through
//! `estimate_line`. Set `RUST_LOG=ransac_engine=debug` to see the engine's
//! trace of the run.

use nalgebra::DMatrix;
use rand::seq::SliceRandom;
use rand::Rng;
use ransac_engine::{estimate_line, ExecutionSettings, RansacSettings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Robust Line Fitting Example ===\n");

    // Generate synthetic data: y = 2x + 1 with noise, plus outliers
    let n_inliers = 60;
    let n_outliers = 25;
    let n_total = n_inliers + n_outliers;

    let mut rng = rand::thread_rng();

    let true_slope = 2.0;
    let true_intercept = 1.0;

    println!("True line: y = {:.2}x + {:.2}", true_slope, true_intercept);
    println!(
        "Generating {} inliers and {} outliers\n",
        n_inliers, n_outliers
    );

    let mut points = Vec::with_capacity(n_total);
    for i in 0..n_inliers {
        let x = (i as f64) * 0.2 - 6.0;
        let y = true_slope * x + true_intercept + rng.gen_range(-0.3..0.3);
        points.push((x, y));
    }
    for _ in 0..n_outliers {
        let x = rng.gen_range(-10.0..10.0);
        let y = rng.gen_range(-20.0..20.0);
        points.push((x, y));
    }
    points.shuffle(&mut rng);

    let mut points_matrix = DMatrix::<f64>::zeros(n_total, 2);
    for (i, &(x, y)) in points.iter().enumerate() {
        points_matrix[(i, 0)] = x;
        points_matrix[(i, 1)] = y;
    }

    // Outlier share is roughly 30%, assume 60% inliers to stay on the safe side.
    let settings = RansacSettings::new(2, 0.6, 0.999)
        .with_execution(ExecutionSettings::default().with_workers(4));
    let threshold = 0.5;
    let result = estimate_line(&points_matrix, threshold, Some(settings))?;

    println!("RANSAC Results:");
    println!(
        "  Found {} inliers out of {} points",
        result.inliers.len(),
        n_total
    );
    println!(
        "  Inlier ratio: {:.2}%",
        100.0 * result.inliers.len() as f64 / n_total as f64
    );
    println!("  Trials: {}", result.summary.iterations);
    println!("  Winning trial: {}", result.summary.best_iteration);
    println!("  Degenerate trials: {}", result.summary.degenerate_trials);

    let params = result.model.params();
    println!(
        "\nEstimated line: {:.4}x + {:.4}y + {:.4} = 0",
        params[0], params[1], params[2]
    );

    if let Some((slope, intercept)) = result.model.to_slope_intercept() {
        println!(
            "  In slope-intercept form: y = {:.4}x + {:.4}",
            slope, intercept
        );
        println!("  Error in slope: {:.4}", (slope - true_slope).abs());
        println!(
            "  Error in intercept: {:.4}",
            (intercept - true_intercept).abs()
        );
    }

    let found_inliers = result
        .inliers
        .iter()
        .filter(|&&idx| {
            let x = points_matrix[(idx, 0)];
            let y = points_matrix[(idx, 1)];
            (y - (true_slope * x + true_intercept)).abs() < 0.5
        })
        .count();
    println!(
        "\nCorrectly identified {} out of {} true inliers",
        found_inliers, n_inliers
    );

    Ok(())
}
