//! # ransac-engine - Generic RANSAC with parallel trials
//!
//! `ransac-engine` estimates a model from data contaminated with outliers by
//! Random Sample Consensus: it repeatedly builds a candidate model from a
//! small random subset of the data, counts the points consistent with it and
//! keeps the best-supported candidate.
//!
//! The number of trials is fixed up front from the assumed inlier rate `w`,
//! the minimal sample size `m` and the desired success probability `p`:
//!
//! ```text
//! iterations = ceil( ln(1 - p) / ln(1 - w^m) )
//! ```
//!
//! Trials are independent and run as a fork-join batch on a rayon pool. Each
//! trial's inlier set lands in a slot indexed by its iteration number, and the
//! winner is the largest set, the earliest iteration winning ties, so the
//! result does not depend on thread scheduling.
//!
//! ## Quick Start
//!
//! ```rust
//! use ransac_engine::{estimate_line, RansacSettings};
//! use nalgebra::DMatrix;
//!
//! let points = DMatrix::from_row_slice(5, 2, &[
//!     0.0, 1.0,
//!     1.0, 3.0,
//!     2.0, 5.0,
//!     3.0, 7.0,
//!     1.5, -9.0, // outlier
//! ]);
//!
//! let result = estimate_line(&points, 0.1, Some(RansacSettings::default())).unwrap();
//! println!("Found {} inliers", result.inliers.len());
//! ```
//!
//! ## Custom models
//!
//! Implement [`Estimator`](crate::core::Estimator) for your data and model types and
//! hand it to a [`Ransac`](crate::core::Ransac) engine:
//!
//! ```rust
//! use ransac_engine::{Estimator, Ransac};
//!
//! /// Robust mean of scalars: a model is one sampled value.
//! struct RobustMean {
//!     values: Vec<f64>,
//!     tolerance: f64,
//!     inliers: Vec<usize>,
//! }
//!
//! impl Estimator for RobustMean {
//!     type Datum = f64;
//!     type Model = f64;
//!
//!     fn data_len(&self) -> usize {
//!         self.values.len()
//!     }
//!
//!     fn datum(&self, index: usize) -> f64 {
//!         self.values[index]
//!     }
//!
//!     fn estimate_model(&self, data: &[f64]) -> Option<f64> {
//!         data.first().copied()
//!     }
//!
//!     fn is_inlier(&self, datum: &f64, model: &f64) -> bool {
//!         (datum - model).abs() <= self.tolerance
//!     }
//!
//!     fn accept_best(&mut self, inliers: &[usize]) {
//!         self.inliers = inliers.to_vec();
//!     }
//! }
//!
//! let mut estimator = RobustMean {
//!     values: vec![1.0, 1.1, 0.9, 1.05, 40.0, -7.0],
//!     tolerance: 0.2,
//!     inliers: Vec::new(),
//! };
//! let mut ransac = Ransac::new(1, 0.5, 0.999).unwrap();
//! let summary = ransac.run(&mut estimator).unwrap();
//! assert_eq!(summary.inlier_count, estimator.inliers.len());
//! ```
//!
//! ## Modules
//!
//! - **[`api`](api)**: High-level estimation functions
//! - **[`core`](crate::core)**: The `Estimator` and `Sampler` traits and the `Ransac` engine
//! - **[`estimators`](estimators)**: Built-in estimators
//! - **[`models`](models)**: Geometric model types
//! - **[`samplers`](samplers)**: Minimal-sample drawing without replacement
//! - **[`scoring`](scoring)**: Inlier counting and winner selection
//! - **[`settings`](settings)**: Configuration types
//! - **[`utils`](utils)**: Random range generators

pub mod api;
pub mod core;
pub mod error;
pub mod estimators;
pub mod models;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;
pub mod utils;

// Re-export high-level API
pub use api::{estimate_line, EstimationResult};

// Re-export the engine and its traits
pub use crate::core::{required_iterations, Estimator, Ransac, RunState, RunSummary, Sampler};
pub use error::{RansacError, Result};

// Re-export settings for convenience
pub use settings::{ExecutionSettings, RansacSettings, SeedPolicy};
