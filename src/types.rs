//! Core shared types for the RANSAC engine.
//!
//! Samples and inlier sets are plain index vectors into the consumer's
//! dataset; the engine never holds the data itself.

use nalgebra::DMatrix;

/// Dynamic matrix of `f64` with one data point per row.
///
/// Used by the bundled line-fitting consumer; the engine itself is agnostic
/// of how data is stored.
pub type DataMatrix = DMatrix<f64>;

/// Pairwise-distinct indices drawn for a single trial, in draw order.
pub type Sample = Vec<usize>;

/// Ascending indices of the data points consistent with one model.
pub type InlierSet = Vec<usize>;
