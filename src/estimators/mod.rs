//! Estimators plugging concrete data and models into the engine.
//!
//! - Line estimation from 2D points

pub mod line;

pub use line::LineEstimator;
