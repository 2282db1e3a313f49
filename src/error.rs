//! Error types for the RANSAC engine.
//!
//! Configuration and sampling-domain errors are reported before any trial
//! runs. A degenerate model is not an error: the trial that produced it simply
//! contributes an empty inlier set.

use thiserror::Error;

/// Errors raised while configuring or running the engine.
#[derive(Debug, Error)]
pub enum RansacError {
    #[error("minimal sample size must be positive")]
    InvalidMinSample,

    #[error("assumed inlier rate must lie strictly inside (0, 1), got {0}")]
    InvalidInlierRate(f64),

    #[error("desired success probability must lie strictly inside (0, 1), got {0}")]
    InvalidConfidence(f64),

    #[error(
        "iteration count is not representable for inlier rate {inlier_rate} and minimal sample {min_sample}"
    )]
    IterationOverflow { inlier_rate: f64, min_sample: usize },

    #[error("cannot draw {required} distinct samples from {available} data points")]
    InsufficientData { required: usize, available: usize },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no model is supported by the data")]
    NoConsensus,
}

impl PartialEq for RansacError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidMinSample, Self::InvalidMinSample) => true,
            (Self::InvalidInlierRate(a), Self::InvalidInlierRate(b))
            | (Self::InvalidConfidence(a), Self::InvalidConfidence(b)) => {
                a.to_bits() == b.to_bits()
            }
            (
                Self::IterationOverflow {
                    inlier_rate: a,
                    min_sample: m,
                },
                Self::IterationOverflow {
                    inlier_rate: b,
                    min_sample: n,
                },
            ) => a.to_bits() == b.to_bits() && m == n,
            (
                Self::InsufficientData {
                    required: r1,
                    available: a1,
                },
                Self::InsufficientData {
                    required: r2,
                    available: a2,
                },
            ) => r1 == r2 && a1 == a2,
            (Self::ThreadPool(a), Self::ThreadPool(b)) => a.to_string() == b.to_string(),
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::NoConsensus, Self::NoConsensus) => true,
            _ => false,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RansacError>;
