//! Line estimator for 2D line fitting.

use nalgebra::{Matrix2, Vector2};

use crate::core::Estimator;
use crate::error::{RansacError, Result};
use crate::models::Line;
use crate::types::DataMatrix;

/// Line estimator over an `N x 2` point matrix, one `[x, y]` point per row.
///
/// A point is an inlier when its perpendicular distance to the candidate line
/// is at most `threshold`. The winning inlier set is kept for [`refit`].
///
/// [`refit`]: LineEstimator::refit
pub struct LineEstimator {
    points: DataMatrix,
    threshold: f64,
    best_inliers: Vec<usize>,
}

impl LineEstimator {
    /// Two points define a line.
    pub const SAMPLE_SIZE: usize = 2;

    pub fn new(points: DataMatrix, threshold: f64) -> Result<Self> {
        if points.ncols() != 2 {
            return Err(RansacError::InvalidInput(
                "points must be Nx2 matrix (each row is [x, y])".to_string(),
            ));
        }
        if !(threshold.is_finite() && threshold >= 0.0) {
            return Err(RansacError::InvalidInput(format!(
                "threshold must be a non-negative finite distance, got {threshold}"
            )));
        }
        Ok(Self {
            points,
            threshold,
            best_inliers: Vec::new(),
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn points(&self) -> &DataMatrix {
        &self.points
    }

    /// Inliers delivered by the last run.
    pub fn best_inliers(&self) -> &[usize] {
        &self.best_inliers
    }

    /// Total least squares line through the retained inliers.
    ///
    /// The normal is the eigenvector of the scatter matrix with the smallest
    /// eigenvalue. Returns `None` with fewer than two inliers or when all of
    /// them coincide.
    pub fn refit(&self) -> Option<Line> {
        if self.best_inliers.len() < Self::SAMPLE_SIZE {
            return None;
        }

        let n = self.best_inliers.len() as f64;
        let centroid = self
            .best_inliers
            .iter()
            .fold(Vector2::<f64>::zeros(), |acc, &i| acc + self.datum(i))
            / n;

        let scatter = self
            .best_inliers
            .iter()
            .fold(Matrix2::zeros(), |acc: Matrix2<f64>, &i| {
                let d = self.datum(i) - centroid;
                acc + d * d.transpose()
            });
        if scatter.trace() < 1e-20 {
            return None;
        }

        let eigen = scatter.symmetric_eigen();
        let smallest = if eigen.eigenvalues[0] <= eigen.eigenvalues[1] {
            0
        } else {
            1
        };
        let normal = eigen.eigenvectors.column(smallest).into_owned();
        Line::new(normal.x, normal.y, -normal.dot(&centroid))
    }
}

impl Estimator for LineEstimator {
    type Datum = Vector2<f64>;
    type Model = Line;

    fn data_len(&self) -> usize {
        self.points.nrows()
    }

    fn datum(&self, index: usize) -> Vector2<f64> {
        Vector2::new(self.points[(index, 0)], self.points[(index, 1)])
    }

    fn estimate_model(&self, data: &[Vector2<f64>]) -> Option<Line> {
        match data {
            [p, q, ..] => Line::from_points(p, q),
            _ => None,
        }
    }

    fn is_inlier(&self, datum: &Vector2<f64>, model: &Line) -> bool {
        model.distance_to_point(datum) <= self.threshold
    }

    fn accept_best(&mut self, inliers: &[usize]) {
        self.best_inliers = inliers.to_vec();
    }
}
