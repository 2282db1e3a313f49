//! Geometric models produced by the bundled estimators.

use nalgebra::{Vector2, Vector3};

/// Smallest normal length accepted before a line is considered degenerate.
const MIN_NORMAL_NORM: f64 = 1e-10;

/// 2D line `a*x + b*y + c = 0` with the normal `(a, b)` of unit length.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub params: Vector3<f64>,
}

impl Line {
    /// Build a line from unnormalised coefficients.
    ///
    /// Returns `None` if `(a, b)` is (numerically) zero.
    pub fn new(a: f64, b: f64, c: f64) -> Option<Self> {
        let norm = a.hypot(b);
        if !norm.is_finite() || norm < MIN_NORMAL_NORM {
            return None;
        }
        Some(Self {
            params: Vector3::new(a, b, c) / norm,
        })
    }

    /// Line through two points, `None` if they coincide.
    pub fn from_points(p: &Vector2<f64>, q: &Vector2<f64>) -> Option<Self> {
        // Cross product of the homogeneous points.
        let a = p.y - q.y;
        let b = q.x - p.x;
        let c = p.x * q.y - q.x * p.y;
        Self::new(a, b, c)
    }

    pub fn params(&self) -> &Vector3<f64> {
        &self.params
    }

    /// Unit normal `(a, b)`.
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.params.x, self.params.y)
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance_to_point(&self, point: &Vector2<f64>) -> f64 {
        (self.normal().dot(point) + self.params.z).abs()
    }

    /// `(slope, intercept)` of `y = slope * x + intercept`, `None` for
    /// vertical lines.
    pub fn to_slope_intercept(&self) -> Option<(f64, f64)> {
        let [a, b, c] = [self.params.x, self.params.y, self.params.z];
        if b.abs() < MIN_NORMAL_NORM {
            return None;
        }
        Some((-a / b, -c / b))
    }
}
