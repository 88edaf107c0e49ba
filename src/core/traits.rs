//! Core linear-algebra traits for qla.

use crate::error::Shape;

/// Row/column extent of a vector or matrix.
pub trait MatShape {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
    /// Number of columns (1 for a vector).
    fn ncols(&self) -> usize;
    /// `(nrows, ncols)`.
    fn shape(&self) -> Shape {
        (self.nrows(), self.ncols())
    }
}

/// Euclidean (vector) or Frobenius (matrix) norm.
pub trait Norm {
    /// Compute Σ |xᵢ|².
    fn norm_sqr(&self) -> f64;
    /// Compute ‖x‖₂.
    fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }
}
