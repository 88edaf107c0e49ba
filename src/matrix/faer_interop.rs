//! Conversions between [`Matrix<f64>`] and `faer::Mat<f64>`.

use crate::error::LaError;
use crate::matrix::dense::Matrix;
use faer::Mat;

impl From<&Matrix<f64>> for Mat<f64> {
    fn from(m: &Matrix<f64>) -> Self {
        Mat::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl TryFrom<&Mat<f64>> for Matrix<f64> {
    type Error = LaError;

    /// Fails with [`LaError::EmptyMatrix`] for a faer matrix with no rows or
    /// no columns.
    fn try_from(m: &Mat<f64>) -> Result<Self, LaError> {
        Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}
