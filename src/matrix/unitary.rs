//! Matrices validated to satisfy `Mᴴ·M = I`.
//!
//! Validation happens once, in the constructor. The wrapped matrix is only
//! reachable read-only, so the property holds for the lifetime of the value;
//! [`UnitaryMatrix::into_inner`] gives back a plain, mutable [`Matrix`].

use crate::config::precision::Precision;
use crate::core::element::Element;
use crate::error::LaError;
use crate::matrix::dense::Matrix;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq)]
pub struct UnitaryMatrix<T> {
    inner: Matrix<T>,
}

impl<T: Element> UnitaryMatrix<T> {
    /// Validate against the process-wide epsilon.
    pub fn new(m: Matrix<T>) -> Result<Self, LaError> {
        Self::with_precision(m, &Precision::global())
    }

    /// Validate with an explicit zero threshold: the largest entry of
    /// `|Mᴴ·M − I|` must be zero according to `precision`. The product is
    /// evaluated over `Complex64` whatever the element kind.
    pub fn with_precision(m: Matrix<T>, precision: &Precision) -> Result<Self, LaError> {
        if !m.is_square() {
            return Err(LaError::DimensionMismatch {
                op: "unitary check",
                left: m.shape(),
                right: (m.ncols(), m.nrows()),
            });
        }
        // checked in the complex kind so integer entries cannot overflow
        let z = m.to_complex();
        let gram = z.dagger().matmul(&z)?;
        let deviation = gram.max_distance(&Matrix::identity(m.nrows())?)?;
        if !precision.is_zero_f64(deviation) {
            log::debug!(
                "rejected {}x{} matrix as non unitary: deviation {deviation:e}, epsilon {:e}",
                m.nrows(),
                m.ncols(),
                precision.epsilon()
            );
            return Err(LaError::NotUnitary {
                deviation,
                epsilon: precision.epsilon(),
            });
        }
        Ok(Self { inner: m })
    }

    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.inner
    }

    pub fn into_inner(self) -> Matrix<T> {
        self.inner
    }

    /// `U⁻¹ = Uᴴ`, unitary as well.
    pub fn inverse(&self) -> Self {
        Self { inner: self.inner.dagger() }
    }

    /// The Kronecker product of two unitaries is unitary.
    pub fn kronecker(&self, other: &Self) -> Self {
        Self { inner: self.inner.kronecker(&other.inner) }
    }

    /// Product of two unitaries of the same size.
    pub fn compose(&self, other: &Self) -> Result<Self, LaError> {
        Ok(Self { inner: self.inner.matmul(&other.inner)? })
    }
}

impl<T> Deref for UnitaryMatrix<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.inner
    }
}

impl<T: Element> TryFrom<Matrix<T>> for UnitaryMatrix<T> {
    type Error = LaError;

    fn try_from(m: Matrix<T>) -> Result<Self, LaError> {
        Self::new(m)
    }
}

impl<T> From<UnitaryMatrix<T>> for Matrix<T> {
    fn from(u: UnitaryMatrix<T>) -> Self {
        u.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_unitary() {
        for n in 1..6 {
            assert!(UnitaryMatrix::new(Matrix::<f64>::identity(n).unwrap()).is_ok());
            assert!(UnitaryMatrix::new(Matrix::<i64>::identity(n).unwrap()).is_ok());
        }
    }

    #[test]
    fn scaled_identity_is_rejected() {
        let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
        assert!(matches!(
            UnitaryMatrix::new(m),
            Err(LaError::NotUnitary { deviation, .. }) if deviation == 3.0
        ));
    }

    #[test]
    fn huge_integer_entries_are_rejected_not_overflowed() {
        let m = Matrix::from_rows(vec![vec![i64::MAX, 0], vec![0, 1]]).unwrap();
        assert!(matches!(
            UnitaryMatrix::new(m),
            Err(LaError::NotUnitary { .. })
        ));
        let flip = Matrix::from_rows(vec![vec![0i64, -1], vec![1, 0]]).unwrap();
        assert!(UnitaryMatrix::new(flip).is_ok());
    }

    #[test]
    fn non_square_is_rejected() {
        let m = Matrix::from_rows(vec![vec![1.0, 0.0]]).unwrap();
        assert!(matches!(
            UnitaryMatrix::new(m),
            Err(LaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn rotation_needs_a_loose_threshold() {
        let t = 0.3f64;
        let r = Matrix::from_rows(vec![vec![t.cos(), -t.sin()], vec![t.sin(), t.cos()]]).unwrap();
        let u = UnitaryMatrix::with_precision(r.clone(), &Precision::new(1e-12)).unwrap();
        let back = u.compose(&u.inverse()).unwrap();
        assert!(back.max_distance(&Matrix::identity(2).unwrap()).unwrap() < 1e-12);
        let err = UnitaryMatrix::with_precision(r, &Precision::new(0.0));
        assert!(matches!(err, Err(LaError::NotUnitary { .. })));
    }
}
