//! `distance` and `max_distance` over (Vector, Vector) and (Matrix, Matrix).
//!
//! Two entry points are offered. [`distance`] and [`max_distance`] resolve
//! the operand pair at compile time through the [`Metric`] trait. The `dyn_`
//! variants resolve it at runtime through the standard [`Dispatcher`], which
//! also accepts pairs registered later by the caller on their own registry.

use crate::core::element::Element;
use crate::dispatch::registry::Dispatcher;
use crate::error::LaError;
use crate::matrix::Matrix;
use crate::vector::Vector;
use num_complex::Complex64;
use std::any::Any;
use std::sync::OnceLock;

/// Operation name of the difference norm.
pub const DISTANCE: &str = "distance";
/// Operation name of the Chebyshev distance.
pub const MAX_DISTANCE: &str = "max_distance";

/// Distances between two operands of a matching kind.
pub trait Metric<Rhs: ?Sized = Self> {
    /// Norm of the difference (Euclidean or Frobenius).
    fn distance(&self, other: &Rhs) -> Result<f64, LaError>;
    /// Largest elementwise difference modulus.
    fn max_distance(&self, other: &Rhs) -> Result<f64, LaError>;
}

impl<T: Element> Metric for Vector<T> {
    fn distance(&self, other: &Self) -> Result<f64, LaError> {
        Vector::distance(self, other)
    }
    fn max_distance(&self, other: &Self) -> Result<f64, LaError> {
        Vector::max_distance(self, other)
    }
}

impl<T: Element> Metric for Matrix<T> {
    fn distance(&self, other: &Self) -> Result<f64, LaError> {
        Matrix::distance(self, other)
    }
    fn max_distance(&self, other: &Self) -> Result<f64, LaError> {
        Matrix::max_distance(self, other)
    }
}

/// `‖a − b‖` for two vectors or two matrices.
pub fn distance<A: Metric<B>, B>(a: &A, b: &B) -> Result<f64, LaError> {
    a.distance(b)
}

/// `max |aᵢ − bᵢ|` for two vectors or two matrices.
pub fn max_distance<A: Metric<B>, B>(a: &A, b: &B) -> Result<f64, LaError> {
    a.max_distance(b)
}

fn register_metrics<T: Element>(d: &mut Dispatcher<f64>) {
    d.register(DISTANCE, |a: &Vector<T>, b: &Vector<T>| a.distance(b))
        .register(MAX_DISTANCE, |a: &Vector<T>, b: &Vector<T>| a.max_distance(b))
        .register(DISTANCE, |a: &Matrix<T>, b: &Matrix<T>| a.distance(b))
        .register(MAX_DISTANCE, |a: &Matrix<T>, b: &Matrix<T>| a.max_distance(b));
}

impl Dispatcher<f64> {
    /// Registry with `distance` and `max_distance` for vector and matrix
    /// pairs of every element kind.
    pub fn standard() -> Self {
        let mut d = Self::new();
        register_metrics::<i64>(&mut d);
        register_metrics::<f64>(&mut d);
        register_metrics::<Complex64>(&mut d);
        d
    }
}

static STANDARD: OnceLock<Dispatcher<f64>> = OnceLock::new();

/// Process-wide standard registry, built on first use.
pub fn standard_dispatcher() -> &'static Dispatcher<f64> {
    STANDARD.get_or_init(Dispatcher::<f64>::standard)
}

/// [`distance`] resolved from the runtime types of `a` and `b`.
pub fn dyn_distance(a: &dyn Any, b: &dyn Any) -> Result<f64, LaError> {
    standard_dispatcher().invoke(DISTANCE, a, b)
}

/// [`max_distance`] resolved from the runtime types of `a` and `b`.
pub fn dyn_max_distance(a: &dyn Any, b: &dyn Any) -> Result<f64, LaError> {
    standard_dispatcher().invoke(MAX_DISTANCE, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_dynamic_paths_agree() {
        let v = Vector::new(vec![0.0, 0.0]);
        let w = Vector::new(vec![3.0, 4.0]);
        assert_eq!(distance(&v, &w).unwrap(), 5.0);
        assert_eq!(max_distance(&v, &w).unwrap(), 4.0);
        assert_eq!(dyn_distance(&v, &w).unwrap(), 5.0);
        assert_eq!(dyn_max_distance(&v, &w).unwrap(), 4.0);
    }

    #[test]
    fn standard_registry_covers_each_kind() {
        let d = standard_dispatcher();
        assert_eq!(d.len(), 12);
        let a = Matrix::<i64>::identity(2).unwrap();
        assert_eq!(d.invoke(MAX_DISTANCE, &a, &a), Ok(0.0));
    }

    #[test]
    fn mixed_operands_have_no_implementation() {
        let v = Vector::new(vec![1.0]);
        let m = Matrix::<f64>::identity(1).unwrap();
        let vi = Vector::new(vec![1i64]);
        assert!(matches!(
            dyn_distance(&v, &m),
            Err(LaError::NoMatchingImplementation { .. })
        ));
        assert!(matches!(
            dyn_distance(&v, &vi),
            Err(LaError::NoMatchingImplementation { .. })
        ));
    }
}
