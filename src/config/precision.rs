//! Threshold under which numbers are considered zero.
//!
//! Validation code takes a [`Precision`] value explicitly. The process-wide
//! threshold read by [`get_epsilon`] and written by [`set_epsilon`] only
//! provides the default snapshot returned by [`Precision::global`]; callers
//! sharing the process share it.

use crate::core::element::Element;
use std::sync::{PoisonError, RwLock};

/// Default zero threshold.
pub const DEFAULT_EPSILON: f64 = 1e-15;

static EPSILON: RwLock<f64> = RwLock::new(DEFAULT_EPSILON);

/// Zero-test configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    /// Values with modulus strictly below this are zero.
    pub epsilon: f64,
}

impl Precision {
    /// No validation: with a zero or negative epsilon `is_zero` is always false.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Snapshot of the current process-wide threshold.
    pub fn global() -> Self {
        Self::new(get_epsilon())
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// `|x| < epsilon`, for any element kind.
    pub fn is_zero<T: Element>(&self, x: T) -> bool {
        self.is_zero_f64(x.modulus())
    }

    pub fn is_zero_f64(&self, x: f64) -> bool {
        x.abs() < self.epsilon
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

/// Current threshold under which numbers are considered zero.
pub fn get_epsilon() -> f64 {
    *EPSILON.read().unwrap_or_else(PoisonError::into_inner)
}

/// Set the process-wide zero threshold. Any value is accepted.
pub fn set_epsilon(eps: f64) {
    log::trace!("epsilon set to {eps:e}");
    *EPSILON.write().unwrap_or_else(PoisonError::into_inner) = eps;
}

/// `|x| < get_epsilon()`.
pub fn is_zero<T: Element>(x: T) -> bool {
    Precision::global().is_zero(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn explicit_precision_is_independent_of_global() {
        let p = Precision::new(1e-9);
        assert!(p.is_zero(1e-10));
        assert!(!p.is_zero(1e-8));
        assert!(p.is_zero(Complex64::new(1e-10, -1e-10)));
        assert!(p.is_zero(0i64));
        assert!(!p.is_zero(1i64));
    }

    #[test]
    fn degenerate_thresholds() {
        assert!(!Precision::new(0.0).is_zero(0.0));
        assert!(!Precision::new(-1.0).is_zero(0.0));
        assert_eq!(Precision::default().epsilon(), DEFAULT_EPSILON);
    }
}
