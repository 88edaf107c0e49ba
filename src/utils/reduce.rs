//! Slice reductions behind norms and distances.
//!
//! With the `rayon` feature the reductions run on parallel iterators,
//! otherwise sequentially.

use crate::core::element::Element;

/// Σ |xᵢ|².
pub fn sum_modulus_sqr<T: Element>(x: &[T]) -> f64 {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x.par_iter()
            .map(|xi| xi.modulus_sqr())
            .reduce(|| 0.0, |acc, v| acc + v)
    }
    #[cfg(not(feature = "rayon"))]
    {
        x.iter().map(|xi| xi.modulus_sqr()).fold(0.0, |acc, v| acc + v)
    }
}

/// maxᵢ |xᵢ − yᵢ|, 0 for empty input. Callers check the lengths.
pub fn max_abs_diff<T: Element>(x: &[T], y: &[T]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x.par_iter()
            .zip(y.par_iter())
            .map(|(&xi, &yi)| xi.diff_modulus(yi))
            .reduce(|| 0.0, f64::max)
    }
    #[cfg(not(feature = "rayon"))]
    {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| xi.diff_modulus(yi))
            .fold(0.0, f64::max)
    }
}

/// Σ |xᵢ − yᵢ|². Callers check the lengths.
pub fn sum_diff_modulus_sqr<T: Element>(x: &[T], y: &[T]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x.par_iter()
            .zip(y.par_iter())
            .map(|(&xi, &yi)| xi.diff_modulus_sqr(yi))
            .reduce(|| 0.0, |acc, v| acc + v)
    }
    #[cfg(not(feature = "rayon"))]
    {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| xi.diff_modulus_sqr(yi))
            .fold(0.0, |acc, v| acc + v)
    }
}

/// Σ conj(xᵢ)·yᵢ. Callers check the lengths.
pub fn dot<T: Element>(x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len());
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x.par_iter()
            .zip(y.par_iter())
            .map(|(&xi, &yi)| xi.conj() * yi)
            .reduce(T::zero, |acc, v| acc + v)
    }
    #[cfg(not(feature = "rayon"))]
    {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| xi.conj() * yi)
            .fold(T::zero(), |acc, v| acc + v)
    }
}
