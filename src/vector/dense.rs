//! Dense vector with value semantics.
//!
//! Every operation returns a new `Vector`; operands are never modified.
//! Named methods report shape problems as [`LaError`]; the operator overloads
//! on references panic with the same message.

use crate::core::element::{Element, ElementKind};
use crate::core::traits::{MatShape, Norm};
use crate::error::LaError;
use crate::utils::reduce;
use num_complex::Complex64;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Ordered sequence of `N >= 0` elements of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Element> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Zero-filled vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![T::zero(); n] }
    }

    /// Zero-filled vector of length `n`, checking that `T` has the requested
    /// runtime kind.
    pub fn zeros_of_kind(n: usize, kind: ElementKind) -> Result<Self, LaError> {
        if kind != T::KIND {
            return Err(LaError::UnsupportedElementKind(format!(
                "{kind} requested for a {} vector",
                T::KIND
            )));
        }
        let zero = T::from_scalar(kind.default_value())?;
        Ok(Self { data: vec![zero; n] })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    fn check_len(&self, other: &Self, op: &'static str) -> Result<(), LaError> {
        if self.len() != other.len() {
            return Err(LaError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Vec<T> {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(&x, &y)| f(x, y))
            .collect()
    }

    /// Elementwise sum. Lengths must match.
    ///
    /// # Panics
    /// On `i64` overflow in debug builds.
    pub fn add(&self, other: &Self) -> Result<Self, LaError> {
        self.check_len(other, "vector add")?;
        Ok(Self::new(self.zip_with(other, |x, y| x + y)))
    }

    /// Elementwise difference. Lengths must match.
    pub fn sub(&self, other: &Self) -> Result<Self, LaError> {
        self.check_len(other, "vector sub")?;
        Ok(Self::new(self.zip_with(other, |x, y| x - y)))
    }

    /// Multiply every element by `x`.
    pub fn scale(&self, x: T) -> Self {
        self.data.iter().map(|&e| x * e).collect()
    }

    /// Tensor product of two vectors of equal length `N`.
    ///
    /// The result has length `N²` with `result[i * N + j] = self[j] * other[i]`:
    /// the outer loop runs over `other`.
    pub fn outer(&self, other: &Self) -> Result<Self, LaError> {
        self.check_len(other, "vector outer")?;
        let mut out = Vec::with_capacity(self.len() * other.len());
        for &w in other.iter() {
            for &v in self.iter() {
                out.push(v * w);
            }
        }
        Ok(Self::new(out))
    }

    /// Σ conj(selfᵢ)·otherᵢ.
    pub fn dot(&self, other: &Self) -> Result<T, LaError> {
        self.check_len(other, "vector dot")?;
        Ok(reduce::dot(&self.data, &other.data))
    }

    pub fn conj(&self) -> Self {
        self.data.iter().map(|e| e.conj()).collect()
    }

    /// Σ |vᵢ|².
    pub fn norm_sqr(&self) -> f64 {
        reduce::sum_modulus_sqr(&self.data)
    }

    /// Euclidean norm, `sqrt(Σ |vᵢ|²)`.
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// `‖self − other‖₂`, total for every kind: integer differences never
    /// overflow.
    pub fn distance(&self, other: &Self) -> Result<f64, LaError> {
        self.check_len(other, "vector distance")?;
        Ok(reduce::sum_diff_modulus_sqr(&self.data, &other.data).sqrt())
    }

    /// Chebyshev distance `maxᵢ |selfᵢ − otherᵢ|`; 0 for two empty vectors.
    pub fn max_distance(&self, other: &Self) -> Result<f64, LaError> {
        self.check_len(other, "vector max_distance")?;
        Ok(reduce::max_abs_diff(&self.data, &other.data))
    }
}

impl<T> MatShape for Vector<T> {
    fn nrows(&self) -> usize {
        self.data.len()
    }
    fn ncols(&self) -> usize {
        1
    }
}

impl<T: Element> Norm for Vector<T> {
    fn norm_sqr(&self) -> f64 {
        Vector::norm_sqr(self)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}

/// # Panics
/// If the lengths differ.
impl<T: Element> Add for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        Vector::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
/// If the lengths differ.
impl<T: Element> Sub for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        Vector::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Element> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, x: T) -> Vector<T> {
        self.scale(x)
    }
}

impl<T: Element> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.data.iter().map(|&e| -e).collect()
    }
}

// Scalar on the left: `x * &v`.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, v: &Vector<$t>) -> Vector<$t> {
                    v.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i64, f64, Complex64);
