//! Element kinds and the scalar abstraction shared by vectors and matrices.
//!
//! Three kinds are supported: integer (`i64`), real (`f64`) and complex
//! (`Complex64`). The [`Element`] trait is the static view used as the type
//! parameter of [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix);
//! [`Scalar`] is the closed tagged union used where the kind is only known at
//! runtime.

use crate::error::LaError;
use num_complex::Complex64;
use num_traits::Num;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// The numeric domain shared by all entries of one vector or matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Integer,
    Real,
    Complex,
}

impl ElementKind {
    /// Neutral element for the sum: `0`, `0.0` or `0+0i`.
    pub fn additive_identity(self) -> Scalar {
        match self {
            ElementKind::Integer => Scalar::Integer(0),
            ElementKind::Real => Scalar::Real(0.0),
            ElementKind::Complex => Scalar::Complex(Complex64::new(0.0, 0.0)),
        }
    }

    /// Neutral element for the product: `1`, `1.0` or `1+0i`.
    pub fn multiplicative_identity(self) -> Scalar {
        match self {
            ElementKind::Integer => Scalar::Integer(1),
            ElementKind::Real => Scalar::Real(1.0),
            ElementKind::Complex => Scalar::Complex(Complex64::new(1.0, 0.0)),
        }
    }

    /// Value used to fill freshly allocated storage.
    pub fn default_value(self) -> Scalar {
        self.additive_identity()
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Integer => "integer",
            ElementKind::Real => "real",
            ElementKind::Complex => "complex",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = LaError;

    /// Accepts `int`, `integer`, `i64`, `float`, `real`, `f64`, `complex`,
    /// `c64` and `complex64`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" | "i64" => Ok(ElementKind::Integer),
            "float" | "real" | "f64" => Ok(ElementKind::Real),
            "complex" | "c64" | "complex64" => Ok(ElementKind::Complex),
            _ => Err(LaError::UnsupportedElementKind(s.to_string())),
        }
    }
}

/// A single value of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Real(f64),
    Complex(Complex64),
}

impl Scalar {
    pub fn kind(&self) -> ElementKind {
        match self {
            Scalar::Integer(_) => ElementKind::Integer,
            Scalar::Real(_) => ElementKind::Real,
            Scalar::Complex(_) => ElementKind::Complex,
        }
    }

    /// `|x|`, real-valued for every kind.
    pub fn modulus(&self) -> f64 {
        match *self {
            Scalar::Integer(x) => x.modulus(),
            Scalar::Real(x) => x.modulus(),
            Scalar::Complex(x) => x.modulus(),
        }
    }

    /// Complex conjugate; identity for integer and real values.
    pub fn conj(&self) -> Scalar {
        match *self {
            Scalar::Complex(z) => Scalar::Complex(z.conj()),
            other => other,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(x) => write!(f, "{x}"),
            Scalar::Real(x) => write!(f, "{x}"),
            Scalar::Complex(z) => write!(f, "{z}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(x: i64) -> Self {
        Scalar::Integer(x)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Real(x)
    }
}

impl From<Complex64> for Scalar {
    fn from(z: Complex64) -> Self {
        Scalar::Complex(z)
    }
}

/// Trait for types that can be stored in a [`Vector`](crate::Vector) or
/// [`Matrix`](crate::Matrix).
///
/// Implemented for `i64`, `f64` and `Complex64` only; the set is closed.
pub trait Element:
    Copy + fmt::Debug + fmt::Display + PartialEq + Num + Neg<Output = Self> + Send + Sync + 'static
{
    /// Kind tag of this element type.
    const KIND: ElementKind;

    /// Complex conjugate (identity for integers and reals).
    fn conj(self) -> Self;

    /// `|x|` as a real number.
    fn modulus(self) -> f64;

    /// `|x|²`, never negative.
    fn modulus_sqr(self) -> f64;

    /// `|self − other|`, computed without intermediate overflow.
    fn diff_modulus(self, other: Self) -> f64;

    /// `|self − other|²`.
    fn diff_modulus_sqr(self, other: Self) -> f64 {
        let d = self.diff_modulus(other);
        d * d
    }

    /// Lift into the complex kind; exact for reals, rounds integers beyond 2⁵³.
    fn to_complex(self) -> Complex64;

    fn to_scalar(self) -> Scalar;

    /// Unwrap a scalar of the matching kind.
    fn from_scalar(s: Scalar) -> Result<Self, LaError>;
}

fn kind_mismatch(found: ElementKind, expected: ElementKind) -> LaError {
    LaError::UnsupportedElementKind(format!("{found} where {expected} expected"))
}

impl Element for i64 {
    const KIND: ElementKind = ElementKind::Integer;

    #[inline]
    fn conj(self) -> i64 {
        self
    }
    #[inline]
    fn modulus(self) -> f64 {
        (self as f64).abs()
    }
    #[inline]
    fn modulus_sqr(self) -> f64 {
        let x = self as f64;
        x * x
    }
    #[inline]
    fn diff_modulus(self, other: i64) -> f64 {
        self.abs_diff(other) as f64
    }
    fn to_complex(self) -> Complex64 {
        Complex64::new(self as f64, 0.0)
    }
    fn to_scalar(self) -> Scalar {
        Scalar::Integer(self)
    }
    fn from_scalar(s: Scalar) -> Result<i64, LaError> {
        match s {
            Scalar::Integer(x) => Ok(x),
            other => Err(kind_mismatch(other.kind(), Self::KIND)),
        }
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Real;

    #[inline]
    fn conj(self) -> f64 {
        self
    }
    #[inline]
    fn modulus(self) -> f64 {
        self.abs()
    }
    #[inline]
    fn modulus_sqr(self) -> f64 {
        self * self
    }
    #[inline]
    fn diff_modulus(self, other: f64) -> f64 {
        (self - other).abs()
    }
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
    fn to_scalar(self) -> Scalar {
        Scalar::Real(self)
    }
    fn from_scalar(s: Scalar) -> Result<f64, LaError> {
        match s {
            Scalar::Real(x) => Ok(x),
            other => Err(kind_mismatch(other.kind(), Self::KIND)),
        }
    }
}

impl Element for Complex64 {
    const KIND: ElementKind = ElementKind::Complex;

    #[inline]
    fn conj(self) -> Complex64 {
        Complex64::conj(&self)
    }
    #[inline]
    fn modulus(self) -> f64 {
        self.norm()
    }
    #[inline]
    fn modulus_sqr(self) -> f64 {
        self.norm_sqr()
    }
    #[inline]
    fn diff_modulus(self, other: Complex64) -> f64 {
        (self - other).norm()
    }
    #[inline]
    fn diff_modulus_sqr(self, other: Complex64) -> f64 {
        (self - other).norm_sqr()
    }
    fn to_complex(self) -> Complex64 {
        self
    }
    fn to_scalar(self) -> Scalar {
        Scalar::Complex(self)
    }
    fn from_scalar(s: Scalar) -> Result<Complex64, LaError> {
        match s {
            Scalar::Complex(z) => Ok(z),
            other => Err(kind_mismatch(other.kind(), Self::KIND)),
        }
    }
}
