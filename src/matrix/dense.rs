//! Dense row-major matrix.
//!
//! A `Matrix` always has at least one row and one column, and every row has
//! the same length. Operations return new matrices, except [`Matrix::place`]
//! and element assignment through `IndexMut`, which write in place.

use crate::core::element::Element;
use crate::core::traits::{MatShape, Norm};
use crate::error::{LaError, Shape};
use crate::utils::reduce;
use crate::vector::Vector;
use num_complex::Complex64;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// R×C grid of elements of one kind, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Build from a list of rows. Rejects an empty list, empty rows and
    /// jagged rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LaError> {
        let ncols = rows.first().map_or(0, Vec::len);
        if ncols == 0 {
            return Err(LaError::EmptyMatrix);
        }
        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(LaError::DimensionMismatch {
                    op: "matrix from_rows",
                    left: (1, ncols),
                    right: (1, row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Construct from raw row-major storage.
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, LaError> {
        if nrows == 0 || ncols == 0 {
            return Err(LaError::EmptyMatrix);
        }
        if data.len() != nrows * ncols {
            return Err(LaError::DimensionMismatch {
                op: "matrix from_row_major",
                left: (nrows, ncols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, LaError> {
        if nrows == 0 || ncols == 0 {
            return Err(LaError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Ok(Self { nrows, ncols, data })
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, LaError> {
        Self::from_fn(nrows, ncols, |_, _| T::zero())
    }

    /// n×n identity: multiplicative identity on the diagonal, additive
    /// identity elsewhere.
    pub fn identity(n: usize) -> Result<Self, LaError> {
        let one = T::from_scalar(T::KIND.multiplicative_identity())?;
        let zero = T::from_scalar(T::KIND.additive_identity())?;
        Self::from_fn(n, n, |i, j| if i == j { one } else { zero })
    }

    // Callers guarantee `data.len() == nrows * ncols` and non-zero extents.
    fn from_parts(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { nrows, ncols, data }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> Shape {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        (i < self.nrows && j < self.ncols).then(|| self.data[i * self.ncols + j])
    }

    pub fn row(&self, i: usize) -> Option<&[T]> {
        (i < self.nrows).then(|| &self.data[i * self.ncols..(i + 1) * self.ncols])
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.ncols)
    }

    /// Row-major element storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<(), LaError> {
        if self.shape() != other.shape() {
            return Err(LaError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self::from_parts(self.nrows, self.ncols, self.data.iter().map(|&e| f(e)).collect())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&x, &y)| f(x, y))
            .collect();
        Self::from_parts(self.nrows, self.ncols, data)
    }

    /// Elementwise sum of two matrices of identical shape.
    pub fn add(&self, other: &Self) -> Result<Self, LaError> {
        self.check_same_shape(other, "matrix add")?;
        Ok(self.zip_with(other, |x, y| x + y))
    }

    /// Elementwise difference of two matrices of identical shape.
    pub fn sub(&self, other: &Self) -> Result<Self, LaError> {
        self.check_same_shape(other, "matrix sub")?;
        Ok(self.zip_with(other, |x, y| x - y))
    }

    pub fn scale(&self, x: T) -> Self {
        self.map(|e| e * x)
    }

    /// Standard product `self · other`; requires `self.ncols == other.nrows`
    /// and yields `self.nrows × other.ncols`.
    ///
    /// # Panics
    /// On `i64` overflow in debug builds.
    pub fn matmul(&self, other: &Self) -> Result<Self, LaError> {
        if self.ncols != other.nrows {
            return Err(LaError::DimensionMismatch {
                op: "matmul",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (m, p) = (self.ncols, other.ncols);
        let mut out = vec![T::zero(); self.nrows * p];
        let fill_row = |(i, out_row): (usize, &mut [T])| {
            for k in 0..m {
                let a = self.data[i * m + k];
                let b_row = &other.data[k * p..(k + 1) * p];
                for (o, &b) in out_row.iter_mut().zip(b_row) {
                    *o = *o + a * b;
                }
            }
        };
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            out.par_chunks_mut(p).enumerate().for_each(fill_row);
        }
        #[cfg(not(feature = "rayon"))]
        {
            out.chunks_mut(p).enumerate().for_each(fill_row);
        }
        Ok(Self::from_parts(self.nrows, p, out))
    }

    /// Compute y = A · x; requires `self.ncols == x.len()`.
    pub fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>, LaError> {
        if self.ncols != x.len() {
            return Err(LaError::DimensionMismatch {
                op: "matvec",
                left: self.shape(),
                right: x.shape(),
            });
        }
        Ok(self
            .rows()
            .map(|row| {
                row.iter()
                    .zip(x.iter())
                    .fold(T::zero(), |acc, (&a, &xi)| acc + a * xi)
            })
            .collect())
    }

    /// C×R matrix with `t[j, i] = self[i, j]`.
    pub fn transpose(&self) -> Self {
        let data = &self.data;
        let (r, c) = (self.nrows, self.ncols);
        let t = (0..c)
            .flat_map(|j| (0..r).map(move |i| data[i * c + j]))
            .collect();
        Self::from_parts(c, r, t)
    }

    /// Same matrix with every entry lifted to `Complex64`.
    pub fn to_complex(&self) -> Matrix<Complex64> {
        let data = self.data.iter().map(|e| e.to_complex()).collect();
        Matrix::from_parts(self.nrows, self.ncols, data)
    }

    /// Elementwise complex conjugate; a copy for integer and real kinds.
    pub fn conj(&self) -> Self {
        self.map(Element::conj)
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        self.transpose().conj()
    }

    /// Copy `src` into `self` with its top-left corner at `(row, col)`.
    ///
    /// Fails with [`LaError::OutOfBounds`] if the block does not fit; `self`
    /// is left untouched in that case.
    pub fn place(&mut self, row: usize, col: usize, src: &Self) -> Result<(), LaError> {
        let fits = |off: usize, len: usize, limit: usize| {
            off.checked_add(len).is_some_and(|end| end <= limit)
        };
        if !fits(row, src.nrows, self.nrows) || !fits(col, src.ncols, self.ncols) {
            return Err(LaError::OutOfBounds {
                row,
                col,
                block: src.shape(),
                target: self.shape(),
            });
        }
        self.copy_block(row, col, src);
        Ok(())
    }

    fn copy_block(&mut self, row: usize, col: usize, src: &Self) {
        for (i, src_row) in src.rows().enumerate() {
            let start = (row + i) * self.ncols + col;
            self.data[start..start + src.ncols].copy_from_slice(src_row);
        }
    }

    /// Kronecker product: every entry `a` of `self` becomes the block
    /// `other · a`, placed at `(i · other.nrows, j · other.ncols)`.
    ///
    /// The result is `(self.nrows · other.nrows) × (self.ncols · other.ncols)`.
    pub fn kronecker(&self, other: &Self) -> Self {
        let (br, bc) = other.shape();
        let mut out = Self::from_parts(
            self.nrows * br,
            self.ncols * bc,
            vec![T::zero(); self.data.len() * other.data.len()],
        );
        for (i, row) in self.rows().enumerate() {
            for (j, &a) in row.iter().enumerate() {
                out.copy_block(i * br, j * bc, &other.scale(a));
            }
        }
        out
    }

    /// Tensor expansion; same as [`Matrix::kronecker`].
    pub fn expand(&self, other: &Self) -> Self {
        self.kronecker(other)
    }

    /// Σ |aᵢⱼ|².
    pub fn norm_sqr(&self) -> f64 {
        reduce::sum_modulus_sqr(&self.data)
    }

    /// Frobenius norm.
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// `‖self − other‖_F`, without overflow on integer entries.
    pub fn distance(&self, other: &Self) -> Result<f64, LaError> {
        self.check_same_shape(other, "matrix distance")?;
        Ok(reduce::sum_diff_modulus_sqr(&self.data, &other.data).sqrt())
    }

    /// `maxᵢⱼ |selfᵢⱼ − otherᵢⱼ|`.
    pub fn max_distance(&self, other: &Self) -> Result<f64, LaError> {
        self.check_same_shape(other, "matrix max_distance")?;
        Ok(reduce::max_abs_diff(&self.data, &other.data))
    }

    /// Sum of the diagonal of a square matrix.
    pub fn trace(&self) -> Result<T, LaError> {
        if !self.is_square() {
            return Err(LaError::DimensionMismatch {
                op: "trace",
                left: self.shape(),
                right: (self.ncols, self.nrows),
            });
        }
        Ok((0..self.nrows)
            .map(|i| self.data[i * self.ncols + i])
            .fold(T::zero(), |acc, x| acc + x))
    }
}

impl<T> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Element> Norm for Matrix<T> {
    fn norm_sqr(&self) -> f64 {
        Matrix::norm_sqr(self)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.ncols + j]
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{e}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// # Panics
/// If the shapes differ.
impl<T: Element> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
/// If the shapes differ.
impl<T: Element> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Matrix product.
///
/// # Panics
/// If `self.ncols() != rhs.nrows()`.
impl<T: Element> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Matrix-vector product.
///
/// # Panics
/// If `self.ncols() != rhs.len()`.
impl<T: Element> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        self.matvec(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, x: T) -> Matrix<T> {
        self.scale(x)
    }
}

impl<T: Element> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|e| -e)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, m: &Matrix<$t>) -> Matrix<$t> {
                    m.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i64, f64, Complex64);
