use thiserror::Error;

/// `(rows, cols)`; vectors are reported as `(len, 1)`.
pub type Shape = (usize, usize);

// Unified error type for qla

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LaError {
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },
    #[error("block {block:?} placed at ({row}, {col}) exceeds target {target:?}")]
    OutOfBounds {
        row: usize,
        col: usize,
        block: Shape,
        target: Shape,
    },
    #[error("unsupported element kind: {0} (only integer, real or complex allowed)")]
    UnsupportedElementKind(String),
    #[error("no implementation of `{op}` for ({lhs}, {rhs})")]
    NoMatchingImplementation {
        op: String,
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("non unitary matrix: max |M^H M - I| = {deviation:e} (epsilon {epsilon:e})")]
    NotUnitary { deviation: f64, epsilon: f64 },
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,
}
