//! qla: minimal generic linear algebra
//!
//! This crate provides `Vector` and `Matrix` value types over integer, real
//! and complex elements, with arithmetic, norms, distances, Kronecker
//! products, a validated `UnitaryMatrix`, and a runtime multiple-dispatch
//! registry for binary operations such as `distance` and `max_distance`.

pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod matrix;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::dispatch::*;
pub use crate::error::*;
pub use crate::matrix::*;
pub use crate::vector::*;

pub use num_complex::Complex64;
