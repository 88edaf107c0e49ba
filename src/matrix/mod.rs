//! Matrix module: dense matrices, the validated unitary subtype and faer
//! interoperability.

pub mod dense;
pub mod faer_interop;
pub mod unitary;

pub use dense::Matrix;
pub use unitary::UnitaryMatrix;
