//! Element abstraction and the traits shared by vectors and matrices.

pub mod element;
pub mod traits;

pub use element::{Element, ElementKind, Scalar};
pub use traits::{MatShape, Norm};
