//! Vector module: dense, owned vectors over any element kind.

pub mod dense;
pub use dense::Vector;
