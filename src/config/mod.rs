//! Process and call-level configuration.

pub mod precision;

pub use precision::{DEFAULT_EPSILON, Precision, get_epsilon, is_zero, set_epsilon};
