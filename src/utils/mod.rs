//! Internal helpers.

pub mod reduce;
