//! Operation dispatch: the runtime registry and the distance functions built
//! on it.

pub mod distance;
pub mod registry;

pub use distance::{
    DISTANCE, MAX_DISTANCE, Metric, distance, dyn_distance, dyn_max_distance, max_distance,
    standard_dispatcher,
};
pub use registry::Dispatcher;
