//! Reference engines the balancer can drive. Gated behind `engine-tube` so
//! the controller stays free of RNG dependencies.

pub mod tube;

pub use tube::{TubeEngine, TubeError, TubeReport};
