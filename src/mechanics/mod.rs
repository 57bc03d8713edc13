pub mod control;
#[cfg(feature = "engine-tube")]
pub mod stoch;

pub use control::*;
