use thiserror::Error;

/// Faults raised by [`crate::Balancer::run`].
///
/// `E` is the engine's own error type; it is carried as the source untouched.
#[derive(Error, Debug)]
pub enum BalanceError<E> {
    #[error("max_iterations must be at least 1")]
    NoIterations,

    #[error("engine failed on iteration {iteration}: {source}")]
    Engine {
        iteration: usize,
        #[source]
        source: E,
    },

    #[error("engine reported a non-finite statistic ({value}) on iteration {iteration}")]
    NonFiniteStatistic { iteration: usize, value: f64 },
}

/// Rejected controller constants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("acceptance band [{low}, {high}] is empty or not finite")]
    InvalidBand { low: f64, high: f64 },

    #[error("actuator clamp [{min}, {max}] is empty or not finite")]
    InvalidClamp { min: f64, max: f64 },

    #[error("learning rate must be finite and positive, got {0}")]
    InvalidGain(f64),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
