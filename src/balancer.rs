//! # Balancer
//!
//! Bounded proportional-feedback loop over one actuator.
//!
//! Each iteration:
//! 1. build a fresh [`Engine`] from the current [`Config`] via the factory,
//! 2. `simulate()` and read the statistic through [`Measured`],
//! 3. stop if the statistic lies in `[band_low, band_high]` (inclusive),
//! 4. otherwise [`Balancer::adjust`] and go again.
//!
//! Exhausting the iteration budget is not an error: the last result record is
//! returned with `converged == false`, and callers decide whether that is
//! good enough.
//!
//! ## Engines
//! The balancer never looks inside a result record beyond
//! [`Measured::measured_statistic`]. Engines are rebuilt every iteration, so
//! nothing carries over between runs except the actuator in `Config`.
//!
//! ## Non-finite statistics
//! A NaN or infinite statistic from `run` is a fault
//! ([`BalanceError::NonFiniteStatistic`]) raised before any adjustment, so the
//! actuator keeps its last finite value. Calling `adjust` directly with a
//! non-finite value is a logged no-op. If the actuator or target itself is
//! NaN, the step lands on `actuator_min`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{BalanceError, ConfigError, SettingsError};
use crate::mechanics::control;

/// A result record exposing the one number the balancer steers on.
pub trait Measured {
    fn measured_statistic(&self) -> f64;
}

/// One simulation bound to a snapshot of `Config`.
pub trait Engine {
    type Output: Measured;
    type Error: std::error::Error + 'static;

    fn simulate(&mut self) -> Result<Self::Output, Self::Error>;
}

/// Builds a fresh engine from the current parameter state.
pub trait EngineFactory {
    type Engine: Engine;

    fn build(&mut self, config: &Config) -> Self::Engine;
}

impl<F, E> EngineFactory for F
where
    F: FnMut(&Config) -> E,
    E: Engine,
{
    type Engine = E;

    fn build(&mut self, config: &Config) -> E {
        self(config)
    }
}

/// Controller constants. Not part of the parameter state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerSettings {
    pub band_low: f64,
    pub band_high: f64,
    pub learning_rate: f64,
    pub actuator_min: f64,
    pub actuator_max: f64,
    pub max_iterations: usize,
}

impl Default for BalancerSettings {
    fn default() -> Self {
        Self {
            band_low: 0.03,
            band_high: 0.07,
            learning_rate: 0.8,
            actuator_min: 0.5,
            actuator_max: 3.0,
            max_iterations: 8,
        }
    }
}

impl BalancerSettings {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let finite = |a: f64, b: f64| a.is_finite() && b.is_finite();
        if !finite(self.band_low, self.band_high) || self.band_low > self.band_high {
            return Err(SettingsError::InvalidBand { low: self.band_low, high: self.band_high });
        }
        if !finite(self.actuator_min, self.actuator_max) || self.actuator_min > self.actuator_max {
            return Err(SettingsError::InvalidClamp { min: self.actuator_min, max: self.actuator_max });
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(SettingsError::InvalidGain(self.learning_rate));
        }
        Ok(())
    }

    #[inline]
    pub fn in_band(&self, statistic: f64) -> bool {
        control::in_band(statistic, self.band_low, self.band_high)
    }
}

/// What a run ends with.
#[derive(Clone, Debug)]
pub struct Outcome<R> {
    /// Last result record produced by the engine.
    pub result: R,
    /// Its statistic.
    pub statistic: f64,
    /// Actuator value the last simulation ran with. After an exhausted run
    /// the config has already taken one more step past this.
    pub actuator: f64,
    /// Simulations executed.
    pub iters: usize,
    pub converged: bool,
}

type RunResult<F> = Result<
    Outcome<<<F as EngineFactory>::Engine as Engine>::Output>,
    BalanceError<<<F as EngineFactory>::Engine as Engine>::Error>,
>;

pub struct Balancer<'a, F> {
    config: &'a mut Config,
    factory: F,
    settings: BalancerSettings,
}

impl<'a, F: EngineFactory> Balancer<'a, F> {
    /// Balancer with the default constants.
    pub fn new(config: &'a mut Config, factory: F) -> Self {
        Self { config, factory, settings: BalancerSettings::default() }
    }

    pub fn with_settings(
        config: &'a mut Config,
        factory: F,
        settings: BalancerSettings,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { config, factory, settings })
    }

    pub fn settings(&self) -> &BalancerSettings {
        &self.settings
    }

    pub fn config(&self) -> &Config {
        &*self.config
    }

    /// One proportional step toward the target, clamped into the actuator range.
    ///
    /// A NaN actuator or NaN `target_edge` resets the actuator to `actuator_min`.
    pub fn adjust(&mut self, measured: f64) {
        if !measured.is_finite() {
            warn!("ignoring non-finite statistic {measured}; actuator stays at {}", self.config.actuator());
            return;
        }
        let s = &self.settings;
        let gap = self.config.target_edge - measured;
        let before = self.config.actuator();
        let after = control::nudge(before, gap, s.learning_rate, s.actuator_min, s.actuator_max);
        self.config.set_actuator(after);
        debug!("gap {gap:+.5}: multiplier {before:.5} -> {after:.5}");
    }

    /// Run the loop with the configured `max_iterations`.
    pub fn run_default(&mut self) -> RunResult<F> {
        self.run(self.settings.max_iterations)
    }

    pub fn run(&mut self, max_iterations: usize) -> RunResult<F> {
        let mut last = None;

        for i in 0..max_iterations {
            let actuator = self.config.actuator();
            let mut engine = self.factory.build(&*self.config);
            let result = engine
                .simulate()
                .map_err(|source| BalanceError::Engine { iteration: i, source })?;
            let statistic = result.measured_statistic();

            info!("iteration {i}: edge {statistic:.5} at multiplier {actuator:.5}");

            if !statistic.is_finite() {
                return Err(BalanceError::NonFiniteStatistic { iteration: i, value: statistic });
            }

            if self.settings.in_band(statistic) {
                info!(
                    "edge stabilized within [{}, {}] after {} iterations",
                    self.settings.band_low,
                    self.settings.band_high,
                    i + 1
                );
                return Ok(Outcome { result, statistic, actuator, iters: i + 1, converged: true });
            }

            self.adjust(statistic);
            last = Some((result, statistic, actuator));
        }

        let Some((result, statistic, actuator)) = last else {
            return Err(BalanceError::NoIterations);
        };
        warn!("no convergence after {max_iterations} iterations; last edge {statistic:.5}");
        Ok(Outcome { result, statistic, actuator, iters: max_iterations, converged: false })
    }
}
