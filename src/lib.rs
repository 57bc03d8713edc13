/*!
`edge_balance` — a small closed-loop tuner for one simulation parameter.

What it does
- Drives a single actuator (the bust/payout multiplier θ) so that an opaque
  simulation's statistic (house edge π) lands inside an inclusive band.
- Each iteration builds a fresh engine from the current [`Config`], runs
  `simulate`, reads π, and either stops or applies one clamped proportional
  step `θ' = clamp(θ + k * (target - π))`.
- Stops on the first in-band statistic or after `max_iterations` runs,
  returning the last result record either way (see [`Outcome::converged`]).

How to use (call surface only)
- Build a [`Config`] (defaults: 4 players, ante 5, 20 000 rounds, target 0.05,
  multiplier 1.0).
- Provide an [`EngineFactory`]: any `FnMut(&Config) -> E` where `E: Engine`.
- Call `Balancer::new(&mut config, factory).run(max_iterations)`.

What it does NOT do
- No game model in the controller, no persistence, no CLI. The reference
  `tube` engine is an optional collaborator behind the `engine-tube` feature.
*/

pub mod balancer;
pub mod config;
pub mod error;
pub mod mechanics;

#[cfg(feature = "engine-tube")]
pub mod engines;

pub use balancer::{Balancer, BalancerSettings, Engine, EngineFactory, Measured, Outcome};
pub use config::Config;
pub use error::{BalanceError, ConfigError, SettingsError};
