//! Parameter state shared between the balancer and the engine factory.
//!
//! `Config` is plain data. The balancer is its only writer, and only through
//! the actuator; everything else is read by engines at construction time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning session inputs plus the current actuator value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub players: u32,
    pub ante: u32,
    pub rounds: u32,

    /// Calibration target for the measured statistic (house edge).
    pub target_edge: f64,
    /// The actuator. Written by `Balancer::adjust` only.
    pub bust_multiplier: f64,

    /// Payout multiples of the ante, keyed by hand name (ST, FL, FH, SF, RF).
    pub tube_initial: BTreeMap<String, f64>,

    /// RNG seed handed to engines so each iteration replays the same draws.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            ante: 5,
            rounds: 20_000,
            target_edge: 0.05,
            bust_multiplier: 1.0,
            tube_initial: default_tube(),
            seed: 0x5EED,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON document; missing fields take defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    #[inline]
    pub fn actuator(&self) -> f64 {
        self.bust_multiplier
    }

    /// Unchecked write. Range is the caller's concern.
    #[inline]
    pub fn set_actuator(&mut self, value: f64) {
        self.bust_multiplier = value;
    }

    /// Payout multiple for `hand`, or 0 when the table has no entry.
    pub fn payout(&self, hand: &str) -> f64 {
        self.tube_initial.get(hand).copied().unwrap_or(0.0)
    }
}

fn default_tube() -> BTreeMap<String, f64> {
    [("ST", 5.0), ("FL", 10.0), ("FH", 15.0), ("SF", 20.0), ("RF", 25.0)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
