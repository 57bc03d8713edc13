//! Tube table: a small wagering game used as a reference engine.
//!
//! Every round each player stakes one ante and draws exactly one outcome:
//! - a made hand (see [`HANDS`]) → the house pays `ante * payout[hand]`,
//! - a bust (probability [`BUST_ODDS`]) → the house collects `ante * bust_multiplier`,
//! - otherwise an even-money decision: the house wins or pays `ante`, 50/50.
//!
//! House edge is `house_net / wagered`. It rises with `bust_multiplier`, which
//! is what the balancer steers.

use std::collections::BTreeMap;

use bevy_prng::WyRand;
use thiserror::Error;

use crate::balancer::{Engine, Measured};
use crate::config::Config;
use crate::mechanics::stoch;

/// Made hands and their per-draw odds, rarest last.
pub const HANDS: [(&str, f64); 5] = [
    ("ST", 0.02),
    ("FL", 0.01),
    ("FH", 0.006),
    ("SF", 0.001),
    ("RF", 0.000_2),
];

/// Chance that a draw which made no hand busts.
pub const BUST_ODDS: f64 = 0.32;

/// Chance the house takes an even-money decision.
pub const EVEN_ODDS: f64 = 0.5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TubeError {
    #[error("nothing wagered: players={players}, ante={ante}, rounds={rounds}")]
    NoWager { players: u32, ante: u32, rounds: u32 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TubeReport {
    pub house_edge: f64,
    pub rounds: u32,
    pub hands_played: u64,
    pub wagered: f64,
    pub house_net: f64,
    pub busts: u64,
    /// Even-money decisions the house won.
    pub house_wins: u64,
    /// Even-money decisions the house paid.
    pub player_wins: u64,
    pub hits: BTreeMap<String, u64>,
}

impl Measured for TubeReport {
    fn measured_statistic(&self) -> f64 {
        self.house_edge
    }
}

/// One table bound to a `Config` snapshot. Owns its RNG.
pub struct TubeEngine {
    players: u32,
    ante: u32,
    rounds: u32,
    bust_multiplier: f64,
    payouts: [f64; HANDS.len()],
    rng: WyRand,
}

impl TubeEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            players: config.players,
            ante: config.ante,
            rounds: config.rounds,
            bust_multiplier: config.bust_multiplier,
            payouts: HANDS.map(|(name, _)| config.payout(name)),
            rng: stoch::seeded(config.seed),
        }
    }
}

impl Engine for TubeEngine {
    type Output = TubeReport;
    type Error = TubeError;

    fn simulate(&mut self) -> Result<TubeReport, TubeError> {
        if self.players == 0 || self.ante == 0 || self.rounds == 0 {
            return Err(TubeError::NoWager {
                players: self.players,
                ante: self.ante,
                rounds: self.rounds,
            });
        }

        let odds = HANDS.map(|(_, p)| p);
        let ante = f64::from(self.ante);
        let mut hits = [0u64; HANDS.len()];
        let (mut busts, mut house_wins, mut player_wins) = (0u64, 0u64, 0u64);
        let (mut house_net, mut hands_played) = (0.0, 0u64);

        for _ in 0..self.rounds {
            for _ in 0..self.players {
                hands_played += 1;
                if let Some(h) = stoch::pick(&mut self.rng, &odds) {
                    hits[h] += 1;
                    house_net -= ante * self.payouts[h];
                } else if stoch::bernoulli(&mut self.rng, BUST_ODDS) {
                    busts += 1;
                    house_net += ante * self.bust_multiplier;
                } else if stoch::bernoulli(&mut self.rng, EVEN_ODDS) {
                    house_wins += 1;
                    house_net += ante;
                } else {
                    player_wins += 1;
                    house_net -= ante;
                }
            }
        }

        let wagered = hands_played as f64 * ante;
        Ok(TubeReport {
            house_edge: house_net / wagered,
            rounds: self.rounds,
            hands_played,
            wagered,
            house_net,
            busts,
            house_wins,
            player_wins,
            hits: HANDS
                .iter()
                .zip(hits)
                .map(|((name, _), n)| (name.to_string(), n))
                .collect(),
        })
    }
}
