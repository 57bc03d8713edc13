//! Stochastic mechanics: uniform, Bernoulli and categorical draws.
//! Engines own their `WyRand` outright, so helpers take `&mut`.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// Seeded WyRand; the same seed replays the same stream.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform in [0, 1) from the top 53 bits.
#[inline]
pub fn uniform01(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p) with WyRand.
#[inline]
pub fn bernoulli(rng: &mut WyRand, p: f64) -> bool {
    uniform01(rng) < p.clamp(0.0, 1.0)
}

/// Categorical draw over `odds`. Returns the index of the hit, or `None`
/// when the draw falls past the cumulative mass (the "no hit" remainder).
#[inline]
pub fn pick(rng: &mut WyRand, odds: &[f64]) -> Option<usize> {
    let u = uniform01(rng);
    let mut acc = 0.0;
    for (i, p) in odds.iter().enumerate() {
        acc += p.max(0.0);
        if u < acc {
            return Some(i);
        }
    }
    None
}
