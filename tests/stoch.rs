// tests/stoch.rs
#![cfg(feature = "engine-tube")]

use edge_balance::mechanics::stoch::{bernoulli, pick, seeded, uniform01};

#[test]
fn uniform_stays_in_unit_interval() {
    let mut rng = seeded(11);
    for _ in 0..10_000 {
        let u = uniform01(&mut rng);
        assert!((0.0..1.0).contains(&u), "u = {u}");
    }
}

#[test]
fn bernoulli_extremes_are_certain() {
    let mut rng = seeded(3);
    for _ in 0..1_000 {
        assert!(!bernoulli(&mut rng, 0.0));
        assert!(bernoulli(&mut rng, 1.0));
        // out-of-range probabilities are clamped
        assert!(bernoulli(&mut rng, 2.5));
        assert!(!bernoulli(&mut rng, -0.5));
    }
}

#[test]
fn pick_frequencies_track_odds() {
    let mut rng = seeded(5);
    let odds = [0.2, 0.3];
    let mut counts = [0usize; 3];
    let n = 100_000;
    for _ in 0..n {
        match pick(&mut rng, &odds) {
            Some(i) => counts[i] += 1,
            None => counts[2] += 1,
        }
    }
    let freq = counts.map(|c| c as f64 / n as f64);
    assert!((freq[0] - 0.2).abs() < 0.01, "{freq:?}");
    assert!((freq[1] - 0.3).abs() < 0.01, "{freq:?}");
    assert!((freq[2] - 0.5).abs() < 0.01, "{freq:?}");
}

#[test]
fn same_seed_same_stream() {
    let (mut a, mut b) = (seeded(99), seeded(99));
    for _ in 0..100 {
        assert_eq!(uniform01(&mut a), uniform01(&mut b));
    }
}
