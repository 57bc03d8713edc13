// tests/config.rs
use edge_balance::{BalancerSettings, Config, ConfigError};

#[test]
fn defaults_match_the_calibration_table() {
    let c = Config::default();
    assert_eq!((c.players, c.ante, c.rounds), (4, 5, 20_000));
    assert_eq!(c.target_edge, 0.05);
    assert_eq!(c.actuator(), 1.0);
    assert_eq!(c.payout("ST"), 5.0);
    assert_eq!(c.payout("RF"), 25.0);
    assert_eq!(c.payout("??"), 0.0);

    let s = BalancerSettings::default();
    assert_eq!((s.band_low, s.band_high), (0.03, 0.07));
    assert_eq!(s.learning_rate, 0.8);
    assert_eq!((s.actuator_min, s.actuator_max), (0.5, 3.0));
    assert_eq!(s.max_iterations, 8);
    assert!(s.validate().is_ok());
}

#[test]
fn set_actuator_accepts_any_value() {
    let mut c = Config::default();
    c.set_actuator(42.0);
    assert_eq!(c.bust_multiplier, 42.0);
    c.set_actuator(-1.0);
    assert_eq!(c.actuator(), -1.0);
}

#[test]
fn partial_json_fills_defaults() {
    let c = Config::from_json(r#"{ "players": 6, "bust_multiplier": 1.25 }"#).unwrap();
    assert_eq!(c.players, 6);
    assert_eq!(c.bust_multiplier, 1.25);
    assert_eq!(c.rounds, 20_000);
    assert_eq!(c.tube_initial, Config::default().tube_initial);

    let s = BalancerSettings::from_json(r#"{ "max_iterations": 20 }"#).unwrap();
    assert_eq!(s.max_iterations, 20);
    assert_eq!(s.learning_rate, 0.8);
}

#[test]
fn payout_table_can_be_replaced() {
    let c = Config::from_json(r#"{ "tube_initial": { "ST": 4.0 } }"#).unwrap();
    assert_eq!(c.payout("ST"), 4.0);
    assert_eq!(c.payout("FL"), 0.0);
}

#[test]
fn malformed_json_is_rejected() {
    let err = Config::from_json(r#"{ "players": "four" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(BalancerSettings::from_json("not json").is_err());
}

#[test]
fn json_round_trip_preserves_config() {
    let c = Config { seed: 7, target_edge: 0.04, ..Config::default() };
    let s = serde_json::to_string(&c).unwrap();
    assert_eq!(Config::from_json(&s).unwrap(), c);
}
