#![cfg(feature = "serde")]

use optcalc::{payoff, price, sweep_spot, OptionType, PositionSide, ScenarioConfig};

const SCENARIO: &str = r#"
[option]
spot = 100.0
strike = 100.0
rate = 0.05
volatility = 0.2
time_to_expiry = 1.0
option_type = "call"

[position]
premium_paid = 5.0
side = "long"

[sweep]
min_ratio = 0.8
max_ratio = 1.2
steps = 81
"#;

/// Full boundary flow: parse TOML, validate, and run all three engine
/// operations plus a sweep from the typed values.
#[test]
fn test_scenario_round_trip() {
    let config = ScenarioConfig::from_toml_str(SCENARIO).expect("scenario should parse");

    let params = config.option_parameters().expect("option should validate");
    assert_eq!(params.option_type, OptionType::Call);
    assert!((price(&params) - 10.4506).abs() < 1e-3);

    let position = config.position_at(110.0).expect("position should validate");
    assert_eq!(position.side, PositionSide::Long);
    assert_eq!(payoff(&position), 5.0);

    let curves = sweep_spot(
        &params,
        config.position.premium_paid,
        config.position.side,
        &config.sweep,
    )
    .unwrap();
    assert_eq!(curves.len(), 81);
    assert!((curves.spots[0] - 80.0).abs() < 1e-9);
}

/// Omitted sections fall back to defaults (flat long position, default grid).
#[test]
fn test_scenario_defaults() {
    let config = ScenarioConfig::from_toml_str(
        r#"
        [option]
        spot = 50.0
        strike = 55.0
        volatility = 0.3
        time_to_expiry = 0.25
        option_type = "put"
        "#,
    )
    .expect("minimal scenario should parse");

    assert_eq!(config.option.rate, 0.0);
    assert_eq!(config.position.premium_paid, 0.0);
    assert_eq!(config.position.side, PositionSide::Long);
    assert_eq!(config.sweep.steps, 200);
    assert!(config.option_parameters().is_ok());
}

/// Out-of-domain values parse but are rejected at validation, never passed
/// through to the engine as NaN.
#[test]
fn test_scenario_rejects_bad_domain() {
    let config = ScenarioConfig::from_toml_str(
        r#"
        [option]
        spot = 100.0
        strike = -100.0
        volatility = 0.2
        time_to_expiry = 1.0
        option_type = "call"
        "#,
    )
    .expect("TOML itself is well-formed");

    assert!(config.option_parameters().is_err());
}

/// Malformed TOML and unknown option types fail at parse time.
#[test]
fn test_scenario_parse_errors() {
    assert!(ScenarioConfig::from_toml_str("not toml at all [").is_err());

    let unknown_type = r#"
        [option]
        spot = 100.0
        strike = 100.0
        volatility = 0.2
        time_to_expiry = 1.0
        option_type = "straddle"
    "#;
    assert!(ScenarioConfig::from_toml_str(unknown_type).is_err());
}
