use optcalc::{
    greeks, payoff, price, sweep_spot, CurveChart, OptionParameters, OptionType, PositionPayoff,
    PositionSide, SweepConfig,
};

fn call_params() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call)
        .expect("valid parameters")
}

/// Grid shape: requested number of points, ascending spots, endpoints at the
/// configured ratios of the strike.
#[test]
fn test_sweep_grid_shape() {
    let config = SweepConfig {
        min_ratio: 0.5,
        max_ratio: 1.5,
        steps: 101,
    };
    let curves = sweep_spot(&call_params(), 5.0, PositionSide::Long, &config).unwrap();

    assert_eq!(curves.len(), 101);
    assert_eq!(curves.prices.len(), 101);
    assert_eq!(curves.deltas.len(), 101);
    assert_eq!(curves.pnls.len(), 101);

    assert!((curves.spots[0] - 50.0).abs() < 1e-9);
    assert!((curves.spots[100] - 150.0).abs() < 1e-9);
    assert!(
        curves.spots.windows(2).all(|w| w[1] > w[0]),
        "Spots should be strictly ascending"
    );
}

/// Every sweep point must agree with a direct call into the engine.
#[test]
fn test_sweep_matches_direct_calls() {
    let params = call_params();
    let config = SweepConfig::coarse();
    let curves = sweep_spot(&params, 5.0, PositionSide::Short, &config).unwrap();

    for i in 0..curves.len() {
        let spot = curves.spots[i];
        let point = params.at_spot(spot);
        let position =
            PositionPayoff::new(spot, 100.0, 5.0, OptionType::Call, PositionSide::Short).unwrap();

        assert_eq!(curves.prices[i], price(&point), "price mismatch at {}", spot);
        assert_eq!(
            curves.deltas[i],
            greeks(&point).delta,
            "delta mismatch at {}",
            spot
        );
        assert_eq!(curves.pnls[i], payoff(&position), "pnl mismatch at {}", spot);
    }
}

/// Long-call PnL at expiry: flat -premium below the strike, then rising one
/// for one with spot; breakeven at strike + premium.
#[test]
fn test_sweep_pnl_shape() {
    let config = SweepConfig {
        min_ratio: 0.5,
        max_ratio: 1.5,
        steps: 201,
    };
    let curves = sweep_spot(&call_params(), 5.0, PositionSide::Long, &config).unwrap();

    for (spot, pnl) in curves.spots.iter().zip(curves.pnls.iter()) {
        let expected = (spot - 100.0).max(0.0) - 5.0;
        assert!(
            (pnl - expected).abs() < 1e-12,
            "PnL at S={} should be {}, got {}",
            spot,
            expected,
            pnl
        );
    }
}

/// Invalid grids and out-of-domain inputs are rejected.
#[test]
fn test_sweep_validation() {
    let params = call_params();

    let bad_steps = SweepConfig {
        steps: 1,
        ..SweepConfig::default()
    };
    assert!(sweep_spot(&params, 5.0, PositionSide::Long, &bad_steps).is_err());

    let inverted = SweepConfig {
        min_ratio: 1.5,
        max_ratio: 0.5,
        steps: 100,
    };
    assert!(sweep_spot(&params, 5.0, PositionSide::Long, &inverted).is_err());

    assert!(sweep_spot(&params, -5.0, PositionSide::Long, &SweepConfig::default()).is_err());
    assert!(
        sweep_spot(&params, f64::NAN, PositionSide::Long, &SweepConfig::default()).is_err()
    );
}

/// Chart update writes a non-empty SVG and can be re-rendered in place.
#[test]
fn test_chart_update_writes_svg() {
    let params = call_params();
    let curves = sweep_spot(&params, 5.0, PositionSide::Long, &SweepConfig::coarse()).unwrap();

    let path = std::env::temp_dir().join("optcalc_test_curves.svg");
    let chart = CurveChart::new(&path);

    chart.update(&curves).expect("first render should succeed");
    let first_len = std::fs::metadata(&path).unwrap().len();
    assert!(first_len > 0, "Rendered SVG should not be empty");

    // Second update replaces the output rather than appending to it
    let recomputed = sweep_spot(&params, 8.0, PositionSide::Short, &SweepConfig::coarse()).unwrap();
    chart.update(&recomputed).expect("re-render should succeed");
    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    std::fs::remove_file(&path).ok();
}

/// Empty curves cannot be rendered.
#[test]
fn test_chart_rejects_empty_curves() {
    let path = std::env::temp_dir().join("optcalc_test_empty.svg");
    let chart = CurveChart::new(&path);
    assert!(chart.update(&Default::default()).is_err());
}
