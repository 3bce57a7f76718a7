// demos/payoff_chart.rs
// Loads a pricing scenario from a TOML file (or uses a built-in one), sweeps
// the spot grid, and renders the price/delta/PnL curves to payoff_chart.svg
// in the working directory.
//
// Usage:
//     cargo run --example payoff_chart [-- <scenario.toml>]

use std::env;

use anyhow::Result;
use optcalc::{sweep_spot, ChartConfig, CurveChart, ScenarioConfig};

const DEFAULT_SCENARIO: &str = r#"
[option]
spot = 100.0
strike = 100.0
rate = 0.05
volatility = 0.2
time_to_expiry = 1.0
option_type = "call"

[position]
premium_paid = 10.45
side = "long"

[sweep]
min_ratio = 0.6
max_ratio = 1.4
steps = 300
"#;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = if let Some(path) = args.get(1) {
        println!("Loading scenario from {}", path);
        ScenarioConfig::from_path(path)?
    } else {
        println!("No scenario file given, using the built-in ATM call scenario");
        ScenarioConfig::from_toml_str(DEFAULT_SCENARIO)?
    };

    let params = config.option_parameters()?;
    println!(
        "Sweeping {} spots in [{:.0}, {:.0}] for a {:?} struck at {:.0}",
        config.sweep.steps,
        config.sweep.min_ratio * params.strike,
        config.sweep.max_ratio * params.strike,
        params.option_type,
        params.strike
    );

    let curves = sweep_spot(
        &params,
        config.position.premium_paid,
        config.position.side,
        &config.sweep,
    )?;

    let chart = CurveChart::with_config(
        "payoff_chart.svg",
        ChartConfig {
            caption: format!(
                "{:?} K={:.0} | vol={:.0}% r={:.1}% T={:.2}y",
                params.option_type,
                params.strike,
                params.volatility * 100.0,
                params.rate * 100.0,
                params.time_to_expiry
            ),
            ..ChartConfig::default()
        },
    );
    chart.update(&curves)?;

    println!("Chart saved to payoff_chart.svg");
    Ok(())
}
