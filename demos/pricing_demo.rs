// demos/pricing_demo.rs

//! Demonstration of the Black-Scholes engine
//!
//! This example shows how to:
//! 1. Build validated option parameters
//! 2. Price a call and a put and verify put-call parity
//! 3. Compute the five standard Greeks
//! 4. Evaluate position PnL at a few settlement spots

use anyhow::Result;
use optcalc::{
    greeks, payoff, price, OptionParameters, OptionType, PositionPayoff, PositionSide,
};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let spot = 100.0;
    let strike = 100.0;
    let rate = 0.05;
    let vol = 0.2;
    let tte = 1.0;

    println!("Spot: ${:.2}  Strike: ${:.2}", spot, strike);
    println!(
        "Rate: {:.1}%  Vol: {:.1}%  Expiry: {:.2}y",
        rate * 100.0,
        vol * 100.0,
        tte
    );

    println!("\nStep 1: Pricing...");

    let call = OptionParameters::new(spot, strike, rate, vol, tte, OptionType::Call)?;
    let put = OptionParameters::new(spot, strike, rate, vol, tte, OptionType::Put)?;

    let call_price = price(&call);
    let put_price = price(&put);

    println!("  Call price: ${:.4}", call_price);
    println!("  Put price:  ${:.4}", put_price);

    let parity = call_price - put_price - (spot - strike * (-rate * tte).exp());
    println!("  Put-call parity residual: {:.2e}", parity);

    println!("\nStep 2: Greeks...");
    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Type", "Delta", "Gamma", "Vega", "Theta/yr", "Rho"
    );
    println!("{}", "-".repeat(60));
    for (label, params) in [("call", &call), ("put", &put)] {
        let g = greeks(params);
        println!(
            "{:<6} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            label, g.delta, g.gamma, g.vega, g.theta, g.rho
        );
    }

    println!("\nStep 3: PnL at expiry (long call bought for ${:.2})...", call_price);
    println!("{:<12} {:>10}", "Settlement", "PnL");
    println!("{}", "-".repeat(24));
    for settlement in [80.0, 90.0, 100.0, 110.0, 120.0, 130.0] {
        let position = PositionPayoff::new(
            settlement,
            strike,
            call_price,
            OptionType::Call,
            PositionSide::Long,
        )?;
        println!("{:<12.0} {:>10.4}", settlement, payoff(&position));
    }

    Ok(())
}
