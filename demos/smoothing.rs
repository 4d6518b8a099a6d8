//! Smoothing engines example.
//!
//! Run with: RUST_LOG=tsmooth=debug cargo run --example smoothing

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tsmooth::prelude::*;

fn rmse(residuals: &[f64]) -> f64 {
    (residuals.iter().map(|e| e * e).sum::<f64>() / residuals.len() as f64).sqrt()
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tsmooth=info".into()),
        )
        .init();

    println!("=== Smoothing Engines Example ===\n");

    // Three years of quarterly observations with growth and a seasonal profile.
    let data = [
        41.2, 57.0, 69.8, 45.1, 46.0, 63.9, 76.4, 50.2, 51.3, 70.4, 84.5, 55.0,
    ];
    let values = &data[..];
    println!("Data: {} observations (3 seasons of period 4)\n", values.len());

    println!("--- Moving Average (window 4) ---");
    for (i, v) in moving_average(values, 4)?.iter().enumerate() {
        match v {
            Some(v) => println!("  t={:>2}: {:.3}", i, v),
            None => println!("  t={:>2}: -", i),
        }
    }

    println!("\n--- Simple Exponential Smoothing (default alpha) ---");
    let ses = simple_exponential_smoothing(values, None)?;
    println!("alpha = {:.4} ({:?})", ses.alpha(), ses.alpha_source());
    println!("seed level = {:.3}", ses.levels()[0]);
    println!("final level = {:.3}", ses.levels()[values.len()]);

    println!("\n--- Holt's Linear Trend ---");
    let holt_fit = HoltLinearTrend::new(0.4, 0.2).smooth(values)?;
    let seed = holt_fit.seed();
    println!(
        "seed: intercept = {:.3}, slope = {:.3}",
        seed.intercept, seed.slope
    );
    for (h, f) in holt_fit.forecast(4).iter().enumerate() {
        println!("  h={}: {:.3}", h + 1, f);
    }

    println!("\n--- Holt-Winters (period 4) ---");
    let hw = HoltWinters::new(4, 0.3, 0.1, 0.2)
        .with_policy(ParameterPolicy::Strict)
        .smooth(values)?;
    println!("initial seasonal indices: {:.3?}", hw.initial_seasonals());
    println!("final seasonal indices:   {:.3?}", hw.final_seasonals());
    for (h, f) in hw.forecast(4).iter().enumerate() {
        println!("  h={}: {:.3}", h + 1, f);
    }

    println!("\n--- In-sample accuracy ---");
    println!("  Holt-Winters RMSE: {:.3}", rmse(hw.residuals()));
    println!("  Holt RMSE:         {:.3}", rmse(holt_fit.residuals()));
    println!("  SES RMSE:          {:.3}", rmse(ses.residuals()));

    Ok(())
}
