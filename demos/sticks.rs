//! Stacking sticks measured with a ±0.1% tool
//!
//! The total length of one to ten sticks laid end to end. One stick is
//! uniform; two make a triangle; more approach a Gaussian while the
//! relative spread shrinks.
//!
//! Run with `RUST_LOG=uncertain_arith=debug` to see the engine at work.

use tracing_subscriber::EnvFilter;
use uncertain_dist::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let plus_minus = 0.001;
    let stick = uniform(1.0 - plus_minus, 1.0 + plus_minus, DEFAULT_SAMPLES)?;

    let mut totals = vec![stick.clone()];
    for _ in 1..10 {
        let next = add(&stick, totals.last().unwrap_or(&stick))?;
        totals.push(next);
    }

    println!("=== Stacked sticks ===");
    println!("{:>6} {:>10} {:>12} {:>10} {:>10}", "sticks", "median", "std_dev", "skewness", "kurtosis");
    for (i, total) in totals.iter().enumerate() {
        let m = moments(total)?;
        println!(
            "{:>6} {:>10.5} {:>12.3e} {:>10.4} {:>10.4}",
            i + 1,
            median(total)?,
            m.std_dev,
            m.skewness,
            m.excess_kurtosis
        );
    }

    println!("\n=== Quantiles relative to the median ===");
    let ps: Vec<f64> = (0..10).map(|i| 0.01 + 0.98 * i as f64 / 9.0).collect();
    for (i, total) in totals.iter().enumerate() {
        let med = median(total)?;
        let row: Vec<String> = quantiles(total, &ps)?
            .iter()
            .map(|q| format!("{:+.5}", q / med - 1.0))
            .collect();
        println!("{:>2} sticks: {}", i + 1, row.join(" "));
    }

    Ok(())
}
