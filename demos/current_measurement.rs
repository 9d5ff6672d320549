//! Current through a shunt resistor read by a voltmeter
//!
//! ```text
//! I = (U + noise) * gain / (R * (1 + 0.01 * tc * dT))
//! ```
//!
//! - R: 1 Ω ±0.5%, temperature coefficient 0.03 %/K ±0.001
//! - temperature known to ±0.5 K around 25 °C
//! - voltmeter noise σ = 10 mV, gain accurate to ±0.1%

use tracing_subscriber::EnvFilter;
use uncertain_dist::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let resistance = uniform(0.995, 1.005, DEFAULT_SAMPLES)?;
    let tc = uniform(0.03 - 0.001, 0.03 + 0.001, DEFAULT_SAMPLES)?;
    let delta_t = shift(&uniform(24.5, 25.5, DEFAULT_SAMPLES)?, -25.0)?;
    let noise = normal(0.0, 0.01, 5.0, DEFAULT_SAMPLES)?;
    let gain = uniform(0.999, 1.001, DEFAULT_SAMPLES)?;

    let actual_current = 10.0;
    let perfect_voltage = 1.0 * actual_current;

    let voltage = multiply(&add(perfect_voltage, &noise)?, &gain)?;
    let drift = add(1.0, &scale(&multiply(&tc, &delta_t)?, 0.01)?)?;
    let r_total = multiply(&resistance, &drift)?;
    let current = divide(&voltage, &r_total)?;

    let (mean, std_dev) = mean_and_std_dev(&current)?;
    println!("Current: {} (std_dev {std_dev:.5} A)", current);

    for level in [0.95, 0.99, 0.999] {
        let ci = coverage_interval(&current, level)?;
        if let (Some(lo), Some(hi)) = (ci.relative_lower(), ci.relative_upper()) {
            println!(
                "  Rel Error for {level:.3} confidence: -{:.4}% + {:.4}%",
                100.0 * lo,
                100.0 * hi
            );
        }
    }
    println!(
        "General Bias: {:.5} A = {:.4}% of nominal",
        mean - actual_current,
        100.0 * (mean / actual_current - 1.0)
    );

    Ok(())
}
