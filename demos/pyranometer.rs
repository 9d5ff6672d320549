//! Irradiance measured by a thermopile pyranometer
//!
//! The logger reads `V = (DNI + offset) * S * k + logger_error` in µV, with
//! `S` the calibrated sensitivity and `k` the product of the multiplicative
//! error terms from the instrument's classification sheet. The reading is
//! converted back with the nominal sensitivity.

use tracing_subscriber::EnvFilter;
use uncertain_dist::prelude::*;

const SAMPLES: usize = 2001;

fn relative(percent: f64) -> Result<Distribution> {
    uniform(1.0 - 0.01 * percent, 1.0 + 0.01 * percent, SAMPLES)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sensitivity = 15.0; // µV per W/m²
    let dni = 900.0; // W/m²

    let calibration = normal(1.0, 0.5 * 0.01, 3.0, SAMPLES)?;
    let logger = uniform(-10.0, 10.0, SAMPLES)?;
    let zero_offset = uniform(-3.0, 3.0, SAMPLES)?;

    let factors = vec![
        calibration,
        relative(1.0)?, // non-stability
        relative(0.5)?, // non-linearity
        relative(2.0)?, // temperature response
        relative(0.5)?, // tilt response
        relative(1.0)?, // maintenance
    ];
    let k = product_all(&factors)?;
    println!("Combined sensitivity factor: {}", moments(&k)?);

    let ideal = scale(&add(dni, &zero_offset)?, sensitivity)?;
    let reading = add(&multiply(&ideal, &k)?, &logger)?;
    let irradiance = scale(&reading, 1.0 / sensitivity)?;

    let ci = coverage_interval(&irradiance, 0.95)?;
    println!("{ci}");
    if let (Some(lo), Some(hi)) = (ci.relative_lower(), ci.relative_upper()) {
        println!("Rel Error for 0.950 confidence: -{:.2}% + {:.2}%", 100.0 * lo, 100.0 * hi);
    }
    let (mean, _) = mean_and_std_dev(&irradiance)?;
    println!("Bias: {:.2} W/m^2 = {:.2}%", mean - dni, 100.0 * (mean / dni - 1.0));

    let smooth = quantile_with(&irradiance, 0.975, QuantileMethod::Linear)?;
    println!("Upper 97.5% (interpolated): {smooth:.2} W/m^2");

    Ok(())
}
