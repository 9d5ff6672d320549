//! Cross-check of the deterministic engine against seeded random sampling
//!
//! Sampling only serves as a reference here; the library itself never draws
//! random numbers.

mod common;

use common::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Distribution as _;
use rand_distr::{Normal, Triangular as TriangularDistr, Uniform as UniformDistr};
use uncertain_dist::prelude::*;

const DRAWS: usize = 200_000;

fn sample_mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

fn sample_quantile(values: &mut [f64], p: f64) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let idx = ((values.len() - 1) as f64 * p).round() as usize;
    values[idx]
}

#[test]
fn pyranometer_chain_matches_sampling() {
    // E = (DNI + offset) * S * stability + logger noise
    let offset = uniform(-3.0, 3.0, 1001).unwrap();
    let sensitivity = normal(15.0, 0.075, 3.0, 1001).unwrap();
    let stability = uniform(0.99, 1.01, 1001).unwrap();
    let logger = uniform(-10.0, 10.0, 1001).unwrap();

    let signal = multiply(&add(900.0, &offset).unwrap(), &sensitivity).unwrap();
    let signal = multiply(&signal, &stability).unwrap();
    let measured = add(&signal, &logger).unwrap();
    let (m, s) = mean_std(&measured);
    let q = quantiles_with_linear(&measured, &[0.025, 0.975]);

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let offset_d = UniformDistr::new(-3.0, 3.0);
    let sens_d = Normal::new(15.0, 0.075).unwrap();
    let stab_d = UniformDistr::new(0.99, 1.01);
    let logger_d = UniformDistr::new(-10.0, 10.0);
    let mut samples: Vec<f64> = (0..DRAWS)
        .map(|_| {
            // match the three-sigma truncation of the discretized input
            let sens = loop {
                let x: f64 = sens_d.sample(&mut rng);
                if (x - 15.0).abs() <= 3.0 * 0.075 {
                    break x;
                }
            };
            (900.0 + offset_d.sample(&mut rng)) * sens * stab_d.sample(&mut rng)
                + logger_d.sample(&mut rng)
        })
        .collect();

    let (mc_mean, mc_std) = sample_mean_std(&samples);
    assert_relative_eq!(m, mc_mean, max_relative = 1e-3);
    assert_relative_eq!(s, mc_std, max_relative = 0.02);

    let mc_lo = sample_quantile(&mut samples, 0.025);
    let mc_hi = sample_quantile(&mut samples, 0.975);
    assert_relative_eq!(q[0], mc_lo, max_relative = 2e-3);
    assert_relative_eq!(q[1], mc_hi, max_relative = 2e-3);
}

#[test]
fn asymmetric_ratio_matches_sampling() {
    let num = triangular(10.0, 11.0, 13.0, 801).unwrap();
    let den = uniform(1.5, 2.5, 801).unwrap();
    let ratio = divide(&num, &den).unwrap();
    let dm = moments(&ratio).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let num_d = TriangularDistr::new(10.0, 13.0, 11.0).unwrap();
    let den_d = UniformDistr::new(1.5, 2.5);
    let samples: Vec<f64> = (0..DRAWS)
        .map(|_| num_d.sample(&mut rng) / den_d.sample(&mut rng))
        .collect();
    let (mc_mean, mc_std) = sample_mean_std(&samples);

    assert_relative_eq!(dm.mean, mc_mean, max_relative = 5e-3);
    assert_relative_eq!(dm.std_dev, mc_std, max_relative = 0.02);
    assert!(dm.skewness > 0.0);
}

fn quantiles_with_linear(dist: &Distribution, ps: &[f64]) -> Vec<f64> {
    ps.iter()
        .map(|&p| quantile_with(dist, p, QuantileMethod::Linear).unwrap())
        .collect()
}
