//! Shared helpers for integration tests

#![allow(dead_code)]

use uncertain_dist::Distribution;

pub use approx::assert_relative_eq;

/// Weighted mean and standard deviation
pub fn mean_std(dist: &Distribution) -> (f64, f64) {
    uncertain_dist::mean_and_std_dev(dist).expect("sampled distribution")
}

/// Skewness of the weight histogram
pub fn skewness(dist: &Distribution) -> f64 {
    uncertain_dist::moments(dist).expect("sampled distribution").skewness
}

/// Center of the heaviest bin
pub fn peak(dist: &Distribution) -> f64 {
    uncertain_dist::stats::mode(dist).expect("sampled distribution")
}

/// Self-sums `d, d+d, d+d+d, ...` up to `n` terms
pub fn repeated_sums(single: &Distribution, n: usize) -> Vec<Distribution> {
    let mut sums = vec![single.clone()];
    for _ in 1..n {
        let next = uncertain_dist::add(single, sums.last().expect("non-empty")).expect("sum");
        sums.push(next);
    }
    sums
}
