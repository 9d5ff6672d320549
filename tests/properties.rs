//! Behavioural properties of construction, combination and queries

mod common;

use common::*;
use proptest::prelude::*;
use uncertain_dist::prelude::*;

#[test]
fn constructors_produce_normalized_arrays() {
    let dists = [
        uniform(6.0, 7.0, 1001).unwrap(),
        normal(1.0, 0.01, 5.0, 1001).unwrap(),
        triangular(10.0, 11.0, 13.0, 1001).unwrap(),
    ];
    for dist in &dists {
        assert_eq!(dist.len(), 1001);
        assert_eq!(dist.centers().len(), dist.weights().len());
        assert_relative_eq!(dist.total_mass(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn uniform_unit_interval_moments() {
    let (m, s) = mean_std(&uniform(0.0, 1.0, 1000).unwrap());
    assert_relative_eq!(m, 0.5, max_relative = 0.01);
    assert_relative_eq!(s, 1.0 / 12.0_f64.sqrt(), max_relative = 0.01);
}

#[test]
fn standard_normal_moments() {
    let (m, s) = mean_std(&normal(0.0, 1.0, 5.0, 2001).unwrap());
    assert!(m.abs() < 0.01);
    assert_relative_eq!(s, 1.0, max_relative = 0.01);
}

#[test]
fn asymmetric_triangular_peak() {
    let dist = triangular(10.0, 11.0, 13.0, 1001).unwrap();
    let p = peak(&dist);
    assert!((p - 11.0).abs() < (p - 12.0).abs());
}

#[test]
fn addition_is_commutative() {
    let a = normal(2.0, 0.3, 4.0, 301).unwrap();
    let b = triangular(-1.0, 0.5, 1.0, 201).unwrap();
    let ab = combine(&a, &b, BinaryOp::Add, 202).unwrap();
    let ba = combine(&b, &a, BinaryOp::Add, 202).unwrap();

    assert_eq!(ab.centers(), ba.centers());
    for (x, y) in ab.weights().iter().zip(ba.weights()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12);
    }
    let (m1, s1) = mean_std(&ab);
    let (m2, s2) = mean_std(&ba);
    assert_relative_eq!(m1, m2, epsilon = 1e-12);
    assert_relative_eq!(s1, s2, epsilon = 1e-12);
}

#[test]
fn sum_of_two_unit_uniforms_is_triangular() {
    let u = uniform(0.0, 1.0, 200).unwrap();
    let sum = combine(&u, &u, BinaryOp::Add, 201).unwrap();

    let (m, s) = mean_std(&sum);
    assert_relative_eq!(m, 1.0, epsilon = 1e-2);
    assert_relative_eq!(s, (2.0_f64 / 12.0).sqrt(), max_relative = 0.02);
    assert!((peak(&sum) - 1.0).abs() < 0.02);

    // triangular CDF on [0, 2] peaked at 1
    for (x, expected) in [(0.5, 0.125), (1.0, 0.5), (1.5, 0.875)] {
        let got = cdf(&sum, x).unwrap();
        assert!((got - expected).abs() < 0.015, "cdf({x}) = {got}, expected {expected}");
    }
}

#[test]
fn repeated_self_addition_approaches_gaussian() {
    let stick = uniform(0.999, 1.001, 501).unwrap();
    let kurtosis: Vec<f64> = repeated_sums(&stick, 10)
        .iter()
        .map(|d| moments(d).unwrap().excess_kurtosis)
        .collect();
    assert_relative_eq!(kurtosis[0], -1.2, epsilon = 1e-2);
    for pair in kurtosis.windows(2) {
        assert!(pair[1].abs() < pair[0].abs(), "kurtosis sequence {kurtosis:?}");
    }
    assert!(kurtosis[9].abs() < 0.15);

    let skewed = triangular(10.0, 11.0, 13.0, 501).unwrap();
    let skews: Vec<f64> = repeated_sums(&skewed, 10).iter().map(skewness).collect();
    assert!(skews[0] > 0.25);
    for pair in skews.windows(2) {
        assert!(pair[1] < pair[0], "skewness sequence {skews:?}");
        assert!(pair[1] > 0.0);
    }
}

#[test]
fn shift_round_trip_is_exact_on_dyadic_grid() {
    let a = uniform(0.0, 1.0, 256).unwrap();
    let back = shift(&shift(&a, 2.5).unwrap(), -2.5).unwrap();
    assert_eq!(back.centers(), a.centers());
    assert_eq!(back.weights(), a.weights());
}

#[test]
fn quantiles_stay_in_support_and_are_monotone() {
    let dists = [
        uniform(-3.0, 5.0, 101).unwrap(),
        normal(10.0, 2.0, 3.0, 501).unwrap(),
        triangular(0.0, 0.1, 1.0, 77).unwrap(),
    ];
    for dist in &dists {
        let (lo, hi) = dist.support().unwrap();
        let qs = quantiles(dist, &[0.0, 0.5, 1.0]).unwrap();
        assert!(qs.iter().all(|&q| q >= lo && q <= hi));
        assert!(qs.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn unsampled_operand_is_rejected() {
    let a = uniform(0.0, 1.0, 10).unwrap();
    let empty = Distribution::unsampled();
    assert!(matches!(
        combine(&a, &empty, BinaryOp::Add, 11),
        Err(Error::UnsampledDistribution { operand: Side::Right })
    ));
    assert!(matches!(
        combine(&empty, &a, BinaryOp::Divide, 11),
        Err(Error::UnsampledDistribution { operand: Side::Left })
    ));
}

proptest! {
    #[test]
    fn prop_constructor_mass(left in -1e3f64..1e3, width in 1e-3f64..1e3, n in 1usize..500) {
        let dist = uniform(left, left + width, n).unwrap();
        prop_assert_eq!(dist.len(), n);
        prop_assert!((dist.total_mass() - 1.0).abs() < 1e-9);
        prop_assert!(dist.is_ascending());
    }

    #[test]
    fn prop_shift_round_trip(k in -1e3f64..1e3, left in -10.0f64..10.0) {
        let a = normal(left, 0.5, 4.0, 101).unwrap();
        let back = shift(&shift(&a, k).unwrap(), -k).unwrap();
        for (x, y) in a.centers().iter().zip(back.centers()) {
            prop_assert!((x - y).abs() <= 1e-9 * k.abs().max(1.0));
        }
    }

    #[test]
    fn prop_quantiles_monotone(ps in proptest::collection::vec(0.0f64..=1.0, 1..20)) {
        let dist = triangular(1.0, 1.2, 2.0, 301).unwrap();
        let mut sorted = ps.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let qs = quantiles(&dist, &sorted).unwrap();
        prop_assert!(qs.windows(2).all(|w| w[0] <= w[1]));
    }
}
