extern crate statistical;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::*;
use statistical::distribution::create;
use statistical::prelude::*;
use statrs::statistics::Statistics;

#[rstest]
#[case::uniform("uniform", &[-2.0, 5.0])]
#[case::exponential("exponential", &[0.7])]
#[case::laplace("laplace", &[2.0, -1.0])]
#[case::weibull("weibull", &[3.0, 0.8])]
#[case::normal("normal", &[100.0, 15.0])]
#[case::gumbel("gumbel", &[-3.0, 0.5])]
#[case::frechet("frechet", &[2.5, 1.0, 4.0])]
fn cdf_inverts_quantile(#[case] kind: &str, #[case] params: &[f64]) {
    crate::init_logger();
    let dist = create(kind, params).unwrap();
    for i in 1..100 {
        let p = f64::from(i) / 100.0;
        let x = dist.quantile(p).unwrap();
        assert_abs_diff_eq!(dist.cdf(x), p, epsilon = 1e-12);
        assert_eq!(dist.p_value(p).unwrap(), x);
        if let Some(domain) = dist.domain() {
            assert!(domain.contains(x), "{dist}: {x} not in {domain}");
        }
    }
}

/// Composite Simpson rule over `[a, b]` with `n` (even) sub-intervals.
fn simpson(f: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> f64 {
    let h = (b - a) / n as f64;
    let inner: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(a + i as f64 * h)
        })
        .sum();
    (f(a) + inner + f(b)) * h / 3.0
}

#[rstest]
#[case::uniform("uniform", &[-2.0, 5.0])]
#[case::exponential("exponential", &[0.7])]
#[case::laplace("laplace", &[2.0, -1.0])]
#[case::weibull_rayleigh("weibull", &[3.0, 2.0])]
#[case::weibull_exponential("weibull", &[1.0, 1.0])]
#[case::weibull_peaked("weibull", &[2.0, 5.0])]
#[case::normal("normal", &[100.0, 15.0])]
#[case::gumbel("gumbel", &[-3.0, 0.5])]
#[case::frechet("frechet", &[5.0, 0.0, 1.0])]
fn density_integrates_to_one(#[case] kind: &str, #[case] params: &[f64]) {
    let dist = create(kind, params).unwrap();
    // Truncated to the central 1 - 2e-9 of the mass
    let lower = dist.quantile(1e-9).unwrap();
    let upper = dist.quantile(1.0 - 1e-9).unwrap();
    assert!(lower.is_finite() && upper.is_finite());
    let mass = simpson(|x| dist.pdf(x), lower, upper, 200_000);
    assert_abs_diff_eq!(mass, 1.0, epsilon = 1e-6);
}

#[test]
fn mass_sums_to_one() {
    let ud = UniformDiscrete::new(&[7.5, 1.0, 2.0, 2.0, 3.0, -4.0]).unwrap();
    let mut distinct = ud.support().to_vec();
    distinct.dedup();
    assert_eq!(distinct.len(), 5);
    assert_relative_eq!(distinct.iter().map(|x| ud.pdf(*x)).sum::<f64>(), 1.0);

    let ud = UniformDiscrete::from_range(1..=6).unwrap();
    assert_relative_eq!(ud.support().iter().map(|x| ud.pdf(*x)).sum::<f64>(), 1.0);

    let tp = TwoPoint::new(0.3, -1.0, 4.0).unwrap();
    assert_relative_eq!(tp.support().iter().map(|x| tp.pdf(*x)).sum::<f64>(), 1.0);

    let bernoulli = Bernoulli::new(0.8).unwrap();
    assert_relative_eq!(
        bernoulli.support().iter().map(|x| bernoulli.pdf(*x)).sum::<f64>(),
        1.0
    );
}

#[rstest]
#[case::uniform("uniform", &[-2.0, 5.0])]
#[case::exponential("exponential", &[0.7])]
#[case::laplace("laplace", &[2.0, -1.0])]
#[case::weibull_singular("weibull", &[1.0, 0.5])]
#[case::weibull_rayleigh("weibull", &[1.0, 2.0])]
#[case::normal("normal", &[100.0, 15.0])]
#[case::gumbel("gumbel", &[0.0, 1.0])]
#[case::frechet("frechet", &[2.5, 1.0, 4.0])]
fn infinite_arguments(#[case] kind: &str, #[case] params: &[f64]) {
    let dist = create(kind, params).unwrap();
    assert_eq!(dist.pdf(f64::NEG_INFINITY), 0.0, "{dist}");
    assert_eq!(dist.pdf(f64::INFINITY), 0.0, "{dist}");
    assert_eq!(dist.cdf(f64::NEG_INFINITY), 0.0, "{dist}");
    assert_eq!(dist.cdf(f64::INFINITY), 1.0, "{dist}");
}

#[rstest]
#[case::uniform("uniform", &[])]
#[case::uniform_discrete("uniform_discrete", &[1.0, 2.0, 3.0])]
#[case::two_point("two_point", &[])]
#[case::bernoulli("bernoulli", &[])]
#[case::exponential("exponential", &[])]
#[case::laplace("laplace", &[])]
#[case::weibull("weibull", &[])]
#[case::normal("normal", &[])]
#[case::gumbel("gumbel", &[])]
#[case::frechet("frechet", &[1.5])]
fn quantile_range(#[case] kind: &str, #[case] params: &[f64]) {
    let dist = create(kind, params).unwrap();
    for p in [-0.1, -f64::EPSILON, 1.0 + f64::EPSILON, 2.0, f64::NAN] {
        let err = dist.quantile(p).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeViolation, "{dist} at {p}");
        assert_eq!(dist.p_value(p).unwrap_err().kind(), ErrorKind::RangeViolation);
    }
    assert!(dist.quantile(0.0).is_ok());
    assert!(dist.quantile(1.0).is_ok());
}

#[test]
fn two_point_construction() {
    for (failure, success) in [(15.0, 10.0), (10.0, 10.0)] {
        let err = TwoPoint::new(0.6, failure, success).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    let tp = TwoPoint::new(0.6, 10.0, 15.0).unwrap();
    assert_eq!(tp.mean(), 10.0 + 0.6 * (15.0 - 10.0));
    assert_eq!(tp.mean(), 13.0);
}

#[test]
fn uniform_discrete_end_to_end() {
    let elements: Vec<f64> = (1..=10).map(f64::from).collect();
    let ud = UniformDiscrete::new(&elements).unwrap();
    assert_eq!(ud.mean(), 5.5);
    assert_relative_eq!(ud.variance(), 8.25, max_relative = 1e-14);
    assert_relative_eq!(ud.variance(), elements.iter().population_variance());
    assert_eq!(ud.pdf(5.0), 0.1);
    assert_eq!(ud.pdf(0.0), 0.0);
    assert_eq!(ud.cdf(10.5), 1.0);
    assert_eq!(ud.cdf(0.5), 0.0);

    // Away from the support elements, the quantile of the CDF floors the argument
    for i in 10..100 {
        let x = f64::from(i) / 10.0 + 0.05;
        assert_eq!(ud.quantile(ud.cdf(x)).unwrap(), x.floor(), "x = {x}");
    }
}

#[test]
fn unit_exponential() {
    let exp = Exponential::new(1.0).unwrap();
    for i in 0..=50 {
        let x = f64::from(i) * 0.2;
        assert_relative_eq!(exp.pdf(x), (-x).exp(), max_relative = 1e-15);
    }
    for i in 0..100 {
        let p = f64::from(i) / 100.0;
        assert_relative_eq!(exp.quantile(p).unwrap(), -(1.0 - p).ln(), max_relative = 1e-14);
    }

    let weibull = Weibull::new(1.0, 1.0).unwrap();
    for x in [0.0, 0.5, 2.0] {
        assert_relative_eq!(weibull.pdf(x), exp.pdf(x));
        assert_relative_eq!(weibull.cdf(x), exp.cdf(x));
    }
}

#[test]
fn normal_boundaries() {
    let normal = Normal::new(-4.0, 3.0).unwrap();
    assert_eq!(normal.quantile(0.0).unwrap(), f64::NEG_INFINITY);
    assert_eq!(normal.quantile(1.0).unwrap(), f64::INFINITY);
    assert_eq!(normal.quantile(0.5).unwrap(), -4.0);
    assert_eq!(normal.cdf(f64::NEG_INFINITY), 0.0);
    assert_eq!(normal.cdf(f64::INFINITY), 1.0);
    assert_eq!(normal.pdf(f64::INFINITY), 0.0);
}

#[test]
fn heavy_tailed_moments() {
    let light = Frechet::new(4.0, 0.0, 1.0).unwrap();
    assert!(light.mean().is_finite() && light.variance().is_finite());
    let medium = Frechet::new(1.5, 0.0, 1.0).unwrap();
    assert!(medium.mean().is_finite());
    assert_eq!(medium.variance(), f64::INFINITY);
    let heavy = Frechet::new(0.9, 0.0, 1.0).unwrap();
    assert_eq!(heavy.mean(), f64::INFINITY);
    assert_eq!(heavy.variance(), f64::INFINITY);
}
