extern crate statistical;

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand_distr::Distribution as _;
use rand_pcg::Pcg64Mcg;
use rstest::*;
use statistical::prelude::*;
use statrs::statistics::Statistics;

const DRAWS: usize = 100_000;

#[fixture]
fn seed() -> u64 {
    crate::init_logger();
    20_181_107
}

/// Checks the sample mean against the distribution mean, with a tolerance of five standard errors.
fn check_moments(mut rng: Box<dyn VariateGenerator>) {
    let draws: Vec<f64> = (0..DRAWS).map(|_| rng.rand()).collect();
    let dist = rng.distribution();
    let std_err = (dist.variance() / DRAWS as f64).sqrt();
    assert_abs_diff_eq!(draws.iter().mean(), dist.mean(), epsilon = 5.0 * std_err);
    let var_rel = (draws.iter().variance() - dist.variance()).abs() / dist.variance();
    assert!(var_rel < 0.05, "{dist}: sample variance off by {var_rel}");
}

#[rstest]
#[case::uniform("uniform", &[-1.0, 3.0])]
#[case::uniform_discrete("uniform_discrete", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])]
#[case::two_point("two_point", &[0.6, 10.0, 15.0])]
#[case::bernoulli("bernoulli", &[0.1])]
#[case::exponential("exponential", &[0.5])]
#[case::laplace("laplace", &[1.5, 2.0])]
#[case::weibull("weibull", &[2.0, 3.0])]
#[case::normal("normal", &[-5.0, 0.25])]
#[case::gumbel("gumbel", &[1.0, 2.0])]
#[case::frechet("frechet", &[10.0, 0.0, 1.0])]
fn sample_moments(seed: u64, #[case] kind: &str, #[case] params: &[f64]) {
    let dist = statistical::distribution::create(kind, params).unwrap();
    let rng = statistical::rng::create(kind, Some(dist.as_ref()), Some(seed)).unwrap();
    check_moments(rng);
}

#[rstest]
fn composes_with_rand(seed: u64) {
    let mut source = Pcg64Mcg::seed_from_u64(seed);
    let normal = Normal::new(1.0, 0.5).unwrap();
    let draws: Vec<f64> = normal.sample_iter(&mut source).take(DRAWS).collect();
    assert_abs_diff_eq!(draws.iter().mean(), 1.0, epsilon = 0.01);
    assert_abs_diff_eq!(draws.iter().variance(), 0.25, epsilon = 0.01);

    let gumbel = Gumbel::new(0.0, 1.0).unwrap();
    let draws: Vec<f64> = (0..DRAWS).map(|_| gumbel.sample(&mut source)).collect();
    assert_abs_diff_eq!(draws.iter().mean(), gumbel.mean(), epsilon = 0.02);
}

#[rstest]
fn normal_sampler_tails(seed: u64) {
    let draws: Vec<f64> = NormalRng::new(None, Some(seed)).unwrap().take(DRAWS).collect();
    let normal = Normal::standard();
    for z in [-2.0, -1.0, 0.0, 0.5, 1.96] {
        let below = draws.iter().filter(|x| **x <= z).count() as f64 / DRAWS as f64;
        assert_abs_diff_eq!(below, normal.cdf(z), epsilon = 0.008);
    }
}
