extern crate statistical;

use rstest::*;
use statistical::prelude::*;
use statistical::{distribution, rng};

#[rstest]
#[case::uniform("uniform", &[3.0, -3.0])]
#[case::uniform_discrete("uniform_discrete", &[2.0, 3.0, 5.0, 7.0, 11.0])]
#[case::two_point("two_point", &[0.3, -1.0, 1.0])]
#[case::bernoulli("bernoulli", &[0.7])]
#[case::exponential("exponential", &[3.0])]
#[case::laplace("laplace", &[1.0, 1.0])]
#[case::weibull("weibull", &[1.0, 2.0])]
#[case::normal("normal", &[0.0, 2.0])]
#[case::gumbel("gumbel", &[0.0, 2.0])]
#[case::frechet("frechet", &[3.0])]
fn same_seed_same_draws(#[case] kind: &str, #[case] params: &[f64], #[values(0, 1, 42, u64::MAX)] seed: u64) {
    crate::init_logger();
    let dist = distribution::create(kind, params).unwrap();
    let mut a = rng::create(kind, Some(dist.as_ref()), Some(seed)).unwrap();
    let mut b = rng::create(kind, Some(dist.as_ref()), Some(seed)).unwrap();
    assert!(*a == *b);
    for _ in 0..50 {
        assert_eq!(a.rand(), b.rand());
    }
    assert!(*a == *b);
    assert_eq!(a.seed(), seed);
    assert!(*a.distribution() == *dist);
    assert_eq!(a.type_name(), dist.type_name());
}

#[test]
fn typed_and_registry_generators_agree() {
    let dist = TwoPoint::new(0.25, 4.0, 8.0).unwrap();
    let typed: Vec<f64> = TwoPointRng::new(Some(dist), Some(77)).unwrap().take(20).collect();
    let mut dynamic = rng::create("two_point", Some(&dist), Some(77)).unwrap();
    let registry: Vec<f64> = (0..20).map(|_| dynamic.rand()).collect();
    assert_eq!(typed, registry);
}

#[test]
fn generators_only_bind_their_family() {
    let normal = Normal::standard();
    for kind in ["uniform", "gumbel", "laplace", "frechet"] {
        let err = rng::create(kind, Some(&normal), Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch, "{kind}");
    }

    let bernoulli = Bernoulli::new(0.5).unwrap();
    let err = rng::create("two_point", Some(&bernoulli), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    // A Bernoulli is a two point distribution once converted
    let two_point = TwoPoint::from(bernoulli);
    assert!(rng::create("two_point", Some(&two_point), None).is_ok());
}

#[test]
fn missing_defaults() {
    for kind in ["frechet", "uniform_discrete"] {
        let err = rng::create(kind, None, Some(3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    let mut rng = rng::create("weibull", None, Some(3)).unwrap();
    assert!(rng.rand() >= 0.0);
}
