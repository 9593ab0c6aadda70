extern crate statistical;

use statistical::prelude::*;

#[test]
fn generators_from_file() {
    crate::init_logger();
    let configs = RngConfig::load_many(crate::test_data("generators.yaml")).unwrap();
    assert_eq!(configs.len(), 3);
    assert_eq!(configs[0].seed, Some(42));
    assert_eq!(configs[2].seed, None);

    let mut first = configs[0].build().unwrap();
    let mut again = configs[0].build().unwrap();
    assert_eq!(first.type_name(), "Normal");
    assert_eq!(first.rand(), again.rand());

    let dice = configs[1].build().unwrap();
    assert_eq!(dice.type_name(), "UniformDiscrete");
    assert_eq!(dice.distribution().mean(), 3.5);

    let frechet = configs[2].build().unwrap();
    assert!(frechet.distribution().domain().unwrap().contains(1.5));
    assert!(!frechet.distribution().domain().unwrap().contains(1.0));
}

#[test]
fn builder_matches_yaml() {
    let built = RngConfig::builder()
        .distribution(
            DistributionConfig::builder()
                .kind("laplace")
                .params(vec![2.0, 1.0])
                .build(),
        )
        .seed(8)
        .build();
    let parsed = RngConfig::loads("distribution: {kind: laplace, params: [2, 1]}\nseed: 8").unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn missing_file() {
    let err = DistributionConfig::load(crate::test_data("missing.yaml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(matches!(err, StatsError::ConfigIo { .. }));
}
