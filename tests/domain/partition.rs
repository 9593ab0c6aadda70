extern crate statistical;

use rstest::*;
use statistical::prelude::*;
use std::cmp::Ordering;

#[fixture]
fn domains() -> Vec<Domain> {
    vec![
        Domain::closed(0.0, 10.0).unwrap(),
        Domain::open(0.0, 10.0).unwrap(),
        Domain::new(0.0, 10.0, DomainType::LeftOpen, &[]).unwrap(),
        Domain::new(0.0, 10.0, DomainType::RightOpen, &[Exclusion::Point(5.0)]).unwrap(),
        Domain::new(
            -5.0,
            5.0,
            DomainType::Closed,
            &[Exclusion::interval(2.0, 1.0), Exclusion::Point(-3.0)],
        )
        .unwrap(),
        Domain::real_line(),
    ]
}

#[rstest]
fn compare_partitions_the_line(domains: Vec<Domain>) {
    let points: Vec<f64> = (-130..=130)
        .map(|i| f64::from(i) / 10.0)
        .chain([f64::NEG_INFINITY, f64::INFINITY])
        .collect();
    for domain in &domains {
        for &x in &points {
            let outcome = domain.compare(x);
            assert_eq!(outcome == Some(Ordering::Equal), domain.contains(x), "{domain} at {x}");
            match outcome {
                Some(Ordering::Less) => assert!(x <= domain.start()),
                Some(Ordering::Greater) => assert!(x >= domain.finish()),
                Some(Ordering::Equal) => assert!(domain.start() <= x && x <= domain.finish()),
                // Only interior exclusions are neither left nor right of the domain
                None => assert!(x > domain.start() && x < domain.finish() && domain.excludes(x)),
            }
        }
    }
}

#[test]
fn open_bounds() {
    let open = Domain::open(0.0, 1.0).unwrap();
    assert_eq!(open.compare(0.0), Some(Ordering::Less));
    assert_eq!(open.compare(1.0), Some(Ordering::Greater));
    assert_eq!(open.compare(0.5), Some(Ordering::Equal));
    assert_eq!(open.compare(f64::NAN), None);

    let closed = Domain::closed(0.0, 1.0).unwrap();
    assert_eq!(closed.compare(0.0), Some(Ordering::Equal));
    assert_eq!(closed.compare(1.0), Some(Ordering::Equal));
    assert_eq!(closed.compare(-0.1), Some(Ordering::Less));
}

#[test]
fn exclusions() {
    let domain = Domain::new(
        0.0,
        10.0,
        DomainType::Closed,
        &[Exclusion::Point(3.0), Exclusion::interval(6.0, 7.0)],
    )
    .unwrap();
    assert!(!domain.contains(3.0));
    assert!(domain.contains(3.1));
    assert!(!domain.contains(6.5));
    assert!(!domain.contains(7.0));
    assert!(domain.contains(7.01));
    assert_eq!(domain.compare(6.0), None);
    assert!(Domain::closed(2.0, 1.0).is_err());
}

#[test]
fn domain_types() {
    for (name, kind) in [
        ("left_open", DomainType::LeftOpen),
        ("right_open", DomainType::RightOpen),
        ("full_open", DomainType::FullOpen),
        ("closed", DomainType::Closed),
    ] {
        assert_eq!(name.parse::<DomainType>().unwrap(), kind);
        assert_eq!(kind.to_string(), name);
    }
    let err = "half_open".parse::<DomainType>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
