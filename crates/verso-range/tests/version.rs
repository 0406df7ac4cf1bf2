use std::cmp::Ordering;
use std::str::FromStr;

use verso_range::{Identifier, Op, Version};
use verso_util::errors::VersoError;

#[test]
fn parse_full_version() {
    let v = Version::from_str("2.3.1").unwrap();
    assert_eq!((v.major, v.minor, v.patch), (2, 3, 1));
    assert!(v.prerelease.is_empty());
    assert!(v.build.is_empty());
}

#[test]
fn parse_prerelease_and_build() {
    let v = Version::parse("1.0.0-rc.1+sha.5114f85").unwrap();
    assert_eq!(
        v.prerelease,
        vec![
            Identifier::AlphaNumeric("rc".to_string()),
            Identifier::Numeric(1)
        ]
    );
    assert_eq!(v.build, vec!["sha", "5114f85"]);
    assert!(v.is_prerelease());
}

#[test]
fn parse_partial_versions() {
    assert_eq!(Version::parse("4").unwrap().to_string(), "4.0.0");
    assert_eq!(Version::parse("4.2").unwrap().to_string(), "4.2.0");
}

#[test]
fn parse_invalid_version() {
    for bad in ["not-a-version", "", "   ", ".1.2", "1.2.3.4", "1.2.3_beta"] {
        let err = Version::parse(bad).unwrap_err();
        assert!(
            matches!(err, VersoError::InvalidVersion { .. }),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn compare_is_numeric() {
    let nine = Version::parse("0.9.1").unwrap();
    let ten = Version::parse("0.10.12").unwrap();
    assert_eq!(nine.cmp(&ten), Ordering::Less);
    assert_eq!(ten.cmp(&nine), Ordering::Greater);
}

#[test]
fn numeric_identifier_sorts_before_alphanumeric() {
    let numeric = Version::parse("1.0.0-1").unwrap();
    let alpha = Version::parse("1.0.0-alpha").unwrap();
    assert!(numeric < alpha);
}

#[test]
fn shorter_prerelease_prefix_sorts_first() {
    let short = Version::parse("1.0.0-alpha").unwrap();
    let long = Version::parse("1.0.0-alpha.1").unwrap();
    assert!(short < long);
}

#[test]
fn equality_ignores_build() {
    let a = Version::parse("0.10.13").unwrap();
    let b = Version::parse("0.10.13+build2012").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), Ordering::Equal);
}

#[test]
fn hash_ignores_build() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(Version::parse("1.2.3+a").unwrap());
    assert!(set.contains(&Version::parse("1.2.3+b").unwrap()));
}

#[test]
fn satisfies_each_operator() {
    let v = Version::parse("0.10.13").unwrap();
    let lower = Version::parse("0.10.12").unwrap();
    let same = Version::parse("0.10.13").unwrap();

    assert!(v.satisfies_operator(Op::Eq, &same));
    assert!(v.satisfies_operator(Op::Gt, &lower));
    assert!(v.satisfies_operator(Op::Ge, &same));
    assert!(v.satisfies_operator(Op::Le, &same));
    assert!(!v.satisfies_operator(Op::Lt, &same));
    assert!(!v.satisfies_operator(Op::Lt, &lower));
}

#[test]
fn op_display() {
    let rendered: Vec<String> = [Op::Eq, Op::Lt, Op::Le, Op::Gt, Op::Ge]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["=", "<", "<=", ">", ">="]);
}
