//! Property-based tests for version ordering and resolution.

use std::cmp::Ordering;

use proptest::prelude::*;
use verso_range::{resolve, Range, Version};

fn version_string() -> impl Strategy<Value = String> {
    (
        0u64..30,
        0u64..30,
        0u64..30,
        prop::option::of(prop_oneof!["[0-9]{1,3}", "(alpha|beta|rc)(\\.[0-9]{1,2})?"]),
        prop::option::of("[a-z0-9]{1,6}"),
    )
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut s = format!("{major}.{minor}.{patch}");
            if let Some(pre) = pre {
                s.push('-');
                s.push_str(&pre);
            }
            if let Some(build) = build {
                s.push('+');
                s.push_str(&build);
            }
            s
        })
}

proptest! {
    #[test]
    fn compare_is_reflexive(s in version_string()) {
        let a = Version::parse(&s).unwrap();
        let b = Version::parse(&s).unwrap();
        prop_assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in version_string(), b in version_string()) {
        let a = Version::parse(&a).unwrap();
        let b = Version::parse(&b).unwrap();
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn compare_is_transitive(
        a in version_string(),
        b in version_string(),
        c in version_string(),
    ) {
        let mut vs = [
            Version::parse(&a).unwrap(),
            Version::parse(&b).unwrap(),
            Version::parse(&c).unwrap(),
        ];
        vs.sort();
        prop_assert!(vs[0] <= vs[1]);
        prop_assert!(vs[1] <= vs[2]);
        prop_assert!(vs[0] <= vs[2]);
    }

    #[test]
    fn display_round_trips_ordering(s in version_string()) {
        let v = Version::parse(&s).unwrap();
        let again = Version::parse(&v.to_string()).unwrap();
        prop_assert_eq!(v.cmp(&again), Ordering::Equal);
    }

    #[test]
    fn empty_range_ignores_manifest(manifest in prop::collection::vec(".*", 0..8)) {
        let picked = resolve("", manifest.as_slice(), "4.1.1").unwrap();
        prop_assert_eq!(picked.as_deref(), Some("4.1.1"));
    }

    #[test]
    fn exact_release_resolves_to_itself(
        major in 0u64..50,
        minor in 0u64..50,
        patch in 0u64..50,
    ) {
        let wanted = format!("{major}.{minor}.{patch}");
        let manifest = vec!["0.0.0".to_string(), wanted.clone(), "99.99.99".to_string()];
        let picked = resolve(&wanted, manifest.as_slice(), "0.0.0").unwrap();
        prop_assert_eq!(picked, Some(wanted.clone()));
        prop_assert!(Range::parse(&wanted).unwrap().satisfies_str(&wanted));
    }
}
