mod common;

use common::{verso, MANIFEST_JSON};
use predicates::prelude::*;

#[test]
fn range_prints_normalised_form() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["range", "~1.2.3 || 2.x"])
        .assert()
        .success()
        .stdout(">=1.2.3 <1.3.0 || >=2.0.0 <3.0.0\n");
}

#[test]
fn range_rejects_dangling_operator() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["range", ">="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no version"));
}

#[test]
fn candidates_lists_stable_first() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["candidates", "--versions-json", MANIFEST_JSON])
        .assert()
        .success()
        .stdout(
            "0.10.14\n0.10.13\n0.10.12\n0.0.1\n\
             0.11.0\n0.10.14\n0.10.13\n0.10.12\n0.9.1\n0.0.1\n",
        );
}

#[test]
fn candidates_skips_invalid_entries() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["-v", "candidates", "-a", "1.0.0", "-a", "nightly"])
        .assert()
        .success()
        .stdout("1.0.0\n1.0.0\n")
        .stderr(predicate::str::contains("Skipped"));
}

#[test]
fn range_expands_aliases() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["range", "lts/boron"])
        .assert()
        .success()
        .stdout(">=6.0.0 <7.0.0\n");
}

#[test]
fn range_rejects_stacked_operators() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["range", "~ >1.2.3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("followed by another operator"));
}
