mod common;

use common::verso;
use predicates::prelude::*;

#[test]
fn satisfied_prints_true() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["satisfies", "1.2.7", "^1.2"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn unsatisfied_prints_false_and_exits_one() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["satisfies", "1.3.0", "^1.2"])
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn invalid_version_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["satisfies", "banana", "*"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid version"));
}

#[test]
fn invalid_range_exits_two_not_one() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["satisfies", "1.2.3", "> =1.2.3"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn satisfies_accepts_aliases() {
    let home = tempfile::tempdir().unwrap();
    verso(home.path())
        .args(["satisfies", "6.16.0", "lts/boron"])
        .assert()
        .success()
        .stdout("true\n");
}
