#![allow(dead_code)]

use assert_cmd::Command;

pub const MANIFEST_JSON: &str =
    r#"["0.0.1", "0.9.1", "0.10.12", "0.10.13", "0.10.14", "0.11.0"]"#;

/// A `verso` command isolated from the user's real config directory.
#[allow(deprecated)]
pub fn verso(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("verso").unwrap();
    cmd.env("VERSO_HOME", home)
        .env_remove("VERSO_MANIFEST")
        .env_remove("VERSO_DEFAULT_VERSION")
        .env_remove("RUST_LOG");
    cmd
}
