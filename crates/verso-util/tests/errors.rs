use verso_util::errors::{VersoError, VersoResult};

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = VersoError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_invalid_version_display() {
    let err = VersoError::InvalidVersion {
        input: "abc".to_string(),
        reason: "expected a major version number".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid version 'abc': expected a major version number"
    );
}

#[test]
fn test_invalid_range_display() {
    let err = VersoError::InvalidRange {
        input: "1.2.3 -".to_string(),
        reason: "hyphen range is missing its upper bound".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid range '1.2.3 -': hyphen range is missing its upper bound"
    );
}

#[test]
fn test_no_match_display() {
    let err = VersoError::NoMatch {
        range: "9000.0.0".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "No version in the manifest satisfies '9000.0.0'"
    );
}

#[test]
fn test_manifest_error_display() {
    let err = VersoError::Manifest {
        message: "not json".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: not json");
}

#[test]
fn test_config_error_display() {
    let err = VersoError::Config {
        message: "bad toml".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: bad toml");
}

#[test]
fn test_generic_error_display() {
    let err = VersoError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_invalid_range_has_help() {
    use miette::Diagnostic;

    let err = VersoError::InvalidRange {
        input: "=>1".to_string(),
        reason: "unknown operator".to_string(),
    };
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("1.2.3 - 2.0.0"), "got: {help}");
}

#[test]
fn test_question_mark_into_verso_result() {
    fn load() -> VersoResult<()> {
        Err(VersoError::Config {
            message: "bad".to_string(),
        })?;
        Ok(())
    }
    let report = load().unwrap_err();
    assert!(report.downcast_ref::<VersoError>().is_some());
    assert_eq!(report.to_string(), "Config error: bad");
}
