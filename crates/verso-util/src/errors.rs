use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all verso operations.
#[derive(Debug, Error, Diagnostic)]
pub enum VersoError {
    /// A string could not be parsed as a version.
    #[error("Invalid version '{input}': {reason}")]
    #[diagnostic(help("Versions look like MAJOR[.MINOR[.PATCH]][-PRERELEASE][+BUILD]"))]
    InvalidVersion { input: String, reason: String },

    /// A version constraint is malformed.
    #[error("Invalid range '{input}': {reason}")]
    #[diagnostic(help(
        "Ranges are built from comparators such as `>=1.2.3`, `~1.2`, `^1.2`, `1.x` \
         or `1.2.3 - 2.0.0`, joined by spaces (AND) or `||` (OR)"
    ))]
    InvalidRange { input: String, reason: String },

    /// A well-formed range matched nothing in the manifest.
    #[error("No version in the manifest satisfies '{range}'")]
    #[diagnostic(help("Check the requested range against the available versions"))]
    NoMatch { range: String },

    /// The manifest of available versions could not be read.
    #[error("Manifest error: {message}")]
    #[diagnostic(help(
        "A manifest is a JSON array of versions or an object with `stable` and `all` fields"
    ))]
    Manifest { message: String },

    /// The user configuration file is unreadable or malformed.
    #[error("Config error: {message}")]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type VersoResult<T> = miette::Result<T>;
