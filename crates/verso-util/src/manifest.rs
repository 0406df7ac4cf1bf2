//! Loading the list of available versions from a file or an inline JSON string.
//!
//! Two JSON shapes are accepted:
//!
//! ```json
//! ["0.10.12", "0.10.13", "0.11.0"]
//! ```
//!
//! ```json
//! { "stable": "0.10.13", "all": ["0.10.12", "0.10.13", "0.11.0"] }
//! ```
//!
//! In the object form `stable` names the version to fall back to when no
//! range is requested.

use std::path::Path;

use serde::Deserialize;

use crate::errors::VersoError;

/// The available versions of a runtime, as published by its index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionManifest {
    pub versions: Vec<String>,
    pub stable: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawManifest {
    List(Vec<String>),
    Index {
        #[serde(default)]
        stable: Option<String>,
        all: Vec<String>,
    },
}

impl VersionManifest {
    pub fn new(versions: Vec<String>) -> Self {
        Self {
            versions,
            stable: None,
        }
    }

    /// Parse a manifest from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, VersoError> {
        let raw: RawManifest = serde_json::from_str(json).map_err(|e| VersoError::Manifest {
            message: format!("Failed to parse version list: {e}"),
        })?;
        Ok(match raw {
            RawManifest::List(versions) => Self::new(versions),
            RawManifest::Index { stable, all } => Self {
                versions: all,
                stable: stable.filter(|s| !s.trim().is_empty()),
            },
        })
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, VersoError> {
        let content = std::fs::read_to_string(path).map_err(|e| VersoError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let manifest = Self::from_json_str(&content).map_err(|e| match e {
            VersoError::Manifest { message } => VersoError::Manifest {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })?;
        tracing::debug!(
            "Loaded {} versions from {}",
            manifest.versions.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Append versions given individually, e.g. repeated `--available` flags.
    pub fn extend<I, S>(&mut self, versions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions.extend(versions.into_iter().map(Into::into));
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }
}
