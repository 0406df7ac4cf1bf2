use verso_util::config::GlobalConfig;
use verso_util::errors::{VersoError, VersoResult};
use verso_util::manifest::VersionManifest;
use verso_util::progress::{status, Tone};

use crate::cli::ManifestArgs;

pub fn exec(
    range: &str,
    default: Option<&str>,
    manifest_args: &ManifestArgs,
    verbose: bool,
) -> VersoResult<()> {
    let config = GlobalConfig::load()?;

    // An explicit default for an empty range needs no manifest at all.
    let manifest = if range.is_empty() && default.is_some() {
        VersionManifest::default()
    } else {
        super::load_manifest(manifest_args, &config)?
    };

    let default = default
        .map(str::to_string)
        .or_else(|| manifest.stable.clone())
        .or_else(|| config.resolve.default_version.clone());

    if range.is_empty() {
        let Some(default) = default else {
            return Err(VersoError::Generic {
                message: "No range requested and no default version known. \
                          Pass --default or set `resolve.default-version` in config.toml"
                    .to_string(),
            }
            .into());
        };
        if verbose {
            status(Tone::Info, "Default", &default);
        }
        println!("{default}");
        return Ok(());
    }

    if manifest.is_empty() {
        tracing::warn!("No available versions given; nothing can satisfy '{range}'");
    }

    let resolved = verso_range::resolve(
        range,
        manifest.versions.as_slice(),
        default.as_deref().unwrap_or_default(),
    )?;
    match resolved {
        Some(version) => {
            if verbose {
                status(
                    Tone::Action,
                    "Resolved",
                    &format!("{version} for '{range}' from {} versions", manifest.len()),
                );
            }
            println!("{version}");
            Ok(())
        }
        None => Err(VersoError::NoMatch {
            range: range.to_string(),
        }
        .into()),
    }
}
