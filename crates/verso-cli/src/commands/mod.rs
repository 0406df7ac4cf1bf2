//! Command dispatch and handler modules.

mod candidates;
mod range;
mod resolve;
mod satisfies;

use std::process::ExitCode;

use verso_util::config::GlobalConfig;
use verso_util::errors::VersoResult;
use verso_util::manifest::VersionManifest;

use crate::cli::{Cli, Command, ManifestArgs};

/// Exit status of `verso satisfies` when the version is outside the range.
pub const NOT_SATISFIED: u8 = 1;

/// Exit status for every error, including usage errors reported by clap.
pub const FAILURE: u8 = 2;

/// Route a parsed CLI invocation to the appropriate command handler.
///
/// `satisfies` answering "no" is not an error; it maps to [`NOT_SATISFIED`].
pub fn dispatch(cli: Cli) -> VersoResult<ExitCode> {
    match cli.command {
        Command::Resolve {
            range,
            default,
            manifest,
        } => resolve::exec(&range, default.as_deref(), &manifest, cli.verbose)?,
        Command::Satisfies { version, range } => {
            if !satisfies::exec(&version, &range, cli.verbose)? {
                return Ok(ExitCode::from(NOT_SATISFIED));
            }
        }
        Command::Range { range } => range::exec(&range, cli.verbose)?,
        Command::Candidates { manifest } => candidates::exec(&manifest, cli.verbose)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Collect the available versions from the command line, falling back to
/// the manifest named in the user config.
fn load_manifest(args: &ManifestArgs, config: &GlobalConfig) -> VersoResult<VersionManifest> {
    let mut manifest = if let Some(path) = &args.manifest {
        VersionManifest::from_path(path)?
    } else if let Some(json) = &args.versions_json {
        VersionManifest::from_json_str(json)?
    } else if let Some(path) = config.resolve.manifest.as_deref() {
        tracing::debug!("Using manifest from config: {}", path.display());
        VersionManifest::from_path(path)?
    } else {
        VersionManifest::default()
    };
    manifest.extend(args.available.iter().cloned());
    Ok(manifest)
}
