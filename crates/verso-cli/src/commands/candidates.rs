use verso_range::Candidates;
use verso_util::config::GlobalConfig;
use verso_util::errors::VersoResult;
use verso_util::progress::{status, Tone};

use crate::cli::ManifestArgs;

pub fn exec(manifest_args: &ManifestArgs, verbose: bool) -> VersoResult<()> {
    let config = GlobalConfig::load()?;
    let manifest = super::load_manifest(manifest_args, &config)?;
    let candidates = Candidates::new(&manifest.versions);

    if verbose {
        if candidates.skipped() > 0 {
            status(
                Tone::Warn,
                "Skipped",
                &format!("{} entries that are not versions", candidates.skipped()),
            );
        }
        status(
            Tone::Info,
            "Ordered",
            &format!("{} candidates, stable releases first", candidates.len()),
        );
    }
    for candidate in candidates.policy_order() {
        println!("{}", candidate.raw);
    }
    Ok(())
}
