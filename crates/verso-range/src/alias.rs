//! Named aliases accepted in place of a range, and the warnings attached to
//! ranges that will silently follow new releases.
//!
//! `node` stands for the newest release, `lts/*` for the newest long-term
//! support line and `lts/<codename>` for one named line:
//!
//! ```text
//! node        -> *
//! lts/*       -> 10.*.*
//! lts/boron   -> 6.*.*
//! v4.2        -> 4.2
//! ```

use std::fmt;

use verso_util::errors::VersoError;

/// Long-term support lines by codename.
pub const LTS: [(&str, u64); 4] = [("argon", 4), ("boron", 6), ("carbon", 8), ("dubnium", 10)];

const LATEST: &str = "node";
const LTS_PREFIX: &str = "lts/";

/// Something worth telling the user about a requested range before it is
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caution {
    /// `node`: whatever is newest in the manifest.
    Latest,
    /// `lts/...`: the newest release of a long-term support line.
    Lts,
    /// `*`: no bound at all.
    Unbounded,
    /// `>` or `>=`: no upper bound.
    OpenUpper,
}

impl fmt::Display for Caution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Caution::Latest => {
                "'node' requests the latest version; it is selected from the manifest"
            }
            Caution::Lts => "an lts alias was requested; it is selected from the manifest",
            Caution::Unbounded => "Dangerous semver range (*): any new release will be picked",
            Caution::OpenUpper => "Dangerous semver range (>): it has no upper bound",
        };
        f.write_str(message)
    }
}

/// The caution that applies to `input` as the user wrote it, if any.
pub fn caution(input: &str) -> Option<Caution> {
    let trimmed = input.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if lowered == LATEST {
        Some(Caution::Latest)
    } else if lowered.starts_with(LTS_PREFIX) {
        Some(Caution::Lts)
    } else if trimmed == "*" {
        Some(Caution::Unbounded)
    } else if trimmed.starts_with('>') {
        Some(Caution::OpenUpper)
    } else {
        None
    }
}

/// Rewrite an alias into the range it stands for.
///
/// Aliases are matched case-insensitively after trimming. A leading `v` on a
/// plain version is dropped. Anything else is returned unchanged for
/// [`crate::Range::parse`] to judge.
pub fn expand(input: &str) -> Result<String, VersoError> {
    let trimmed = input.trim();
    let lowered = trimmed.to_ascii_lowercase();

    if lowered == LATEST {
        return Ok("*".to_string());
    }
    if let Some(codename) = lowered.strip_prefix(LTS_PREFIX) {
        let major = lts_major(codename).ok_or_else(|| VersoError::InvalidRange {
            input: input.to_string(),
            reason: format!(
                "unknown lts codename '{codename}'; expected `*` or one of {}",
                LTS.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ")
            ),
        })?;
        return Ok(format!("{major}.*.*"));
    }

    let mut chars = trimmed.chars();
    if matches!(chars.next(), Some('v' | 'V')) && chars.next().is_some_and(|c| c.is_ascii_digit())
    {
        return Ok(trimmed[1..].to_string());
    }
    Ok(input.to_string())
}

fn lts_major(codename: &str) -> Option<u64> {
    if codename == "*" {
        return LTS.iter().map(|(_, major)| *major).max();
    }
    LTS.iter()
        .find(|(name, _)| *name == codename)
        .map(|(_, major)| *major)
}
