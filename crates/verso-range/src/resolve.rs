//! Picking the version to install from a manifest of available releases.
//!
//! Candidates are tried highest first, but every even-minor ("stable")
//! release is tried before any odd-minor one. The full list is then tried
//! again, so an odd-minor release still wins when it is the only match:
//!
//! ```text
//! manifest  0.9.1 0.10.13 0.10.14 0.11.0
//! order     0.10.14 0.10.13 | 0.11.0 0.10.14 0.10.13 0.9.1
//! ```

use verso_util::errors::VersoError;

use crate::alias;
use crate::range::Range;
use crate::version::Version;

/// One manifest entry that parsed as a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The entry exactly as it appeared in the manifest.
    pub raw: String,
    pub version: Version,
}

/// A manifest parsed once and arranged in selection order.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    descending: Vec<Candidate>,
    stable: Vec<usize>,
    skipped: usize,
}

impl Candidates {
    /// Parse and order `versions`. Entries that are not versions are skipped.
    pub fn new<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0;
        let mut descending: Vec<Candidate> = versions
            .into_iter()
            .filter_map(|raw| {
                let raw = raw.as_ref();
                match Version::parse(raw) {
                    Ok(version) => Some(Candidate {
                        raw: raw.to_string(),
                        version,
                    }),
                    Err(e) => {
                        tracing::debug!("Skipping manifest entry: {e}");
                        skipped += 1;
                        None
                    }
                }
            })
            .collect();
        // Stable sort: equal versions keep their manifest order.
        descending.sort_by(|a, b| b.version.cmp(&a.version));

        let stable = descending
            .iter()
            .enumerate()
            .filter(|(_, c)| c.version.is_even_minor())
            .map(|(i, _)| i)
            .collect();

        Self {
            descending,
            stable,
            skipped,
        }
    }

    /// Valid candidates, highest first.
    pub fn descending(&self) -> &[Candidate] {
        &self.descending
    }

    /// The full selection order: stable candidates, then every candidate.
    pub fn policy_order(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.stable
            .iter()
            .map(|&i| &self.descending[i])
            .chain(self.descending.iter())
    }

    /// The first candidate in selection order that satisfies `range`.
    pub fn select(&self, range: &Range) -> Option<&Candidate> {
        let selected = self.policy_order().find(|c| range.satisfies(&c.version));
        match selected {
            Some(c) => tracing::debug!("'{}' resolved to {}", range.as_str(), c.raw),
            None => tracing::debug!(
                "'{}' matched none of {} candidates",
                range.as_str(),
                self.descending.len()
            ),
        }
        selected
    }

    /// Number of manifest entries that failed to parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.descending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descending.is_empty()
    }
}

/// Resolve `range` against `candidates`.
///
/// An empty `range` returns `default` without looking at the manifest.
/// Otherwise aliases are expanded, risky ranges are warned about, the range
/// must parse, and the result is the raw manifest entry chosen by
/// [`Candidates::select`], or `None` when nothing satisfies it.
pub fn resolve<S: AsRef<str>>(
    range: &str,
    candidates: &[S],
    default: &str,
) -> Result<Option<String>, VersoError> {
    if range.is_empty() {
        tracing::debug!("No range requested, using default {default}");
        return Ok(Some(default.to_string()));
    }
    if let Some(caution) = alias::caution(range) {
        tracing::warn!("{caution}");
    }
    let expanded = alias::expand(range)?;
    if expanded != range {
        tracing::debug!("Expanded '{range}' to '{expanded}'");
    }
    let range = Range::parse(&expanded)?;
    let candidates = Candidates::new(candidates);
    Ok(candidates.select(&range).map(|c| c.raw.clone()))
}
