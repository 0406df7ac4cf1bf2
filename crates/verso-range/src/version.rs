//! Semantic version parsing and comparison.
//!
//! Versions use the semver precedence rules:
//! - `major`, `minor` and `patch` compare as integers
//! - A version with a prerelease sorts before the same release without one
//! - Prerelease identifiers compare pairwise: numeric ones as numbers,
//!   alphanumeric ones in ASCII order, numeric before alphanumeric, and a
//!   shorter identifier list sorts first when it is a prefix of the other
//! - Build metadata is carried along but never affects ordering or equality
//!
//! Parsing is lenient in the ways real release indexes need: surrounding
//! whitespace, a leading `=` or `v`, and missing minor/patch parts (`"4"`,
//! `"4.2"`) are all accepted.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use verso_util::errors::VersoError;

/// A single dot-separated prerelease identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{n}"),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// A parsed `major.minor.patch[-prerelease][+build]` version.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Identifier>,
    pub build: Vec<String>,
}

/// Relational operators a [`Version`] can be tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a version string, defaulting missing minor/patch parts to 0.
    pub fn parse(input: &str) -> Result<Self, VersoError> {
        let rest = strip_loose_prefix(input.trim());
        let (core, build) = match rest.split_once('+') {
            Some((core, build)) => (core, Some(build)),
            None => (rest, None),
        };

        let mut scanner = Scanner::new(core);
        let major = scanner
            .number()
            .map_err(|reason| invalid(input, reason))?
            .ok_or_else(|| invalid(input, "expected a major version number"))?;
        let mut minor = 0;
        let mut patch = 0;
        if scanner.eat('.') {
            minor = scanner
                .number()
                .map_err(|reason| invalid(input, reason))?
                .ok_or_else(|| invalid(input, "expected a minor version number after '.'"))?;
            if scanner.eat('.') {
                patch = scanner
                    .number()
                    .map_err(|reason| invalid(input, reason))?
                    .ok_or_else(|| invalid(input, "expected a patch version number after '.'"))?;
            }
        }

        let rest = scanner.rest();
        let prerelease = if rest.is_empty() {
            Vec::new()
        } else if let Some(pre) = rest.strip_prefix('-') {
            parse_prerelease(pre).map_err(|reason| invalid(input, reason))?
        } else if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            // `1.2.3beta` is read as `1.2.3-beta`
            parse_prerelease(rest).map_err(|reason| invalid(input, reason))?
        } else {
            return Err(invalid(input, format!("unexpected trailing text '{rest}'")));
        };

        let build = match build {
            Some(build) => split_identifiers(build)
                .map_err(|reason| invalid(input, format!("build metadata: {reason}")))?,
            None => Vec::new(),
        };

        Ok(Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Whether this version is "stable" under the legacy convention where
    /// even minor versions are stable release lines and odd ones are not.
    pub fn is_even_minor(&self) -> bool {
        self.minor % 2 == 0
    }

    /// Whether `self` and `other` share `major.minor.patch`.
    pub fn same_release(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// Test `self <op> other`.
    pub fn satisfies_operator(&self, op: Op, other: &Version) -> bool {
        let ord = self.cmp(other);
        match op {
            Op::Eq => ord == Ordering::Equal,
            Op::Lt => ord == Ordering::Less,
            Op::Le => ord != Ordering::Greater,
            Op::Gt => ord == Ordering::Greater,
            Op::Ge => ord != Ordering::Less,
        }
    }
}

fn invalid(input: &str, reason: impl Into<String>) -> VersoError {
    VersoError::InvalidVersion {
        input: input.to_string(),
        reason: reason.into(),
    }
}

/// Drop a leading `=` and/or `v`/`V`, with optional whitespace after `=`.
pub(crate) fn strip_loose_prefix(s: &str) -> &str {
    let s = match s.strip_prefix('=') {
        Some(rest) => rest.trim_start(),
        None => s,
    };
    s.strip_prefix(['v', 'V']).unwrap_or(s)
}

fn parse_prerelease(pre: &str) -> Result<Vec<Identifier>, String> {
    split_identifiers(pre).map(|ids| {
        ids.into_iter()
            .map(|id| match id.parse::<u64>() {
                Ok(n) if id.bytes().all(|b| b.is_ascii_digit()) => Identifier::Numeric(n),
                _ => Identifier::AlphaNumeric(id),
            })
            .collect()
    })
}

fn split_identifiers(s: &str) -> Result<Vec<String>, String> {
    s.split('.')
        .map(|id| {
            if id.is_empty() {
                Err("empty identifier".to_string())
            } else if let Some(bad) = id
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
            {
                Err(format!("invalid character '{bad}' in identifier '{id}'"))
            } else {
                Ok(id.to_string())
            }
        })
        .collect()
}

/// Cursor over the numeric core of a version.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Read a run of ASCII digits. `Ok(None)` when no digit is next.
    pub(crate) fn number(&mut self) -> Result<Option<u64>, String> {
        let digits = self.input[self.pos..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return Ok(None);
        }
        let text = &self.input[self.pos..self.pos + digits];
        self.pos += digits;
        text.parse::<u64>()
            .map(Some)
            .map_err(|_| format!("number '{text}' is too large"))
    }

    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.input[self.pos..].starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Slice ordering is pairwise, then shorter-first.
        (false, false) => a.cmp(b),
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            f.write_str("-")?;
            write_dotted(f, &self.prerelease)?;
        }
        if !self.build.is_empty() {
            f.write_str("+")?;
            write_dotted(f, &self.build)?;
        }
        Ok(())
    }
}

fn write_dotted<T: fmt::Display>(f: &mut fmt::Formatter<'_>, parts: &[T]) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        write!(f, "{part}")?;
    }
    Ok(())
}

impl FromStr for Version {
    type Err = VersoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
