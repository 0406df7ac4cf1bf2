//! Version range parsing and satisfaction.
//!
//! A range is a disjunction (`||`) of comparator sets; each set is a
//! whitespace-separated conjunction of comparators. Shorthand forms are
//! desugared into plain comparators at parse time:
//!
//! | form              | meaning                      |
//! |-------------------|------------------------------|
//! | `1.2.3`, `=1.2.3` | `=1.2.3`                     |
//! | `1.2.x`, `1.2`    | `>=1.2.0 <1.3.0`             |
//! | `1.x`, `1`        | `>=1.0.0 <2.0.0`             |
//! | `*`, `x`, ``      | any version                  |
//! | `~1.2.3`          | `>=1.2.3 <1.3.0`             |
//! | `~1.2`, `~1`      | `>=1.2.0 <2.0.0`, `>=1.0.0 <2.0.0` |
//! | `^1.2.3`          | `>=1.2.3 <2.0.0`             |
//! | `^0.2.3`          | `>=0.2.3 <0.3.0`             |
//! | `^1.2`, `^1`      | `>=1.2.0 <1.3.0`, `>=1.0.0 <2.0.0` |
//! | `1.2.3 - 2.0`     | `>=1.2.3 <2.1.0`             |
//! | `>1.2`, `<=1.2`   | `>=1.3.0`, `<1.3.0`          |

use std::fmt;
use std::str::FromStr;

use verso_util::errors::VersoError;

use crate::version::{strip_loose_prefix, Identifier, Op, Scanner, Version};

/// One `(operator, version)` test inside a comparator set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Matches every release version.
    Any,
    Bound { op: Op, version: Version },
}

impl Comparator {
    pub fn new(op: Op, version: Version) -> Self {
        Comparator::Bound { op, version }
    }

    /// Comparator that no version can satisfy.
    fn nothing() -> Self {
        Comparator::new(Op::Lt, Version::new(0, 0, 0))
    }

    pub fn test(&self, version: &Version) -> bool {
        match self {
            Comparator::Any => true,
            Comparator::Bound { op, version: bound } => version.satisfies_operator(*op, bound),
        }
    }

    /// Whether this comparator opts in to prereleases of `version`'s release.
    fn admits_prerelease_of(&self, version: &Version) -> bool {
        match self {
            Comparator::Any => false,
            Comparator::Bound { version: bound, .. } => {
                bound.is_prerelease() && bound.same_release(version)
            }
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Any => f.write_str("*"),
            Comparator::Bound { op: Op::Eq, version } => write!(f, "{version}"),
            Comparator::Bound { op, version } => write!(f, "{op}{version}"),
        }
    }
}

/// A parsed version range: any of `sets` must be satisfied in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    raw: String,
    sets: Vec<Vec<Comparator>>,
}

impl Range {
    pub fn parse(input: &str) -> Result<Self, VersoError> {
        let sets = input
            .split("||")
            .map(|group| parse_group(group, input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            raw: input.to_string(),
            sets,
        })
    }

    /// Range that every release satisfies.
    pub fn any() -> Self {
        Self {
            raw: "*".to_string(),
            sets: vec![vec![Comparator::Any]],
        }
    }

    /// The string this range was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn sets(&self) -> &[Vec<Comparator>] {
        &self.sets
    }

    pub fn satisfies(&self, version: &Version) -> bool {
        self.sets.iter().any(|set| set_satisfies(set, version))
    }

    /// Parse `version` and test it; unparseable versions never satisfy.
    pub fn satisfies_str(&self, version: &str) -> bool {
        Version::parse(version).is_ok_and(|v| self.satisfies(&v))
    }
}

fn set_satisfies(set: &[Comparator], version: &Version) -> bool {
    if !set.iter().all(|c| c.test(version)) {
        return false;
    }
    // A prerelease only matches when some comparator in the same set names a
    // prerelease of that exact release.
    !version.is_prerelease() || set.iter().any(|c| c.admits_prerelease_of(version))
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, set) in self.sets.iter().enumerate() {
            if i > 0 {
                f.write_str(" || ")?;
            }
            for (j, comparator) in set.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{comparator}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Range {
    type Err = VersoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn invalid_range(input: &str, reason: impl Into<String>) -> VersoError {
    VersoError::InvalidRange {
        input: input.to_string(),
        reason: reason.into(),
    }
}

const OPERATOR_CHARS: [char; 5] = ['<', '>', '=', '~', '^'];

fn parse_group(group: &str, input: &str) -> Result<Vec<Comparator>, VersoError> {
    let tokens: Vec<&str> = group.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(vec![Comparator::Any]);
    }

    if let Some(idx) = tokens.iter().position(|t| *t == "-") {
        if tokens.len() != 3 || idx != 1 {
            return Err(invalid_range(
                input,
                "a hyphen range must be written as `LOW - HIGH`",
            ));
        }
        return hyphen(tokens[0], tokens[2], input);
    }

    let mut comparators = Vec::new();
    let mut iter = tokens.into_iter();
    while let Some(token) = iter.next() {
        // `>= 1.2.3` is the same comparator as `>=1.2.3`
        let joined;
        let token = if token.chars().all(|c| OPERATOR_CHARS.contains(&c)) {
            let operand = iter.next().ok_or_else(|| {
                invalid_range(input, format!("operator '{token}' has no version"))
            })?;
            if operand.starts_with(OPERATOR_CHARS) {
                return Err(invalid_range(
                    input,
                    format!("operator '{token}' is followed by another operator '{operand}'"),
                ));
            }
            joined = format!("{token}{operand}");
            joined.as_str()
        } else {
            token
        };
        comparators.extend(parse_comparator(token, input)?);
    }
    Ok(comparators)
}

enum Shorthand {
    Tilde,
    Caret,
    Plain(Option<Op>),
}

fn split_operator(token: &str) -> (Shorthand, &str) {
    const PREFIXES: [(&str, Shorthand); 8] = [
        ("~>", Shorthand::Tilde),
        ("~", Shorthand::Tilde),
        ("^", Shorthand::Caret),
        (">=", Shorthand::Plain(Some(Op::Ge))),
        ("<=", Shorthand::Plain(Some(Op::Le))),
        (">", Shorthand::Plain(Some(Op::Gt))),
        ("<", Shorthand::Plain(Some(Op::Lt))),
        ("=", Shorthand::Plain(Some(Op::Eq))),
    ];
    for (prefix, shorthand) in PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            return (shorthand, rest);
        }
    }
    (Shorthand::Plain(None), token)
}

fn parse_comparator(token: &str, input: &str) -> Result<Vec<Comparator>, VersoError> {
    let (shorthand, operand) = split_operator(token);
    if operand.starts_with(OPERATOR_CHARS) {
        return Err(invalid_range(input, format!("unknown operator in '{token}'")));
    }
    let partial = Partial::parse(operand)?;
    match shorthand {
        Shorthand::Tilde => tilde(&partial, input),
        Shorthand::Caret => caret(&partial, input),
        Shorthand::Plain(op) => xrange(op, &partial, input),
    }
}

/// A version that may stop early or use `x`/`X`/`*` wildcards.
/// `None` components are unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    prerelease: Vec<Identifier>,
}

impl Partial {
    fn parse(token: &str) -> Result<Self, VersoError> {
        let invalid = |reason: String| VersoError::InvalidVersion {
            input: token.to_string(),
            reason,
        };
        let text = strip_loose_prefix(token);
        let core = match text.split_once('+') {
            Some((core, build)) => {
                // Build metadata is validated, then dropped.
                Version::parse(&format!("0.0.0+{build}"))
                    .map_err(|_| invalid(format!("invalid build metadata '{build}'")))?;
                core
            }
            None => text,
        };

        let mut scanner = Scanner::new(core);
        let mut parts: [Option<u64>; 3] = [None; 3];
        let mut wildcard = false;
        for (i, slot) in parts.iter_mut().enumerate() {
            if i > 0 && !scanner.eat('.') {
                break;
            }
            if scanner.eat('x') || scanner.eat('X') || scanner.eat('*') {
                wildcard = true;
                continue;
            }
            match scanner.number().map_err(&invalid)? {
                // Anything after a wildcard is unconstrained too: `1.x.3` is `1.x`.
                Some(n) if !wildcard => *slot = Some(n),
                Some(_) => {}
                None => {
                    return Err(invalid(match i {
                        0 => "expected a major version number or wildcard".to_string(),
                        _ => "expected a number or wildcard after '.'".to_string(),
                    }))
                }
            }
        }

        let rest = scanner.rest();
        let prerelease = if rest.is_empty() {
            Vec::new()
        } else if rest.starts_with('-')
            || (parts[2].is_some() && rest.starts_with(|c: char| c.is_ascii_alphabetic()))
        {
            Version::parse(&format!("0.0.0-{}", rest.trim_start_matches('-')))
                .map_err(|_| invalid(format!("invalid prerelease '{rest}'")))?
                .prerelease
        } else {
            return Err(invalid(format!("unexpected trailing text '{rest}'")));
        };

        Ok(Self {
            major: parts[0],
            minor: parts[1],
            patch: parts[2],
            prerelease,
        })
    }

    fn is_exact(&self) -> bool {
        self.major.is_some() && self.minor.is_some() && self.patch.is_some()
    }

    /// Lowest version matching the partial: missing components become 0.
    fn floor(&self) -> Version {
        let mut version = Version::new(
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        );
        version.prerelease = self.prerelease.clone();
        version
    }

    /// First release past the partial: `1` -> `2.0.0`, `1.2` -> `1.3.0`.
    /// Only meaningful when the major component is present.
    fn ceiling(&self, input: &str) -> Result<Version, VersoError> {
        let major = self.major.unwrap_or(0);
        match (self.minor, self.patch) {
            (None, _) => Ok(Version::new(bump(major, input)?, 0, 0)),
            (Some(minor), None) => Ok(Version::new(major, bump(minor, input)?, 0)),
            (Some(minor), Some(patch)) => Ok(Version::new(major, minor, bump(patch, input)?)),
        }
    }
}

fn bump(n: u64, input: &str) -> Result<u64, VersoError> {
    n.checked_add(1)
        .ok_or_else(|| invalid_range(input, format!("version component {n} cannot be incremented")))
}

fn xrange(op: Option<Op>, p: &Partial, input: &str) -> Result<Vec<Comparator>, VersoError> {
    if p.is_exact() {
        return Ok(vec![Comparator::new(op.unwrap_or(Op::Eq), p.floor())]);
    }
    if p.major.is_none() {
        return Ok(vec![match op {
            Some(Op::Gt) | Some(Op::Lt) => Comparator::nothing(),
            _ => Comparator::Any,
        }]);
    }
    Ok(match op {
        None | Some(Op::Eq) => vec![
            Comparator::new(Op::Ge, p.floor()),
            Comparator::new(Op::Lt, p.ceiling(input)?),
        ],
        Some(Op::Gt) => vec![Comparator::new(Op::Ge, p.ceiling(input)?)],
        Some(Op::Ge) => vec![Comparator::new(Op::Ge, p.floor())],
        Some(Op::Lt) => vec![Comparator::new(Op::Lt, p.floor())],
        Some(Op::Le) => vec![Comparator::new(Op::Lt, p.ceiling(input)?)],
    })
}

/// `~` allows changes below the last specified component; a missing patch
/// widens the window to the whole major line.
fn tilde(p: &Partial, input: &str) -> Result<Vec<Comparator>, VersoError> {
    let Some(major) = p.major else {
        return Ok(vec![Comparator::Any]);
    };
    let upper = match (p.minor, p.patch) {
        (Some(minor), Some(_)) => Version::new(major, bump(minor, input)?, 0),
        _ => Version::new(bump(major, input)?, 0, 0),
    };
    Ok(vec![
        Comparator::new(Op::Ge, p.floor()),
        Comparator::new(Op::Lt, upper),
    ])
}

/// `^` on a partial version keeps every specified component fixed; on a full
/// version it fixes the leftmost non-zero component.
fn caret(p: &Partial, input: &str) -> Result<Vec<Comparator>, VersoError> {
    let (Some(major), Some(minor), Some(patch)) = (p.major, p.minor, p.patch) else {
        return xrange(None, p, input);
    };
    let upper = if major > 0 {
        Version::new(bump(major, input)?, 0, 0)
    } else if minor > 0 {
        Version::new(0, bump(minor, input)?, 0)
    } else {
        Version::new(0, 0, bump(patch, input)?)
    };
    Ok(vec![
        Comparator::new(Op::Ge, p.floor()),
        Comparator::new(Op::Lt, upper),
    ])
}

fn hyphen(low: &str, high: &str, input: &str) -> Result<Vec<Comparator>, VersoError> {
    let low = Partial::parse(low)?;
    let high = Partial::parse(high)?;

    let mut comparators = Vec::with_capacity(2);
    if low.major.is_some() {
        comparators.push(Comparator::new(Op::Ge, low.floor()));
    }
    if high.is_exact() {
        comparators.push(Comparator::new(Op::Le, high.floor()));
    } else if high.major.is_some() {
        comparators.push(Comparator::new(Op::Lt, high.ceiling(input)?));
    }
    if comparators.is_empty() {
        comparators.push(Comparator::Any);
    }
    Ok(comparators)
}
