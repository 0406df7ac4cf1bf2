use verso_range::{alias, Range, Version};
use verso_util::errors::VersoResult;
use verso_util::progress::{status, Tone};

/// Prints `true` or `false` and returns the answer; the caller turns it into
/// the exit status.
pub fn exec(version: &str, range: &str, verbose: bool) -> VersoResult<bool> {
    let parsed_version = Version::parse(version)?;
    let parsed_range = Range::parse(&alias::expand(range)?)?;
    let ok = parsed_range.satisfies(&parsed_version);

    if verbose {
        let tone = if ok { Tone::Action } else { Tone::Warn };
        status(tone, "Checked", &format!("{parsed_version} against {parsed_range}"));
    }
    println!("{ok}");
    Ok(ok)
}
