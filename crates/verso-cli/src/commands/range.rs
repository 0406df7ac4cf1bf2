use verso_range::{alias, Range};
use verso_util::errors::VersoResult;
use verso_util::progress::{status, Tone};

pub fn exec(range: &str, verbose: bool) -> VersoResult<()> {
    let parsed = Range::parse(&alias::expand(range)?)?;
    if verbose {
        status(
            Tone::Info,
            "Parsed",
            &format!("'{}' into {} comparator set(s)", parsed.as_str(), parsed.sets().len()),
        );
    }
    println!("{parsed}");
    Ok(())
}
