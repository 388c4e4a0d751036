use super::write_json_pretty;
use crate::classify::{KeywordSet, Polarity, NEGATIVE, POSITIVE};
use crate::cli::{OutputFormat, PolarityArg};
use crate::error::AppError;
use colored::Colorize;
use std::io::{self, Write};

/// Keyword sets to show, in display order.
fn selected(polarity: Option<PolarityArg>) -> Vec<KeywordSet> {
    match polarity {
        Some(PolarityArg::Positive) => vec![POSITIVE],
        Some(PolarityArg::Negative) => vec![NEGATIVE],
        None => vec![POSITIVE, NEGATIVE],
    }
}

pub fn run(polarity: Option<PolarityArg>, format: OutputFormat) -> Result<(), String> {
    let mut out = io::stdout().lock();
    write_keywords(&mut out, polarity, format)?;
    Ok(())
}

/// Write the selected keyword sets as a listing or a `{ polarity: [words] }` object.
pub fn write_keywords<W: Write>(
    out: &mut W,
    polarity: Option<PolarityArg>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let sets = selected(polarity);

    if format == OutputFormat::Json {
        let output: serde_json::Map<String, serde_json::Value> = sets
            .iter()
            .map(|set| (set.polarity.as_str().to_owned(), set.words().into()))
            .collect();
        return write_json_pretty(out, &output);
    }

    for (i, set) in sets.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        let heading = format!("{} ({})", set.polarity.as_str(), set.len());
        let heading = match set.polarity {
            Polarity::Positive => heading.as_str().bold().green(),
            Polarity::Negative => heading.as_str().bold().red(),
        };
        writeln!(out, "{heading}")?;
        for word in set.words() {
            writeln!(out, "  {word}")?;
        }
    }

    Ok(())
}
