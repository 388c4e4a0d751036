pub mod classify;
pub mod interactive;
pub mod keywords;

use crate::classify::Label;
use crate::error::AppError;
use colored::{ColoredString, Colorize};
use std::io::Write;

/// Write a value as pretty-printed JSON.
fn write_json_pretty<W: Write>(out: &mut W, value: &impl serde::Serialize) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write a value as a single line of JSON.
fn write_json_line<W: Write>(out: &mut W, value: &impl serde::Serialize) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Label name in its display colour.
fn paint(label: Label) -> ColoredString {
    let name = label.as_str();
    match label {
        Label::Positive => name.green().bold(),
        Label::Negative => name.red().bold(),
        Label::Neutral => name.yellow().bold(),
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("good", 10), "good");
    }

    #[test]
    fn test_truncate_long_text() {
        let short = truncate("abcdefghij", 5);
        assert_eq!(short, "abcd…");
        assert_eq!(short.chars().count(), 5);
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééé", 3), "éé…");
    }
}
