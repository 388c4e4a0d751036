use super::{paint, write_json_line};
use crate::classify::{analyze, KeywordHit};
use crate::cli::OutputFormat;
use crate::error::AppError;
use colored::Colorize;
use std::io::{self, Read, Write};

pub fn run(words: &[String], explain: bool, format: OutputFormat) -> Result<(), String> {
    let text = read_input(words, io::stdin().lock())?;
    let mut out = io::stdout().lock();
    write_result(&mut out, &text, explain, format)?;
    Ok(())
}

/// The text to classify: the words joined by spaces, or all of `stdin`
/// when no words were given or the only word is "-".
fn read_input<R: Read>(words: &[String], mut stdin: R) -> Result<String, AppError> {
    if words.is_empty() || matches!(words, [word] if word == "-") {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(words.join(" "))
}

/// Classify `text` and write the result. Blank text writes nothing.
pub fn write_result<W: Write>(
    out: &mut W,
    text: &str,
    explain: bool,
    format: OutputFormat,
) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Ok(());
    }

    let text = text.trim_end_matches(['\n', '\r']);
    let analysis = analyze(text);

    if format == OutputFormat::Json {
        let value = if explain {
            serde_json::json!({
                "text": text,
                "label": analysis.label,
                "positive_score": analysis.positive_score,
                "negative_score": analysis.negative_score,
                "positive_hits": analysis.positive_hits,
                "negative_hits": analysis.negative_hits,
            })
        } else {
            serde_json::json!({
                "text": text,
                "label": analysis.label,
            })
        };
        return write_json_line(out, &value);
    }

    writeln!(out, "Sentiment: {}", paint(analysis.label))?;
    if explain {
        writeln!(
            out,
            "  {} {}{}",
            "positive:".green(),
            analysis.positive_score,
            describe_hits(&analysis.positive_hits)
        )?;
        writeln!(
            out,
            "  {} {}{}",
            "negative:".red(),
            analysis.negative_score,
            describe_hits(&analysis.negative_hits)
        )?;
    }
    Ok(())
}

/// " (great x2, good)" or "" when nothing matched.
fn describe_hits(hits: &[KeywordHit]) -> String {
    if hits.is_empty() {
        return String::new();
    }
    let parts: Vec<_> = hits
        .iter()
        .map(|hit| {
            if hit.count > 1 {
                format!("{} x{}", hit.keyword, hit.count)
            } else {
                hit.keyword.to_owned()
            }
        })
        .collect();
    format!(" ({})", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn render(text: &str, explain: bool, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_result(&mut out, text, explain, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn test_no_words_reads_stdin() {
        let text = read_input(&[], Cursor::new("from stdin\nsecond line\n")).unwrap();
        assert_eq!(text, "from stdin\nsecond line\n");
    }

    #[test]
    fn test_dash_reads_stdin() {
        let text = read_input(&words(&["-"]), Cursor::new("piped awful text")).unwrap();
        assert_eq!(text, "piped awful text");
    }

    #[test]
    fn test_words_ignore_stdin() {
        let text = read_input(&words(&["a", "b"]), Cursor::new("unused")).unwrap();
        assert_eq!(text, "a b");

        // "-" among other words is just a word
        let text = read_input(&words(&["good", "-", "bad"]), Cursor::new("unused")).unwrap();
        assert_eq!(text, "good - bad");
    }

    #[test]
    fn test_stdin_text_is_classified() {
        let text = read_input(&[], Cursor::new("terrible service\n")).unwrap();
        let out = render(&text, false, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["text"], "terrible service");
        assert_eq!(value["label"], "Negative");
    }

    #[test]
    fn test_blank_writes_nothing() {
        assert_eq!(render("  \n", false, OutputFormat::Text), "");
        assert_eq!(render("", true, OutputFormat::Json), "");
    }

    #[test]
    fn test_text_output() {
        let out = render("What a wonderful day", false, OutputFormat::Text);
        assert!(out.starts_with("Sentiment: "));
        assert!(out.contains("Positive"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_explain_lists_hits() {
        let out = render("great great but sad", true, OutputFormat::Text);
        assert!(out.contains("great x2"));
        assert!(out.contains("(sad)"));
    }

    #[test]
    fn test_json_output() {
        let out = render("I disliked it\n", false, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["text"], "I disliked it");
        assert_eq!(value["label"], "Negative");
        assert!(value.get("positive_score").is_none());
    }

    #[test]
    fn test_json_explain() {
        let out = render("good bad", true, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["label"], "Neutral");
        assert_eq!(value["positive_score"], 1);
        assert_eq!(value["negative_score"], 1);
        assert_eq!(value["positive_hits"][0]["keyword"], "good");
    }

    #[test]
    fn test_describe_hits() {
        assert_eq!(describe_hits(&[]), "");
        let hits = [
            KeywordHit {
                keyword: "good",
                count: 1,
            },
            KeywordHit {
                keyword: "great",
                count: 3,
            },
        ];
        assert_eq!(describe_hits(&hits), " (good, great x3)");
    }
}
