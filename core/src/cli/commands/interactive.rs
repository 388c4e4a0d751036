//! Prompt loop: the terminal stand-in for the analyzer window.
//!
//! Each non-blank line is classified once and prepended to the session
//! history. Blank lines are ignored. `:history`/`:h` show the table and
//! `:quit`/`:q`/`:exit` (or end of input) end the session; those command
//! lines are never classified.

use super::{paint, truncate, write_json_line};
use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::history::History;
use colored::Colorize;
use log::info;
use std::io::{self, BufRead, IsTerminal, Write};

const TEXT_COLUMN_WIDTH: usize = 48;

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    History,
    Quit,
    Text(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":history" | ":h" => Self::History,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Text(line),
        }
    }
}

pub fn run(format: OutputFormat) -> Result<(), String> {
    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal() && format == OutputFormat::Text;
    let history = run_session(stdin.lock(), io::stdout().lock(), format, show_prompt)?;
    info!("Session ended after {} classification(s)", history.len());
    Ok(())
}

/// Read lines from `input` until `:quit` or EOF, writing results to `output`.
///
/// Returns the session history so callers can inspect what was recorded.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    format: OutputFormat,
    show_prompt: bool,
) -> Result<History, AppError> {
    let mut history = History::new();
    let mut line = String::new();

    if show_prompt {
        writeln!(output, "{}", "Enter text to analyze:".bold())?;
        writeln!(
            output,
            "{}",
            "(:history or :h shows past results, :quit, :q or :exit ends the session)".dimmed()
        )?;
    }

    loop {
        if show_prompt {
            write!(output, "> ")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\n', '\r']);

        match Input::parse(text) {
            Input::Quit => break,
            Input::History => write_history(&mut output, &history, format)?,
            Input::Text(text) => {
                let Some(entry) = history.submit(text) else {
                    continue;
                };
                match format {
                    OutputFormat::Json => write_json_line(&mut output, entry)?,
                    OutputFormat::Text => {
                        writeln!(output, "Sentiment: {}", paint(entry.label))?;
                    }
                }
            }
        }
    }

    output.flush()?;
    Ok(history)
}

fn write_history<W: Write>(
    output: &mut W,
    history: &History,
    format: OutputFormat,
) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        return write_json_line(output, history);
    }

    if history.is_empty() {
        writeln!(output, "No analyses yet")?;
        return Ok(());
    }

    writeln!(
        output,
        "{}",
        format!("{:<TEXT_COLUMN_WIDTH$}  Result", "Analyzed Text")
            .as_str()
            .bold()
    )?;
    for entry in history {
        writeln!(
            output,
            "{:<TEXT_COLUMN_WIDTH$}  {}",
            truncate(&entry.text, TEXT_COLUMN_WIDTH),
            paint(entry.label)
        )?;
    }
    Ok(())
}
