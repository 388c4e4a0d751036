pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sentiment")]
#[command(author, version, about = "Classify text as Positive, Negative or Neutral", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Log classification details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PolarityArg {
    Positive,
    Negative,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify lines typed at a prompt and keep a session history (default)
    ///
    /// Every non-blank line is classified, except these prompt commands,
    /// which are never classified:
    ///
    ///   :history, :h   show past results, newest first
    ///
    ///   :quit, :q, :exit   end the session (so does end of input)
    #[command(verbatim_doc_comment)]
    Interactive,

    /// Classify a single text
    Classify {
        /// Text to classify; reads stdin when omitted or "-"
        text: Vec<String>,

        /// Show scores and matched keywords
        #[arg(short, long)]
        explain: bool,
    },

    /// List the keyword sets
    Keywords {
        /// Show only one polarity
        #[arg(short, long)]
        polarity: Option<PolarityArg>,
    },
}

impl Cli {
    /// Default log filter for this invocation
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        None | Some(Commands::Interactive) => commands::interactive::run(cli.format),
        Some(Commands::Classify { text, explain }) => {
            commands::classify::run(&text, explain, cli.format)
        }
        Some(Commands::Keywords { polarity }) => commands::keywords::run(polarity, cli.format),
    }
}
