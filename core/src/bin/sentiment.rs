//! sentiment binary - classify text from the command line
//!
//! With no subcommand it starts an interactive prompt that keeps a
//! newest-first history for the session.

use clap::Parser;
use sentiment::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
