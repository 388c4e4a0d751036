//! sentiment-server binary - classification over HTTP with a session history

use anyhow::Context;
use clap::Parser;
use sentiment::server::{serve, ServerConfig, PORT_ENV};
use std::net::IpAddr;

#[derive(Debug, Parser)]
#[command(name = "sentiment-server")]
#[command(author, version, about = "Serve keyword sentiment classification over HTTP", long_about = None)]
struct Args {
    /// Address to bind (default: 127.0.0.1)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (default: $SENTIMENT_PORT, then 3333)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log every request
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let env_port = std::env::var(PORT_ENV).ok();
    let config = ServerConfig::resolve(args.host, args.port, env_port.as_deref())?;

    serve(config)
        .await
        .with_context(|| format!("sentiment-server on {}", config.addr()))
}
