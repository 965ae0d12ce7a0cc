use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ctsearch::config::Config;
use ctsearch::server::AppState;
use ctsearch::{Query, SearchMode};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "ctsearch", about = "Clinical trial search: expansion and synonym matching")]
struct Cli {
    /// Config file (defaults to ~/.config/ctsearch/config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default).
    Serve(ServeArgs),
    /// Run one search and print the results as JSON.
    Query(QueryArgs),
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Trial table (CSV). Overrides `[data] path`.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Listen address. Overrides `[server] bind`.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[derive(Args)]
struct QueryArgs {
    /// Trial table (CSV). Overrides `[data] path`.
    #[arg(long)]
    data: Option<PathBuf>,

    /// `expand` or `terms`. Overrides `[search] default_mode`.
    #[arg(long)]
    mode: Option<String>,

    /// Expansion hops; malformed values mean 0.
    #[arg(long)]
    steps: Option<String>,

    query: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(config, args),
        Command::Query(args) => query(config, args),
    }
}

fn serve(config: Config, args: ServeArgs) -> anyhow::Result<()> {
    let data = args.data.unwrap_or_else(|| config.data.path.clone());
    let engine = ctsearch::build_engine(&data, &config)
        .with_context(|| format!("loading trial table {}", data.display()))?;

    let addr = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("invalid [server] bind address {:?}", config.server.bind))?,
    };

    let state = Arc::new(AppState::new(Arc::new(engine), config.search.default_mode));

    tokio::runtime::Runtime::new()?.block_on(ctsearch::server::serve(
        addr,
        state,
        config.server.cors,
    ))
}

fn query(config: Config, args: QueryArgs) -> anyhow::Result<()> {
    let data = args.data.unwrap_or_else(|| config.data.path.clone());
    let engine = ctsearch::build_engine(&data, &config)
        .with_context(|| format!("loading trial table {}", data.display()))?;

    let mode_name = args.mode.as_deref().unwrap_or(&config.search.default_mode);
    let mode = SearchMode::parse(mode_name, args.steps.as_deref())?;
    let results = engine.search_summaries(&Query::new(args.query)?, mode)?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
