use std::io;
use std::path::PathBuf;

use clap::{self, Parser};
use tracing_subscriber::EnvFilter;

use foodify_core::api::Client;
use foodify_core::config::{ClientConfig, DEFAULT_API_URL};
use foodify_core::session::SessionStore;

mod command;
mod error;
mod render;

use command::{Command, Context};

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Data directory path, holds the session
    #[arg(short, long, env = "FOODIFY_DATA", default_value = ".foodify")]
    data: PathBuf,

    /// Base url of the recipe service
    #[arg(long, env = "FOODIFY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// HS256 secret used to verify access tokens
    #[arg(long, env = "FOODIFY_TOKEN_SECRET", hide_env_values = true)]
    token_secret: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "RUST_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn init_logging(level: Option<&str>) {
    let filter = level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let config = ClientConfig::default()
        .with_base_url(args.api_url)
        .with_token_secret(args.token_secret);
    let client = Client::new(&config)?;
    tracing::debug!("using {}", client.base_url());

    let ctx = Context {
        api: &client,
        store: SessionStore::in_dir(&args.data),
        config,
    };

    let mut out = io::stdout().lock();
    command::run(args.command, &ctx, &mut out).await?;
    Ok(())
}
