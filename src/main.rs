use std::{env, io};

use anyhow::{Context, Result};
use reqwest::Client;
use secretgrid::config::Config;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries only the grid) ─────
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,secretgrid=info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // ─── 2) resolve document address ─────────────────────────────────
    let config = Config::from_args(env::args().skip(1)).context("reading arguments")?;
    info!(url = %config.url, "startup");

    // ─── 3) fetch, decode & print ────────────────────────────────────
    let client = Client::new();
    let stdout = io::stdout();
    secretgrid::run(&client, &config, io::BufWriter::new(stdout.lock())).await
}
