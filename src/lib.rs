pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;

use std::io::Write;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::config::Config;

/// Fetch the configured document and print its grid to `out`.
///
/// `out` is only written once the fetch has succeeded, so a failed run leaves it untouched.
pub async fn run<W: Write>(client: &Client, config: &Config, out: W) -> Result<()> {
    let html = fetch::fetch_document(client, &config.url)
        .await
        .context("fetching document")?;
    info!(bytes = html.len(), "fetched document");

    decode::render_document(&html, out).context("writing grid")?;
    Ok(())
}
