// src/config.rs

use url::Url;

use crate::error::ConfigError;

/// The published document holding the coordinate table.
pub const DEFAULT_DOCUMENT_URL: &str = "https://docs.google.com/document/d/e/2PACX-1vRPzbNQcx5UriHSbZ-9vmsTow_R6RRe7eyAU60xIF9Dlz-vaHiHNO2TKgDi7jy4ZpTpNqM7EvEcfr_p/pub";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub url: Url,
}

impl Config {
    /// Build from command-line arguments (program name already stripped).
    /// The first argument, if any, replaces the default document URL.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        match args.into_iter().next() {
            Some(raw) => Ok(Self {
                url: parse_document_url(&raw)?,
            }),
            None => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_DOCUMENT_URL).expect("default document URL should parse"),
        }
    }
}

fn parse_document_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            url: url.to_string(),
            scheme: other.to_string(),
        }),
    }
}
