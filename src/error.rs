// src/error.rs

use std::num::ParseIntError;

use reqwest::StatusCode;
use thiserror::Error;

/// Problems resolving the document address before anything is fetched.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid document URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {scheme:?} in {url} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },
}

/// The document could not be retrieved. Always fatal to the run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Unreachable host, refused connection, transport failure or unreadable body.
    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned non-success status {status}")]
    Status { url: String, status: StatusCode },
}

/// A group of three cells that does not read as (int, glyph, int).
///
/// Only produced and consumed inside the record parser; the group is skipped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("x cell {value:?} is not a coordinate: {source}")]
    InvalidX {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("y cell {value:?} is not a coordinate: {source}")]
    InvalidY {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Parses, but leaves no room for the `+ 1` that sizes the grid.
    #[error("{axis} coordinate {value} is too large to size a grid")]
    Overflow { axis: char, value: usize },
}
