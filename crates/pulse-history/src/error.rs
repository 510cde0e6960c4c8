// File: crates/pulse-history/src/error.rs
// Summary: Error taxonomy for the history data source.

use thiserror::Error;

/// Failures raised before or during a history fetch. Validation failures
/// are caught before any request is built; the rest surface the data
/// source's status or transport problem to the caller. An empty result is
/// never an error.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("history API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport failure talking to the history API")]
    Transport(#[from] reqwest::Error),

    #[error("malformed history payload")]
    Decode(#[from] serde_json::Error),
}
