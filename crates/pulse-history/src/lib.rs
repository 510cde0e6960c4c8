// File: crates/pulse-history/src/lib.rs
// Summary: History-API client: request building, fetch, payload decoding, load gate.

pub mod client;
pub mod error;
pub mod gate;
pub mod request;

pub use client::HistoryClient;
pub use error::HistoryError;
pub use gate::{LoadGate, LoadPermit};
pub use request::{HistoryRequest, TimeRange};
