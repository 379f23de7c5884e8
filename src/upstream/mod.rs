//! Clients for the upstream HTTP services the tools depend on.
//!
//! Each client is a thin wrapper over `reqwest::blocking`; callers run
//! them on `tokio::task::spawn_blocking`. None of them retries, caches,
//! or shares state between calls; every invocation issues its own
//! request.

pub mod hf_inference;
pub mod nominatim;
pub mod open_meteo;

use thiserror::Error;

/// User-Agent sent on outbound requests (Nominatim requires one).
pub const USER_AGENT: &str = concat!("toolbox-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Failures reaching or interpreting an upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The service answered 200 but reported an error payload.
    #[error("{0}")]
    Rejected(String),
}

impl UpstreamError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}
