//! Error types

use thiserror::Error;

/// Errors raised at the edges of the state machines.
///
/// The reducers themselves are infallible; only decoding of server messages
/// can fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown socket event: {0}")]
    UnknownEvent(String),
    #[error("malformed payload for socket event {event}: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed socket message: {0}")]
    Envelope(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
