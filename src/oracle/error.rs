//! Oracle failures.
//!
//! All variants are handled the same way by
//! [`resolve_reply`](super::resolve_reply): the Hare plays a random legal
//! move instead. They stay distinct for logging.

/// Why an oracle reply could not be used.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Transport or service failure.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The integrator gave up waiting.
    #[error("oracle timed out")]
    Timeout,

    /// The reply was not a `{"from": n, "to": m}` object.
    #[error("malformed oracle reply: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The reply named a move outside the legal set it was given.
    #[error("oracle proposed {from}->{to}, which is not a legal hare move")]
    Rejected { from: i64, to: i64 },
}
