//! Error types for echogram
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using EchogramError
pub type Result<T> = std::result::Result<T, EchogramError>;

/// Unified error type for echogram operations
#[derive(Debug, Error)]
pub enum EchogramError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// The datagram channel could not be created, bound, or connected.
    /// Fatal at startup, no recovery.
    #[error("Transport init error: {0}")]
    TransportInit(String),

    /// A send to the peer failed. Recoverable: callers report it and decide
    /// whether to keep the session going.
    #[error("Send failed: {0}")]
    Send(String),

    /// An outbound payload exceeds the configured maximum datagram size.
    #[error("Payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },

    // -------------------------------------------------------------------------
    // Client Errors
    // -------------------------------------------------------------------------
    /// The interactive input source is exhausted or errored. Ends the client
    /// loop cleanly, no retry.
    #[error("Input closed")]
    InputClosed,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EchogramError {
    /// Whether this error is a receive timeout (the cancellable-wait tick or
    /// an expired reply deadline) rather than a hard transport failure.
    pub fn is_timeout(&self) -> bool {
        match self {
            EchogramError::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
            ),
            _ => false,
        }
    }
}
