//! # echogram
//!
//! A client-driven UDP command protocol with:
//! - A fixed keyword vocabulary matched by prefix (`EXIT`, `ACK`, `ECHO`)
//! - A per-peer server session state machine (listen, echo mode, terminate)
//! - An interactive client loop with a one-reply-per-send invariant
//! - Best-effort transport: no retransmission, no acknowledgment timeout
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────┐   datagram    ┌──────────────────┐
//! │  Client Session  │ ────────────► │  Server Session  │
//! │      Loop        │               │      Loop        │
//! └────────┬─────────┘               └────────┬─────────┘
//!          │                                  │
//!          │                                  ▼
//!          │                          ┌──────────────────┐
//!          │                          │  Command Codec   │
//!          │                          │ (prefix matcher) │
//!          │                          └────────┬─────────┘
//!          │                                   │
//!          │            reply                  ▼
//!          └◄───────── datagram ──── {ack, echo, terminate}
//! ```
//!
//! The client always initiates. The server is purely reactive and
//! single-threaded, keying session state by sender address and replying to
//! whichever address sent the current datagram.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{Config, ServeMode};
pub use error::{EchogramError, Result};
pub use network::{Client, DatagramChannel, Server, ShutdownHandle, Session, SessionState};
pub use protocol::{classify, Command};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of echogram
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
