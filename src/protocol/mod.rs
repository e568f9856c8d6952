//! Protocol Module
//!
//! Defines the command vocabulary exchanged between client and server.
//!
//! ## Wire Format
//!
//! There is no header, no length prefix, and no framing: the payload bytes
//! ARE the message. The receiver infers the logical length from the byte
//! count reported by the receive call, never from an in-band terminator.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Payload (≤ 1024 bytes)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands (ASCII, case-sensitive, matched by prefix)
//! - `EXIT` - terminate the session
//! - `ACK`  - request a single acknowledgment echo
//! - `ECHO` - enter continuous echo mode
//!
//! Any other payload is opaque data, only meaningful inside an active echo
//! session.

mod command;

pub use command::{classify, Command, ACK_KEYWORD, ECHO_KEYWORD, EXIT_KEYWORD};

/// Maximum datagram payload size in bytes
pub const MAX_PAYLOAD: usize = 1024;
