//! Command definitions
//!
//! Classifies inbound payloads against the fixed keyword set.

/// Keyword that terminates a session
pub const EXIT_KEYWORD: &[u8] = b"EXIT";

/// Keyword that requests a single acknowledgment echo
pub const ACK_KEYWORD: &[u8] = b"ACK";

/// Keyword that enters continuous echo mode
pub const ECHO_KEYWORD: &[u8] = b"ECHO";

/// Classification of a payload's leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Payload begins with `EXIT`
    Terminate,

    /// Payload begins with `ACK`
    Acknowledge,

    /// Payload begins with `ECHO`
    EchoStart,

    /// Any payload not matching a recognized keyword (the fallback case)
    Data,
}

/// Classify a payload by comparing its prefix against the keyword set.
///
/// Matching is a byte-for-byte prefix comparison, not full-string equality:
/// a payload strictly longer than a keyword but sharing its prefix still
/// classifies as that command (`EXITnow` is `Terminate`). Checked in the
/// fixed priority order `EXIT` → `ACK` → `ECHO`; no payload can match two
/// keywords since none is a prefix of another, but the order is kept
/// explicit.
pub fn classify(payload: &[u8]) -> Command {
    if payload.starts_with(EXIT_KEYWORD) {
        Command::Terminate
    } else if payload.starts_with(ACK_KEYWORD) {
        Command::Acknowledge
    } else if payload.starts_with(ECHO_KEYWORD) {
        Command::EchoStart
    } else {
        Command::Data
    }
}
