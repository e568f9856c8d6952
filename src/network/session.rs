//! Session State Machine
//!
//! Tracks one peer's exchange from first contact to its terminating event.
//! Pure state transitions: all datagram I/O stays in the server loop, which
//! sends whatever reply `on_datagram` hands back.

use std::net::SocketAddr;

use bytes::Bytes;

use crate::protocol::{classify, Command};

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Initial state: waiting for a command from the peer
    Listening,

    /// Continuous echo mode: every inbound payload is sent back verbatim
    EchoActive,

    /// The terminating event was seen; the session is over
    Terminated,
}

/// Per-peer session, keyed by the sender address that opened it
#[derive(Debug)]
pub struct Session {
    peer: SocketAddr,
    state: SessionState,
}

impl Session {
    /// Start a session for a peer in the `Listening` state
    pub fn new(peer: SocketAddr) -> Self {
        Self {
            peer,
            state: SessionState::Listening,
        }
    }

    /// The peer address this session belongs to
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session has reached its terminating event
    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Advance the state machine with one inbound payload.
    ///
    /// Returns the reply to send back to the peer, if any. The first echo
    /// round returns the `ECHO` trigger payload itself, mirroring it as the
    /// acknowledgment of entering echo mode.
    pub fn on_datagram(&mut self, payload: Bytes) -> Option<Bytes> {
        match self.state {
            SessionState::Listening => match classify(&payload) {
                Command::Terminate => {
                    self.state = SessionState::Terminated;
                    None
                }
                Command::Acknowledge => {
                    self.state = SessionState::Terminated;
                    Some(payload)
                }
                Command::EchoStart => {
                    self.state = SessionState::EchoActive;
                    Some(payload)
                }
                Command::Data => {
                    // Known gap: data outside a session is dropped without
                    // any reply, so a peer gets no "not in a session" hint.
                    tracing::debug!(peer = %self.peer, len = payload.len(),
                        "ignoring unrecognized payload outside a session");
                    None
                }
            },
            SessionState::EchoActive => match classify(&payload) {
                Command::Terminate => {
                    self.state = SessionState::Terminated;
                    None
                }
                // Inside echo mode only EXIT is a command; everything else,
                // keywords included, is data to echo verbatim.
                _ => Some(payload),
            },
            SessionState::Terminated => None,
        }
    }
}
