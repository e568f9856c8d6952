//! Network Module
//!
//! UDP datagram channel and the client/server session loops.
//!
//! ## Architecture
//! - Single-threaded, blocking I/O on both sides
//! - One datagram channel per process role, exclusively owned by its loop
//! - Server sessions keyed by sender address, replies go to that address
//! - Cancellable waits via a shutdown flag plus a periodic receive timeout

mod channel;
mod client;
mod server;
mod session;

pub use channel::DatagramChannel;
pub use client::Client;
pub use server::{Server, ShutdownHandle};
pub use session::{Session, SessionState};
