//! UDP Server
//!
//! Binds to a fixed local address, receives datagrams from any sender, and
//! dispatches each to the sender's session state machine. Replies always go
//! to the address the current datagram came from, so independent clients can
//! talk to one server process.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, ServeMode};
use crate::error::Result;
use crate::network::channel::DatagramChannel;
use crate::network::session::Session;

/// UDP command/echo server
pub struct Server {
    channel: DatagramChannel,
    config: Config,

    /// Session state per sender address. Only one session is served to
    /// completion at a time, but keying by address keeps the design
    /// extensible to concurrent peers.
    sessions: HashMap<SocketAddr, Session>,

    shutdown: Arc<AtomicBool>,
}

/// Handle for requesting a server shutdown from another thread
#[derive(Debug, Clone)]
pub struct ShutdownHandle(Arc<AtomicBool>);

impl ShutdownHandle {
    /// Ask the server to stop. The run loop notices at its next poll tick.
    pub fn shutdown(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl Server {
    /// Bind the server socket. Fatal on failure.
    pub fn bind(config: Config) -> Result<Self> {
        let channel = DatagramChannel::bind(config.listen_addr.as_str(), config.max_payload)?;

        // The logical wait for a datagram is unbounded; the poll tick only
        // exists so a shutdown request can unblock a pending receive.
        if config.shutdown_poll_ms > 0 {
            channel.set_recv_timeout(Some(Duration::from_millis(config.shutdown_poll_ms)))?;
        }

        Ok(Self {
            channel,
            config,
            sessions: HashMap::new(),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Local address the server is bound to (useful with a port-0 bind)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.channel.local_addr()
    }

    /// Get a handle that can stop the run loop from another thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.shutdown))
    }

    /// Serve sessions until shutdown, or until the first session ends when
    /// configured with `ServeMode::Once`.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(addr = %self.config.listen_addr, mode = ?self.config.serve_mode,
            "server listening");

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                tracing::info!("shutdown requested, stopping");
                return Ok(());
            }

            let (payload, from) = match self.channel.recv_from() {
                Ok(received) => received,
                Err(e) if e.is_timeout() => continue,
                Err(e) => return Err(e),
            };
            tracing::debug!(peer = %from, len = payload.len(), "received datagram");

            let session = self
                .sessions
                .entry(from)
                .or_insert_with(|| Session::new(from));
            let reply = session.on_datagram(payload);
            let terminated = session.is_terminated();

            if let Some(reply) = reply {
                match self.channel.send_to(&reply, from) {
                    Ok(n) => tracing::debug!(peer = %from, len = n, "sent reply"),
                    // Best-effort delivery: a failed reply does not end the
                    // session or the server.
                    Err(e) => tracing::warn!(peer = %from, "reply failed: {}", e),
                }
            }

            if terminated {
                self.sessions.remove(&from);
                tracing::info!(peer = %from, "session ended");
                if self.config.serve_mode == ServeMode::Once {
                    return Ok(());
                }
            }
        }
    }
}
