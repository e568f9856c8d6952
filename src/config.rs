//! Configuration for echogram
//!
//! Centralized configuration with sensible defaults.

use crate::protocol::MAX_PAYLOAD;

/// Main configuration for an echogram endpoint (server or client)
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server listen address (host:port)
    pub listen_addr: String,

    /// Client peer address (host:port), fixed at startup
    pub peer_addr: String,

    /// Maximum datagram payload size in bytes
    pub max_payload: usize,

    // -------------------------------------------------------------------------
    // Server Behavior
    // -------------------------------------------------------------------------
    /// Whether the server stops after one session or keeps listening
    pub serve_mode: ServeMode,

    /// How often a blocked receive wakes to check the shutdown flag
    /// (milliseconds). 0 disables the tick: the receive blocks until a
    /// datagram arrives and shutdown is only honored afterwards.
    pub shutdown_poll_ms: u64,

    // -------------------------------------------------------------------------
    // Client Behavior
    // -------------------------------------------------------------------------
    /// How long the client waits for a reply datagram (milliseconds).
    /// 0 means wait forever, matching the protocol's lack of any
    /// retransmission: a lost reply stalls the client until the operator
    /// intervenes.
    pub recv_timeout_ms: u64,
}

/// What the server does once a session reaches its terminating event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    /// Serve one session to completion, then return from the run loop
    Once,

    /// Return to listening for a new peer after each session ends
    Forever,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:1234".to_string(),
            peer_addr: "127.0.0.1:1234".to_string(),
            max_payload: MAX_PAYLOAD,
            serve_mode: ServeMode::Once,
            shutdown_poll_ms: 100,
            recv_timeout_ms: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the client peer address
    pub fn peer_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.peer_addr = addr.into();
        self
    }

    /// Set the maximum datagram payload size (in bytes)
    pub fn max_payload(mut self, size: usize) -> Self {
        self.config.max_payload = size;
        self
    }

    /// Set the serve mode (one session vs serve forever)
    pub fn serve_mode(mut self, mode: ServeMode) -> Self {
        self.config.serve_mode = mode;
        self
    }

    /// Set the shutdown poll interval (in milliseconds, 0 disables)
    pub fn shutdown_poll_ms(mut self, ms: u64) -> Self {
        self.config.shutdown_poll_ms = ms;
        self
    }

    /// Set the client reply timeout (in milliseconds, 0 waits forever)
    pub fn recv_timeout_ms(mut self, ms: u64) -> Self {
        self.config.recv_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
