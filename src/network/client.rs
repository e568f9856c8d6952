//! UDP Client
//!
//! Drives the operator-facing session loop: read a line, send it as a
//! datagram, and wait for exactly one reply unless the line was the
//! terminate command.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::config::Config;
use crate::error::{EchogramError, Result};
use crate::network::channel::DatagramChannel;
use crate::protocol::{classify, Command};

/// Interactive UDP client with a fixed peer address
pub struct Client {
    channel: DatagramChannel,
}

impl Client {
    /// Bind an ephemeral local port and fix the remote peer. Fatal on failure.
    pub fn connect(config: Config) -> Result<Self> {
        let channel = DatagramChannel::bind("0.0.0.0:0", config.max_payload)?;
        channel.connect(config.peer_addr.as_str())?;

        // Default is no timeout: a lost reply stalls the loop until the
        // operator intervenes, exactly as the protocol's best-effort
        // transport implies.
        if config.recv_timeout_ms > 0 {
            channel.set_recv_timeout(Some(Duration::from_millis(config.recv_timeout_ms)))?;
        }

        tracing::info!(peer = %config.peer_addr, "client connected");
        Ok(Self { channel })
    }

    /// Run the session loop until the operator sends the terminate command
    /// or the input source closes.
    ///
    /// `input` supplies one operator line per iteration; `out` receives the
    /// prompt and reply text. Returns `InputClosed` when `input` is
    /// exhausted or errors; callers treat that as a clean exit.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => return Err(EchogramError::InputClosed),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("input error: {}", e);
                    return Err(EchogramError::InputClosed);
                }
            }
            let payload = line.trim_end_matches(['\r', '\n']).as_bytes();

            match self.channel.send(payload) {
                Ok(n) => tracing::info!(len = n, "sent"),
                Err(e) => {
                    // Recoverable for this iteration: report and keep the
                    // loop going. The reply wait is skipped since nothing
                    // reached the peer.
                    tracing::warn!("{}", e);
                    continue;
                }
            }

            // One payload sent, at most one reply expected. The terminate
            // command expects none at all.
            if classify(payload) == Command::Terminate {
                tracing::info!("session terminated");
                return Ok(());
            }

            match self.channel.recv() {
                Ok(reply) => {
                    writeln!(out, "{}", String::from_utf8_lossy(&reply))?;
                }
                Err(e) if e.is_timeout() => {
                    tracing::warn!("no reply from peer");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
