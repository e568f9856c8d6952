//! Datagram Channel
//!
//! Wraps a UDP socket with a reusable receive buffer and size-checked sends.
//!
//! The channel is the crate's network-environment bracket: binding acquires
//! the socket, dropping the value releases it. All datagram I/O for a
//! process role happens strictly within this value's lifetime.

use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use bytes::Bytes;

use crate::error::{EchogramError, Result};

/// A connectionless, unordered, unacknowledged packet endpoint
pub struct DatagramChannel {
    /// The underlying UDP socket
    socket: UdpSocket,

    /// Scratch buffer reused across receive calls
    recv_buf: Vec<u8>,

    /// Maximum payload size enforced on send
    max_payload: usize,
}

impl DatagramChannel {
    /// Bind a channel to a local address.
    ///
    /// Failure here is fatal at startup: there is no recovery from an
    /// unusable transport.
    pub fn bind(addr: impl ToSocketAddrs, max_payload: usize) -> Result<Self> {
        let socket = UdpSocket::bind(addr)
            .map_err(|e| EchogramError::TransportInit(format!("bind failed: {}", e)))?;

        Ok(Self {
            socket,
            recv_buf: vec![0; max_payload],
            max_payload,
        })
    }

    /// Fix the remote peer address, enabling `send`/`recv`.
    ///
    /// A connected datagram socket is a convenience only: the same semantics
    /// are available through `send_to`/`recv_from`.
    pub fn connect(&self, peer: impl ToSocketAddrs) -> Result<()> {
        self.socket
            .connect(peer)
            .map_err(|e| EchogramError::TransportInit(format!("connect failed: {}", e)))
    }

    /// Local address the channel is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Set the receive timeout. `None` blocks forever, the default.
    ///
    /// This is the cancellation hook: a caller that needs to unblock a
    /// pending receive (shutdown, reply deadline) sets a timeout and treats
    /// the resulting timeout error as a tick, not a failure.
    pub fn set_recv_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.socket.set_read_timeout(timeout)?;
        Ok(())
    }

    /// Block until one datagram arrives from any sender.
    ///
    /// The returned payload is truncated to the byte count reported by this
    /// receive call. The scratch buffer is reused and may still hold trailing
    /// bytes from a previous, longer datagram; the truncation happens on
    /// every call, never relying on buffer reuse being safe.
    pub fn recv_from(&mut self) -> Result<(Bytes, SocketAddr)> {
        let (n, from) = self.socket.recv_from(&mut self.recv_buf)?;
        Ok((Bytes::copy_from_slice(&self.recv_buf[..n]), from))
    }

    /// Block until one datagram arrives from the connected peer.
    pub fn recv(&mut self) -> Result<Bytes> {
        let n = self.socket.recv(&mut self.recv_buf)?;
        Ok(Bytes::copy_from_slice(&self.recv_buf[..n]))
    }

    /// Send one payload to an explicit address.
    pub fn send_to(&self, payload: &[u8], peer: SocketAddr) -> Result<usize> {
        self.check_len(payload)?;
        self.socket
            .send_to(payload, peer)
            .map_err(|e| EchogramError::Send(format!("send to {} failed: {}", peer, e)))
    }

    /// Send one payload to the connected peer.
    pub fn send(&self, payload: &[u8]) -> Result<usize> {
        self.check_len(payload)?;
        self.socket
            .send(payload)
            .map_err(|e| EchogramError::Send(format!("send failed: {}", e)))
    }

    fn check_len(&self, payload: &[u8]) -> Result<()> {
        if payload.len() > self.max_payload {
            return Err(EchogramError::PayloadTooLarge {
                len: payload.len(),
                max: self.max_payload,
            });
        }
        Ok(())
    }
}
