//! Integration tests for echogram
//!
//! Full client/server exchanges over loopback UDP sockets.

use std::io::{Cursor, ErrorKind};
use std::net::{SocketAddr, UdpSocket};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use echogram::{Client, Config, ServeMode, Server, ShutdownHandle};

/// Bind a server on an ephemeral loopback port and run it on its own thread
fn start_server(mode: ServeMode) -> (JoinHandle<()>, SocketAddr, ShutdownHandle) {
    let config = Config::builder()
        .listen_addr("127.0.0.1:0")
        .serve_mode(mode)
        .shutdown_poll_ms(20)
        .build();

    let mut server = Server::bind(config).unwrap();
    let addr = server.local_addr().unwrap();
    let shutdown = server.shutdown_handle();
    let join = thread::spawn(move || server.run().unwrap());

    (join, addr, shutdown)
}

fn client_socket(server: SocketAddr) -> UdpSocket {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    socket.connect(server).unwrap();
    socket
}

fn recv(socket: &UdpSocket) -> Vec<u8> {
    let mut buf = [0u8; 1024];
    let n = socket.recv(&mut buf).unwrap();
    buf[..n].to_vec()
}

fn assert_no_reply(socket: &UdpSocket) {
    socket
        .set_read_timeout(Some(Duration::from_millis(300)))
        .unwrap();
    let mut buf = [0u8; 1024];
    match socket.recv(&mut buf) {
        Ok(n) => panic!("unexpected reply: {:?}", &buf[..n]),
        Err(e) => assert!(
            matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut),
            "unexpected receive error: {}",
            e
        ),
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_scenario_exit_terminates_without_reply() {
    let (join, addr, _) = start_server(ServeMode::Once);
    let socket = client_socket(addr);

    socket.send(b"EXIT").unwrap();

    // Serve-once: the loop returns as soon as the session terminates
    join.join().unwrap();
    assert_no_reply(&socket);
}

#[test]
fn test_scenario_ack_round_trip() {
    let (join, addr, _) = start_server(ServeMode::Once);
    let socket = client_socket(addr);

    socket.send(b"ACK").unwrap();
    assert_eq!(recv(&socket), b"ACK");

    join.join().unwrap();
}

#[test]
fn test_scenario_echo_session() {
    let (join, addr, _) = start_server(ServeMode::Once);
    let socket = client_socket(addr);

    socket.send(b"ECHO").unwrap();
    assert_eq!(recv(&socket), b"ECHO"); // the trigger is mirrored first

    socket.send(b"ping").unwrap();
    assert_eq!(recv(&socket), b"ping");

    socket.send(b"EXIT").unwrap();
    join.join().unwrap();
    assert_no_reply(&socket);
}

#[test]
fn test_scenario_data_while_listening_is_ignored() {
    // Documented gap: unrecognized payloads outside a session produce no
    // reply and no transition. The server keeps listening.
    let (join, addr, _) = start_server(ServeMode::Once);
    let socket = client_socket(addr);

    socket.send(b"foo").unwrap();
    assert_no_reply(&socket);

    // Still in Listening: a follow-up ACK completes normally
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    socket.send(b"ACK").unwrap();
    assert_eq!(recv(&socket), b"ACK");

    join.join().unwrap();
}

#[test]
fn test_terminate_matches_by_prefix_over_wire() {
    let (join, addr, _) = start_server(ServeMode::Once);
    let socket = client_socket(addr);

    socket.send(b"EXITnow").unwrap();
    join.join().unwrap();
}

// =============================================================================
// Truncation Tests
// =============================================================================

#[test]
fn test_short_datagram_after_longer_one_is_truncated() {
    // The server's receive buffer is reused between calls; a short payload
    // must never leak trailing bytes from an earlier, longer one
    let (join, addr, _) = start_server(ServeMode::Once);
    let socket = client_socket(addr);

    socket.send(b"ECHO").unwrap();
    assert_eq!(recv(&socket), b"ECHO");

    socket.send(b"a considerably longer payload").unwrap();
    assert_eq!(recv(&socket), b"a considerably longer payload");

    socket.send(b"hi").unwrap();
    let reply = recv(&socket);
    assert_eq!(reply.len(), 2);
    assert_eq!(reply, b"hi");

    socket.send(b"EXIT").unwrap();
    join.join().unwrap();
}

// =============================================================================
// Serve Mode Tests
// =============================================================================

#[test]
fn test_serve_forever_handles_sequential_peers() {
    let (join, addr, shutdown) = start_server(ServeMode::Forever);

    // Two independent client instances, one session each; every reply must
    // go to the address that sent the current datagram
    let first = client_socket(addr);
    first.send(b"ACK").unwrap();
    assert_eq!(recv(&first), b"ACK");

    let second = client_socket(addr);
    second.send(b"ECHO").unwrap();
    assert_eq!(recv(&second), b"ECHO");
    second.send(b"EXIT").unwrap();

    shutdown.shutdown();
    join.join().unwrap();
}

// =============================================================================
// End-to-End Tests
// =============================================================================

#[test]
fn test_client_against_server_exit() {
    let (join, addr, _) = start_server(ServeMode::Once);

    let config = Config::builder().peer_addr(addr.to_string()).build();
    let mut client = Client::connect(config).unwrap();

    let mut out = Vec::new();
    client.run(Cursor::new("EXIT\n"), &mut out).unwrap();

    // Both sides end: the client without waiting, the server on terminate
    join.join().unwrap();
}

#[test]
fn test_client_against_server_echo_session() {
    let (join, addr, _) = start_server(ServeMode::Once);

    let config = Config::builder().peer_addr(addr.to_string()).build();
    let mut client = Client::connect(config).unwrap();

    let mut out = Vec::new();
    client
        .run(Cursor::new("ECHO\nping\nEXIT\n"), &mut out)
        .unwrap();
    join.join().unwrap();

    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("ECHO\n"), "trigger not mirrored: {:?}", shown);
    assert!(shown.contains("ping\n"), "echo not displayed: {:?}", shown);
}

#[test]
fn test_shutdown_unblocks_an_idle_server() {
    // The cancellable-wait path: no traffic at all, the run loop must still
    // notice the stop request
    let (join, _, shutdown) = start_server(ServeMode::Forever);

    shutdown.shutdown();
    join.join().unwrap();
}
