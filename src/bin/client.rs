//! echogram Client Binary
//!
//! Interactive command-line client for echogram.

use std::io;

use clap::Parser;
use echogram::{Client, Config, EchogramError};
use tracing_subscriber::{fmt, EnvFilter};

/// echogram Client
#[derive(Parser, Debug)]
#[command(name = "echogram-client")]
#[command(about = "Interactive UDP client for the echogram server")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:1234")]
    server: String,

    /// Reply timeout in milliseconds (0 waits forever)
    #[arg(long, default_value = "0")]
    recv_timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,echogram=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder()
        .peer_addr(&args.server)
        .recv_timeout_ms(args.recv_timeout_ms)
        .build();

    let mut client = match Client::connect(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect: {}", e);
            std::process::exit(1);
        }
    };

    match client.run(io::stdin().lock(), io::stdout()) {
        // End of input is a clean way to leave the session
        Ok(()) | Err(EchogramError::InputClosed) => tracing::info!("Session ended"),
        Err(e) => {
            tracing::error!("Client error: {}", e);
            std::process::exit(1);
        }
    }
}
