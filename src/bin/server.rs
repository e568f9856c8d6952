//! echogram Server Binary
//!
//! Starts the UDP server for echogram.

use clap::Parser;
use echogram::{Config, ServeMode, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// echogram Server
#[derive(Parser, Debug)]
#[command(name = "echogram-server")]
#[command(about = "UDP command/echo session server")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:1234")]
    listen: String,

    /// Keep listening for new sessions instead of exiting after the first
    #[arg(long)]
    serve_forever: bool,

    /// Maximum datagram payload size in bytes
    #[arg(long, default_value = "1024")]
    max_payload: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,echogram=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("echogram server v{}", echogram::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let serve_mode = if args.serve_forever {
        ServeMode::Forever
    } else {
        ServeMode::Once
    };

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .serve_mode(serve_mode)
        .max_payload(args.max_payload)
        .build();

    let mut server = match Server::bind(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
