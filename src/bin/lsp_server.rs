//! HTTP Status Helper Language Server Binary Entry Point
//!
//! Speaks the Language Server Protocol over stdin/stdout using tower-lsp
//! and tokio. All logging goes to stderr so it never interferes with the
//! protocol stream.
//!
//! # Features
//!
//! - Hover tooltips for HTTP status codes
//! - Guided category/code picker for inserting a status code
//! - Opening the MDN reference page for any known code

use http_status_helper::lsp_server::Backend;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    // RUST_LOG controls dependency logging; our own messages go through the
    // LSP client or stderr.
    env_logger::init();

    eprintln!("[http-status-lsp] Starting HTTP Status Helper Language Server...");
    eprintln!("[http-status-lsp] Version: {}", env!("CARGO_PKG_VERSION"));

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);

    eprintln!("[http-status-lsp] Server ready, listening on stdin/stdout");

    let server = Server::new(stdin, stdout, socket);

    tokio::select! {
        _ = server.serve(service) => {
            eprintln!("[http-status-lsp] Server finished");
        }
        _ = shutdown_signal() => {
            eprintln!("[http-status-lsp] Received shutdown signal");
        }
    }

    eprintln!("[http-status-lsp] Server shutting down gracefully");
}

/// Waits for SIGINT or SIGTERM (Ctrl+C on Windows).
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = sigint.recv() => {
                eprintln!("[http-status-lsp] Received SIGINT");
            }
            _ = sigterm.recv() => {
                eprintln!("[http-status-lsp] Received SIGTERM");
            }
        }
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        eprintln!("[http-status-lsp] Received Ctrl+C");
    }
}
