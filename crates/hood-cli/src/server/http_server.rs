//! HTTP server startup and lifecycle management.

use std::future::{IntoFuture, pending};
use std::net::SocketAddr;
use std::time::Instant;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::config::ServerConfig;
use crate::server::{Result, ServerError, shutdown_signal};
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Starts the HTTP server and runs it until a shutdown signal arrives.
///
/// After the signal the server stops accepting connections and waits up to
/// the configured shutdown timeout for in-flight requests.
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, server_config: ServerConfig) -> Result<()> {
    if let Err(validation_error) = server_config.validate() {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %validation_error,
            "Invalid server configuration"
        );

        return Err(ServerError::invalid_config(&validation_error));
    }

    let server_addr = server_config.server_addr();
    let listener = match TcpListener::bind(server_addr).await {
        Ok(listener) => listener,
        Err(listener_err) => {
            let error = ServerError::bind_error(server_addr, listener_err);
            tracing::error!(
                target: TRACING_TARGET_SERVER_STARTUP,
                addr = %server_addr,
                error = %error,
                error_code = error.error_code(),
                suggestion = error.suggestion(),
                "Failed to bind to address"
            );

            return Err(error);
        }
    };

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %server_addr,
        "Server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    let start_time = Instant::now();
    let (signal_tx, signal_rx) = oneshot::channel::<()>();
    let graceful = async move {
        shutdown_signal().await;
        let _ = signal_tx.send(());
    };

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(graceful)
    .into_future();

    let shutdown_timeout = server_config.shutdown_timeout();
    let deadline = async move {
        match signal_rx.await {
            Ok(()) => tokio::time::sleep(shutdown_timeout).await,
            Err(_) => pending::<()>().await,
        }
    };

    tokio::select! {
        result = server => {
            result.map_err(|err| {
                tracing::error!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    error = %err,
                    "Server encountered an error"
                );
                ServerError::Runtime(err)
            })?;
        }
        () = deadline => {
            tracing::warn!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                timeout_secs = shutdown_timeout.as_secs(),
                "Shutdown timeout elapsed, dropping in-flight requests"
            );
        }
    }

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        uptime_secs = start_time.elapsed().as_secs(),
        "Server shut down"
    );

    Ok(())
}
