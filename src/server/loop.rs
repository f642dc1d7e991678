// Server loop module
// Accepts connections until a shutdown signal arrives, then drains

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How long to wait for open connections after the listener closes
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Main accept loop.
///
/// Runs until the shutdown signal fires, then closes the listener and waits
/// for in-flight connections to finish within the grace period.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown_requested();
                break;
            }
        }
    }

    // Stop accepting, then let in-flight requests complete
    drop(listener);
    drain_connections(&state).await;
}

/// Wait for active connections to reach zero, bounded by the grace period
async fn drain_connections(state: &Arc<AppState>) {
    let deadline = tokio::time::Instant::now() + SHUTDOWN_GRACE;

    loop {
        let open = state.active_connections.load(Ordering::SeqCst);
        if open == 0 {
            logger::log_shutdown_complete();
            return;
        }
        if tokio::time::Instant::now() >= deadline {
            logger::log_shutdown_timeout(open);
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_shutdown_signal_stops_the_loop() {
        let listener = super::super::create_reusable_listener("127.0.0.1:0".parse().unwrap())
            .unwrap();
        let cfg = Config::load_from("nonexistent-config").unwrap();
        let state = Arc::new(AppState::new(cfg));
        let shutdown = Arc::new(Notify::new());

        let loop_state = Arc::clone(&state);
        let loop_shutdown = Arc::clone(&shutdown);
        let handle =
            tokio::spawn(
                async move { start_server_loop(listener, loop_state, loop_shutdown).await },
            );

        // Give the loop a moment to park on accept, then stop it
        tokio::time::sleep(Duration::from_millis(20)).await;
        shutdown.notify_waiters();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("loop should exit promptly")
            .expect("task should not panic");
    }
}
