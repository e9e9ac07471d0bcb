// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How long shutdown waits for in-flight connections to finish
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Server main loop
///
/// Accepts connections and hands each to a spawned task. A shutdown
/// notification stops accepting; in-flight connections get a drain
/// period before the loop returns.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                println!("\n[INFO] Shutdown requested, no longer accepting connections");
                break;
            }
        }
    }

    drop(listener);
    drain_connections(&active_connections).await;
    Ok(())
}

/// Wait for active connections to finish, bounded by `DRAIN_TIMEOUT`
async fn drain_connections(active_connections: &Arc<AtomicUsize>) {
    let deadline = tokio::time::Instant::now() + DRAIN_TIMEOUT;

    loop {
        let active = active_connections.load(Ordering::SeqCst);
        if active == 0 {
            println!("[INFO] All connections closed");
            break;
        }
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown drain timed out with {active} connections still active"
            ));
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_listener;

    fn test_state() -> Arc<AppState> {
        let config = Config::load_from("missing-config-file").unwrap();
        Arc::new(AppState::new(config))
    }

    #[tokio::test]
    async fn test_shutdown_posted_before_first_poll_stops_loop() {
        let addr = "127.0.0.1:0".parse().unwrap();
        let listener = create_listener(addr).unwrap();
        let shutdown = Arc::new(Notify::new());

        // The signal task may fire before the accept loop registers a
        // waiter; the stored permit must still stop the loop.
        shutdown.notify_one();

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            start_server_loop(
                listener,
                test_state(),
                Arc::new(AtomicUsize::new(0)),
                shutdown,
            ),
        )
        .await;
        assert!(result.is_ok(), "accept loop did not observe the shutdown");
    }

    #[tokio::test]
    async fn test_shutdown_posted_while_loop_runs_stops_loop() {
        let addr = "127.0.0.1:0".parse().unwrap();
        let listener = create_listener(addr).unwrap();
        let shutdown = Arc::new(Notify::new());

        let notifier = Arc::clone(&shutdown);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            notifier.notify_one();
        });

        let result = tokio::time::timeout(
            Duration::from_secs(2),
            start_server_loop(
                listener,
                test_state(),
                Arc::new(AtomicUsize::new(0)),
                shutdown,
            ),
        )
        .await;
        assert!(result.is_ok(), "accept loop did not observe the shutdown");
    }
}
