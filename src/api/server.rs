//! API server lifecycle: bind → spawn background task → return handle
//! with a shutdown channel.

use std::net::SocketAddr;

use tokio::sync::oneshot;

use crate::api::router::api_router;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read local address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

/// Handle to a running API server.
#[derive(Debug)]
pub struct ApiServer {
    pub local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }
}

/// Bind `addr` and serve the API in a background tokio task.
///
/// Port 0 binds an ephemeral port; the handle carries the resolved address.
pub async fn start_server(state: AppState, addr: SocketAddr) -> Result<ApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    let app = api_router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%local_addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        local_addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::inference::{InferenceEngine, SymptomVocabulary};

    fn test_state() -> AppState {
        AppState::new(
            open_memory_database().unwrap(),
            InferenceEngine::new(SymptomVocabulary::default(), None),
        )
    }

    #[tokio::test]
    async fn start_on_ephemeral_port_and_stop() {
        let mut server = start_server(test_state(), "127.0.0.1:0".parse().unwrap())
            .await
            .expect("server should start");
        assert_ne!(server.local_addr.port(), 0);
        server.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_server(test_state(), "127.0.0.1:0".parse().unwrap())
            .await
            .expect("server should start");
        server.shutdown();
        server.shutdown();
    }

    #[tokio::test]
    async fn binding_a_taken_port_fails() {
        let server = start_server(test_state(), "127.0.0.1:0".parse().unwrap())
            .await
            .unwrap();
        let err = start_server(test_state(), server.local_addr)
            .await
            .expect_err("second bind should fail");
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
