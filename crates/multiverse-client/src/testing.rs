//! Test utilities for multiverse-client
//!
//! Provides helpers for running integration tests against an in-process server.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::{MultiverseClient, Result};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);
const TEST_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: MultiverseClient,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Serve a ready-made router on an ephemeral port
    pub async fn start(router: axum::Router) -> Result<Self> {
        Self::start_with(|_| router).await
    }

    /// Bind an ephemeral port first, then build the router from the
    /// server's base URL so that absolute links point back at it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use multiverse_client::testing::TestServer;
    /// use multiverse_api::{create_router, AppState};
    ///
    /// let server = TestServer::start_with(|base_url| {
    ///     create_router(AppState::with_public_url(dataset, base_url).unwrap())
    /// })
    /// .await?;
    ///
    /// let page = server.client.list_locations(&LocationQuery::new()).await?;
    /// let second = server.client.follow(&page.info.next).await?;
    /// ```
    pub async fn start_with<F>(make_router: F) -> Result<Self>
    where
        F: FnOnce(&str) -> axum::Router,
    {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        let router = make_router(&base_url);
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let client = MultiverseClient::with_config(&base_url, TEST_TIMEOUT, TEST_CONNECT_TIMEOUT)?;

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
