use std::net::SocketAddr;
use std::sync::Arc;

use catalog_rs::models::Catalog;
use catalog_rs::{create_app, AppState};
use reqwest::Client;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A live server on an ephemeral port, shut down when dropped
pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        Self::with_catalog(Catalog::seed()).await
    }

    pub async fn with_catalog(catalog: Catalog) -> Self {
        let state = AppState::new(Arc::new(catalog)).expect("Failed to create app state");
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr: SocketAddr = listener.local_addr().expect("Failed to read local addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Test server failed");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{}", addr),
            shutdown: Some(shutdown_tx),
        }
    }

    pub async fn get_text(&self, path: &str) -> (u16, String) {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        let body = response.text().await.expect("Failed to read body");
        (status, body)
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
