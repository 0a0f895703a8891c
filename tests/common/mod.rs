//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
pub mod helpers {
    use peakshaving_config::{ConfigStore, server::create_app};
    use std::{net::SocketAddr, sync::Arc};

    /// A server running on an ephemeral local port
    pub struct TestServer {
        pub addr: SocketAddr,
        pub store: Arc<ConfigStore>,
        pub client: reqwest::Client,
    }

    impl TestServer {
        /// Full URL for `path` on this server
        pub fn url(&self, path: &str) -> String {
            format!("http://{}{}", self.addr, path)
        }
    }

    /// Serve a fresh store with default limits
    pub async fn spawn_server() -> TestServer {
        spawn_server_with(ConfigStore::new()).await
    }

    /// Serve the given store
    pub async fn spawn_server_with(store: ConfigStore) -> TestServer {
        let store = Arc::new(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = create_app(Arc::clone(&store));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            addr,
            store,
            client: reqwest::Client::new(),
        }
    }
}
