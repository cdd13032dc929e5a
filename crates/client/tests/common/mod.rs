use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use expertdb_client::{ApiClient, ClientConfig, MemorySessionStore, TransportConfig};

/// Serve `router` on an ephemeral local port and return its API root URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// An API root on a port nothing listens on.
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

/// Build a real HTTP client against `base_url`.
pub fn client_for(base_url: &str, timeout: Duration) -> (ApiClient, Arc<MemorySessionStore>) {
    let config = ClientConfig {
        transport: TransportConfig {
            base_url: base_url.to_string(),
            timeout,
            ..TransportConfig::default()
        },
        ..ClientConfig::default()
    };
    let store = Arc::new(MemorySessionStore::new());
    let client = ApiClient::with_store(&config, store.clone()).unwrap();
    (client, store)
}
