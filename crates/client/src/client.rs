use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tokio::sync::broadcast;

use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportError};
use crate::request::RequestDescriptor;
use crate::session::{MemorySessionStore, Session, SessionEvent, SessionStore};
use crate::transport::{HttpTransport, RawResponse, Transport};

/// A [`Transport`] plus the two cross-cutting interceptors.
///
/// Outgoing: attaches `Authorization: Bearer <token>` when the session
/// holds a token. Incoming: on 401, expires the session.
pub struct TransportClient {
    transport: Arc<dyn Transport>,
    session: Session,
}

impl TransportClient {
    pub fn new(transport: Arc<dyn Transport>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            transport,
            session: Session::new(store),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send `request` through both interceptors.
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<RawResponse, TransportError> {
        let headers = self.outgoing_headers();
        let response = self.transport.send(request, &headers).await?;
        self.on_response(&response);
        Ok(response)
    }

    fn outgoing_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!("Stored token is not a valid header value, sending unauthenticated");
                }
            }
        }
        headers
    }

    fn on_response(&self, response: &RawResponse) {
        if response.status == 401 {
            self.session.expire();
        }
    }
}

/// Client for the ExpertDB API.
///
/// Cheap to clone; clones share the transport and the session.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<TransportClient>,
}

impl ApiClient {
    /// Build an HTTP client with an in-memory session store.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Self::with_store(config, Arc::new(MemorySessionStore::new()))
    }

    /// Build an HTTP client over a caller-supplied session store.
    pub fn with_store(
        config: &ClientConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(&config.transport)?;
        Ok(Self::with_transport(Arc::new(transport), store))
    }

    /// Build a client over any [`Transport`].
    pub fn with_transport(transport: Arc<dyn Transport>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            inner: Arc::new(TransportClient::new(transport, store)),
        }
    }

    pub fn transport_client(&self) -> &TransportClient {
        &self.inner
    }

    pub fn session(&self) -> &Session {
        self.inner.session()
    }

    /// Receive [`SessionEvent::Expired`] notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.session().subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::session::{TOKEN_KEY, USER_KEY};

    /// Replies with a fixed status and records the `Authorization` header.
    struct StatusTransport {
        status: u16,
        seen_auth: Mutex<Vec<Option<String>>>,
    }

    #[async_trait]
    impl Transport for StatusTransport {
        async fn send(
            &self,
            _request: &RequestDescriptor,
            extra_headers: &HeaderMap,
        ) -> Result<RawResponse, TransportError> {
            let auth = extra_headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            self.seen_auth.lock().unwrap().push(auth);
            Ok(RawResponse::new(self.status, ""))
        }
    }

    fn client(status: u16) -> (TransportClient, Arc<StatusTransport>, Arc<MemorySessionStore>) {
        let transport = Arc::new(StatusTransport {
            status,
            seen_auth: Mutex::new(Vec::new()),
        });
        let store = Arc::new(MemorySessionStore::new());
        let client = TransportClient::new(transport.clone(), store.clone());
        (client, transport, store)
    }

    #[tokio::test]
    async fn bearer_header_added_when_token_present() {
        let (client, transport, store) = client(200);
        store.set(TOKEN_KEY, "tok-123");
        client.execute(&RequestDescriptor::get("/experts")).await.unwrap();
        assert_eq!(
            transport.seen_auth.lock().unwrap()[0].as_deref(),
            Some("Bearer tok-123")
        );
    }

    #[tokio::test]
    async fn no_header_without_token() {
        let (client, transport, _store) = client(200);
        client.execute(&RequestDescriptor::get("/experts")).await.unwrap();
        assert_eq!(transport.seen_auth.lock().unwrap()[0], None);
    }

    #[tokio::test]
    async fn unauthorized_response_clears_session() {
        let (client, _transport, store) = client(401);
        let mut rx = client.session().subscribe();
        client.session().begin("tok", r#"{"id":1}"#);

        let response = client.execute(&RequestDescriptor::get("/users")).await.unwrap();

        assert_eq!(response.status, 401);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Expired);
    }

    #[tokio::test]
    async fn other_statuses_leave_session_alone() {
        let (client, _transport, store) = client(403);
        store.set(TOKEN_KEY, "tok");
        client.execute(&RequestDescriptor::get("/users")).await.unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));
    }
}
