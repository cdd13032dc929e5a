use expertdb_core::envelope::Envelope;
use expertdb_core::models::HealthStatus;

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

/// `GET /health`, for callers that send it through their own policy.
pub fn health_request() -> RequestDescriptor {
    RequestDescriptor::get("/health")
}

impl ApiClient {
    /// `GET /health`
    pub async fn health(&self) -> Envelope<HealthStatus> {
        self.request(health_request()).await
    }
}
