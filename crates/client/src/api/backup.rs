use expertdb_core::envelope::Envelope;

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

impl ApiClient {
    /// `GET /backup`: the database export archive as raw bytes.
    pub async fn generate_backup(&self) -> Envelope<Vec<u8>> {
        self.request_bytes(RequestDescriptor::get("/backup")).await
    }
}
