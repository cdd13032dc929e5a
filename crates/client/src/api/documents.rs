use expertdb_core::envelope::Envelope;
use expertdb_core::models::document::DocumentListResponse;
use expertdb_core::models::{Document, MutationResult};
use expertdb_core::types::DbId;

use crate::client::ApiClient;
use crate::request::{FormData, RequestDescriptor};

impl ApiClient {
    /// `POST /documents` (multipart: `file`, `documentType`, `expertId`).
    pub async fn upload_document(&self, form: FormData) -> Envelope<MutationResult> {
        self.request(RequestDescriptor::post("/documents").form(form))
            .await
    }

    /// `GET /documents/{id}`
    pub async fn get_document(&self, id: DbId) -> Envelope<Document> {
        self.request(RequestDescriptor::get(format!("/documents/{id}")))
            .await
    }

    /// `DELETE /documents/{id}`
    pub async fn delete_document(&self, id: DbId) -> Envelope<MutationResult> {
        self.request(RequestDescriptor::delete(format!("/documents/{id}")))
            .await
    }

    /// `GET /experts/{expert_id}/documents`
    pub async fn get_expert_documents(&self, expert_id: DbId) -> Envelope<DocumentListResponse> {
        self.request(RequestDescriptor::get(format!("/experts/{expert_id}/documents")))
            .await
    }
}
