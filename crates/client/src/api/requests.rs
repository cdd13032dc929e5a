use expertdb_core::envelope::Envelope;
use expertdb_core::models::expert_request::{BatchApproveResponse, RequestListResponse};
use expertdb_core::models::{ExpertRequest, MutationResult};
use expertdb_core::types::DbId;

use crate::client::ApiClient;
use crate::request::{FormData, RequestDescriptor};

impl ApiClient {
    /// `GET /expert-requests?limit=&offset=&<filters>`
    ///
    /// `filters` are passed through as query parameters, e.g. `status`.
    pub async fn get_expert_requests(
        &self,
        limit: u32,
        offset: u32,
        filters: &[(&str, &str)],
    ) -> Envelope<RequestListResponse> {
        self.request(
            RequestDescriptor::get("/expert-requests")
                .params(filters.iter().copied())
                .param("limit", limit)
                .param("offset", offset),
        )
        .await
    }

    /// `GET /expert-requests/{id}`
    pub async fn get_expert_request_by_id(&self, id: DbId) -> Envelope<ExpertRequest> {
        self.request(RequestDescriptor::get(format!("/expert-requests/{id}")))
            .await
    }

    /// `POST /expert-requests` (multipart: profile fields, CV, approval document).
    pub async fn create_expert_request(&self, form: FormData) -> Envelope<ExpertRequest> {
        self.request(RequestDescriptor::post("/expert-requests").form(form))
            .await
    }

    /// `PUT /expert-requests/{id}`: admin decision (status, rejection reason).
    pub async fn update_expert_request(&self, id: DbId, form: FormData) -> Envelope<MutationResult> {
        self.request(RequestDescriptor::put(format!("/expert-requests/{id}")).form(form))
            .await
    }

    /// `PUT /expert-requests/{id}/edit`: amend a request before review.
    pub async fn edit_expert_request(&self, id: DbId, form: FormData) -> Envelope<MutationResult> {
        self.request(RequestDescriptor::put(format!("/expert-requests/{id}/edit")).form(form))
            .await
    }

    /// `POST /expert-requests/batch-approve`
    pub async fn batch_approve(&self, form: FormData) -> Envelope<BatchApproveResponse> {
        self.request(RequestDescriptor::post("/expert-requests/batch-approve").form(form))
            .await
    }
}
