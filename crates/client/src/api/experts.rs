use expertdb_core::envelope::Envelope;
use expertdb_core::models::expert::{ExpertFilters, ExpertListResponse};
use expertdb_core::models::{Expert, MutationResult};
use expertdb_core::types::DbId;

use crate::cache::ExpertCache;
use crate::client::ApiClient;
use crate::request::{FormData, RequestDescriptor};

impl ApiClient {
    /// `GET /experts?limit=&offset=&<filters>`
    pub async fn get_experts(
        &self,
        limit: u32,
        offset: u32,
        filters: Option<&ExpertFilters>,
    ) -> Envelope<ExpertListResponse> {
        let params = filters.map(ExpertFilters::to_params).unwrap_or_default();
        self.request(
            RequestDescriptor::get("/experts")
                .params(params)
                .param("limit", limit)
                .param("offset", offset),
        )
        .await
    }

    /// The first `limit` experts, served from `cache` while it is fresh.
    ///
    /// A successful fetch refreshes the cache; a failed one leaves it alone.
    pub async fn get_experts_cached(
        &self,
        cache: &ExpertCache,
        limit: u32,
    ) -> Envelope<Vec<Expert>> {
        if let Some(experts) = cache.fresh() {
            tracing::debug!(count = experts.len(), "Serving experts from cache");
            return Envelope::ok(experts);
        }

        let envelope = self.get_experts(limit, 0, None).await.map(|list| list.experts);
        if let Some(experts) = envelope.data() {
            cache.set(experts);
        }
        envelope
    }

    /// `GET /experts/{id}`
    pub async fn get_expert_by_id(&self, id: DbId) -> Envelope<Expert> {
        self.request(RequestDescriptor::get(format!("/experts/{id}")))
            .await
    }

    /// `POST /experts` (multipart: profile fields plus CV).
    pub async fn create_expert(&self, form: FormData) -> Envelope<MutationResult> {
        self.request(RequestDescriptor::post("/experts").form(form))
            .await
    }

    /// `PUT /experts/{id}` (multipart).
    pub async fn update_expert(&self, id: DbId, form: FormData) -> Envelope<MutationResult> {
        self.request(RequestDescriptor::put(format!("/experts/{id}")).form(form))
            .await
    }

    /// `DELETE /experts/{id}`
    pub async fn delete_expert(&self, id: DbId) -> Envelope<MutationResult> {
        self.request(RequestDescriptor::delete(format!("/experts/{id}")))
            .await
    }
}
