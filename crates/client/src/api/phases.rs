use expertdb_core::envelope::Envelope;
use expertdb_core::models::phase::{CreatePhase, ProposeExperts, ReviewApplication};
use expertdb_core::models::{MutationResult, Phase};
use expertdb_core::types::DbId;

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

impl ApiClient {
    /// `POST /phases`
    pub async fn create_phase(&self, phase: &CreatePhase) -> Envelope<MutationResult> {
        self.request(RequestDescriptor::post("/phases").json(phase))
            .await
    }

    /// `GET /phases?limit=&offset=&<filters>`
    pub async fn get_phases(
        &self,
        limit: u32,
        offset: u32,
        filters: &[(&str, &str)],
    ) -> Envelope<Vec<Phase>> {
        self.request(
            RequestDescriptor::get("/phases")
                .params(filters.iter().copied())
                .param("limit", limit)
                .param("offset", offset),
        )
        .await
    }

    /// `PUT /phases/{phase_id}/applications/{application_id}`
    pub async fn propose_experts(
        &self,
        phase_id: DbId,
        application_id: DbId,
        proposal: &ProposeExperts,
    ) -> Envelope<MutationResult> {
        self.request(
            RequestDescriptor::put(format!("/phases/{phase_id}/applications/{application_id}"))
                .json(proposal),
        )
        .await
    }

    /// `PUT /phases/{phase_id}/applications/{application_id}/review`
    pub async fn review_application(
        &self,
        phase_id: DbId,
        application_id: DbId,
        review: &ReviewApplication,
    ) -> Envelope<MutationResult> {
        self.request(
            RequestDescriptor::put(format!(
                "/phases/{phase_id}/applications/{application_id}/review"
            ))
            .json(review),
        )
        .await
    }
}
