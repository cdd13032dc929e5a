use expertdb_core::envelope::Envelope;
use expertdb_core::models::area::AreaInput;
use expertdb_core::models::{ExpertArea, MutationResult};
use expertdb_core::types::DbId;

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

impl ApiClient {
    /// `GET /expert/areas`
    pub async fn get_expert_areas(&self) -> Envelope<Vec<ExpertArea>> {
        self.request(RequestDescriptor::get("/expert/areas")).await
    }

    /// `POST /expert/areas`
    pub async fn create_expert_area(&self, name: &str) -> Envelope<MutationResult> {
        let body = AreaInput {
            name: name.to_string(),
        };
        self.request(RequestDescriptor::post("/expert/areas").json(&body))
            .await
    }

    /// `PUT /expert/areas/{id}`
    pub async fn update_expert_area(&self, id: DbId, name: &str) -> Envelope<MutationResult> {
        let body = AreaInput {
            name: name.to_string(),
        };
        self.request(RequestDescriptor::put(format!("/expert/areas/{id}")).json(&body))
            .await
    }
}
