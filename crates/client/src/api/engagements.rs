use expertdb_core::envelope::Envelope;
use expertdb_core::models::engagement::ImportSummary;
use expertdb_core::models::Engagement;

use crate::client::ApiClient;
use crate::request::{FormData, RequestDescriptor};

impl ApiClient {
    /// `GET /expert-engagements?limit=&offset=&<filters>`
    pub async fn get_engagements(
        &self,
        limit: u32,
        offset: u32,
        filters: &[(&str, &str)],
    ) -> Envelope<Vec<Engagement>> {
        self.request(
            RequestDescriptor::get("/expert-engagements")
                .params(filters.iter().copied())
                .param("limit", limit)
                .param("offset", offset),
        )
        .await
    }

    /// `POST /engagements/import` (multipart CSV upload).
    pub async fn import_engagements(&self, form: FormData) -> Envelope<ImportSummary> {
        self.request(RequestDescriptor::post("/engagements/import").form(form))
            .await
    }
}
