use expertdb_core::envelope::Envelope;
use expertdb_core::models::statistics::{
    AreaStats, EngagementStats, ExpertStats, GrowthStats, NationalityStats,
};

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

impl ApiClient {
    /// `GET /statistics/nationality`
    pub async fn get_nationality_stats(&self) -> Envelope<NationalityStats> {
        self.request(RequestDescriptor::get("/statistics/nationality"))
            .await
    }

    /// `GET /statistics/growth?years=`
    pub async fn get_growth_stats(&self, years: Option<u32>) -> Envelope<Vec<GrowthStats>> {
        self.request(RequestDescriptor::get("/statistics/growth").param_opt("years", years))
            .await
    }

    /// `GET /statistics`
    pub async fn get_overall_stats(&self) -> Envelope<ExpertStats> {
        self.request(RequestDescriptor::get("/statistics")).await
    }

    /// `GET /statistics/engagements`
    pub async fn get_engagement_stats(&self) -> Envelope<EngagementStats> {
        self.request(RequestDescriptor::get("/statistics/engagements"))
            .await
    }

    /// `GET /statistics/areas`
    pub async fn get_area_stats(&self) -> Envelope<AreaStats> {
        self.request(RequestDescriptor::get("/statistics/areas"))
            .await
    }
}
