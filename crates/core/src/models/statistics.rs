//! Aggregate statistics behind the dashboard endpoints.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub name: String,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NationalityStats {
    pub total: i64,
    pub stats: Vec<StatItem>,
    pub bahraini: Option<i64>,
    pub international: Option<i64>,
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrowthStats {
    /// `"2023-01"`, `"2023-Q1"`, ...
    pub period: String,
    pub count: i64,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaStats {
    pub general_areas: Vec<StatItem>,
    pub top_specialized_areas: Vec<StatItem>,
    pub bottom_specialized_areas: Vec<StatItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngagementStats {
    pub total: i64,
    pub by_type: Vec<StatItem>,
    pub by_status: Vec<StatItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestedExpert {
    pub expert_id: String,
    pub name: String,
    pub count: i64,
}

/// Response of `GET /api/statistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpertStats {
    pub total_experts: i64,
    pub active_count: i64,
    pub bahraini_percentage: f64,
    pub published_count: i64,
    pub published_ratio: f64,
    pub top_areas: Vec<StatItem>,
    pub engagements_by_type: Vec<StatItem>,
    pub yearly_growth: Vec<GrowthStats>,
    pub most_requested_experts: Vec<RequestedExpert>,
    pub last_updated: Option<Timestamp>,
}
