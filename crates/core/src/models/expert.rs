use serde::{Deserialize, Serialize};

use super::pagination::PaginationInfo;
use crate::types::{DbId, Timestamp};

/// A published expert profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Expert {
    pub id: DbId,
    /// Human-facing identifier, e.g. `EXP-0042`.
    pub expert_id: String,
    pub name: String,
    pub designation: String,
    pub institution: String,
    pub is_bahraini: bool,
    pub is_available: bool,
    pub rating: String,
    pub role: String,
    pub employment_type: String,
    pub general_area: DbId,
    pub general_area_name: String,
    pub specialized_area: String,
    pub is_trained: bool,
    pub cv_path: String,
    pub phone: String,
    pub email: String,
    pub is_published: bool,
    pub biography: String,
    pub approval_document_path: String,
    pub skills: Vec<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Response of `GET /experts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertListResponse {
    pub experts: Vec<Expert>,
    pub pagination: PaginationInfo,
}

/// Query filters accepted by the expert listing.
///
/// Parameter names match the backend's snake_case query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpertFilters {
    pub name: Option<String>,
    pub area: Option<String>,
    pub is_available: Option<bool>,
    pub is_bahraini: Option<bool>,
    pub role: Option<String>,
    pub min_rating: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ExpertFilters {
    /// Render the set filters as query parameters, skipping unset ones.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                params.push((key.to_string(), value));
            }
        };
        push("name", self.name.clone());
        push("area", self.area.clone());
        push("is_available", self.is_available.map(|b| b.to_string()));
        push("is_bahraini", self.is_bahraini.map(|b| b.to_string()));
        push("role", self.role.clone());
        push("min_rating", self.min_rating.clone());
        push("sort_by", self.sort_by.clone());
        push("sort_order", self.sort_order.clone());
        params
    }
}
