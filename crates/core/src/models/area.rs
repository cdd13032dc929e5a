use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A general specialization area experts are grouped under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertArea {
    pub id: DbId,
    pub name: String,
}

/// Body for creating or renaming an area.
#[derive(Debug, Clone, Serialize)]
pub struct AreaInput {
    pub name: String,
}
