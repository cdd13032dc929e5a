//! Planner/manager role assignments over phase applications.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// All applications a user is assigned to, per role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAssignments {
    pub user_id: DbId,
    pub planner_applications: Vec<DbId>,
    pub manager_applications: Vec<DbId>,
}

/// Body for assignment and removal calls.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentRequest {
    pub application_ids: Vec<DbId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentResponse {
    pub message: String,
    pub user_id: DbId,
    pub assigned_applications: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalResponse {
    pub message: String,
    pub user_id: DbId,
    pub removed_applications: i64,
}
