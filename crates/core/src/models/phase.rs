use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// An application inside a planning phase, needing two proposed experts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhaseApplication {
    pub id: DbId,
    pub phase_id: DbId,
    #[serde(rename = "type")]
    pub application_type: String,
    pub institution_name: String,
    pub qualification_name: String,
    pub expert1: DbId,
    pub expert1_name: String,
    pub expert2: DbId,
    pub expert2_name: String,
    pub status: String,
    pub rejection_notes: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// A planning phase grouping applications under one scheduler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Phase {
    pub id: DbId,
    pub phase_id: String,
    pub title: String,
    pub assigned_scheduler_id: DbId,
    pub scheduler_name: String,
    pub status: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub applications: Vec<PhaseApplication>,
}

/// One application in a [`CreatePhase`] body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhaseApplication {
    #[serde(rename = "type")]
    pub application_type: String,
    pub institution_name: String,
    pub qualification_name: String,
    pub expert1: DbId,
    pub expert2: DbId,
    pub status: String,
}

/// Body of `POST /phases`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhase {
    pub title: String,
    pub assigned_scheduler_id: DbId,
    pub status: String,
    pub applications: Vec<NewPhaseApplication>,
}

/// Body for proposing the two experts of an application.
#[derive(Debug, Clone, Serialize)]
pub struct ProposeExperts {
    pub expert1: DbId,
    pub expert2: DbId,
}

/// Body for approving or rejecting an application.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewApplication {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_notes: Option<String>,
}
