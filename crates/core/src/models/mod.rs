//! Payload models returned by the ExpertDB backend.
//!
//! Field names follow the backend's camelCase JSON. Every struct tolerates
//! missing fields so that partial records from older endpoints still
//! decode.

pub mod area;
pub mod assignment;
pub mod auth;
pub mod document;
pub mod engagement;
pub mod expert;
pub mod expert_request;
pub mod health;
pub mod mutation;
pub mod pagination;
pub mod phase;
pub mod statistics;
pub mod user;

pub use area::ExpertArea;
pub use document::Document;
pub use engagement::Engagement;
pub use expert::Expert;
pub use expert_request::ExpertRequest;
pub use health::HealthStatus;
pub use mutation::MutationResult;
pub use pagination::{PaginatedResponse, PaginationInfo};
pub use phase::{Phase, PhaseApplication};
pub use user::User;
