//! Shared types for the ExpertDB API client.
//!
//! Holds the response [`envelope`], the [`failure`] classification table,
//! and the serde [`models`] for every payload the backend returns.

pub mod envelope;
pub mod failure;
pub mod models;
pub mod types;

pub use envelope::{ApiFailure, Envelope};
pub use failure::FailureKind;
