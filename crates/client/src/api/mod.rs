//! Per-resource call wrappers.
//!
//! Each method maps typed parameters to a [`RequestDescriptor`] and hands
//! it to [`ApiClient::request`]. Paths are relative to the API root.
//! Wrappers never inspect the envelope they return, except the auth
//! flows, which record a successful login in the session.
//!
//! [`RequestDescriptor`]: crate::request::RequestDescriptor
//! [`ApiClient::request`]: crate::client::ApiClient::request

pub mod areas;
pub mod assignments;
pub mod auth;
pub mod backup;
pub mod documents;
pub mod engagements;
pub mod experts;
pub mod health;
pub mod phases;
pub mod requests;
pub mod statistics;
pub mod users;
