//! The uniform `{ success, message, data }` response envelope.
//!
//! Every API call resolves to an [`Envelope`]. Callers branch on
//! [`Envelope::is_success`] and nothing else; transport details have
//! already been folded into the message by the time an envelope exists.

use serde::Serialize;

use crate::failure::MSG_UNEXPECTED;

/// Outcome of one API call.
///
/// A successful envelope always carries data. A failed envelope never
/// carries data and always has a non-empty message. The constructors are
/// the only way to build one, so both rules hold for every value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    success: bool,
    message: String,
    data: Option<T>,
}

/// The message of a failed envelope, as an error value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiFailure {
    pub message: String,
}

impl<T> Envelope<T> {
    /// A successful envelope with an empty message.
    pub fn ok(data: T) -> Self {
        Self::ok_with_message(data, String::new())
    }

    /// A successful envelope carrying the backend's own message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// A failed envelope. An empty message is replaced with a generic one.
    pub fn failure(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = MSG_UNEXPECTED.to_string();
        }
        Self {
            success: false,
            message,
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Convert into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(ApiFailure {
                message: self.message,
            }),
        }
    }

    /// Transform the payload of a successful envelope.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
        }
    }
}
