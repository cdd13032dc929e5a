//! Failure classification for API calls.
//!
//! Every unsuccessful call is reduced to a [`FailureKind`], and every kind
//! has a fixed user-facing message. The normalizing request function uses
//! these messages whenever the backend did not supply one of its own.

/// Message for HTTP 400 responses without a backend message.
pub const MSG_INVALID_REQUEST: &str = "Invalid request data";

/// Message for HTTP 401 responses without a backend message.
pub const MSG_SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// Message for HTTP 403 responses without a backend message.
pub const MSG_PERMISSION_DENIED: &str = "Permission denied";

/// Message for HTTP 404 responses without a backend message.
pub const MSG_NOT_FOUND: &str = "Resource not found";

/// Message for HTTP 500 responses without a backend message.
pub const MSG_SERVER_ERROR: &str = "Server error occurred";

/// Message when the configured timeout elapsed before a response arrived.
pub const MSG_TIMEOUT: &str = "Request timed out. Please try again.";

/// Message when no HTTP response was received at all.
pub const MSG_NETWORK: &str = "Network connection error. Please check your connection.";

/// Message when a 2xx body could not be decoded into the expected payload.
pub const MSG_INVALID_RESPONSE: &str = "Invalid response format from server";

/// Fallback for failures that carry no usable message.
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred";

/// Why an API call did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// HTTP 400.
    Validation,
    /// HTTP 401. Also triggers session expiry in the transport client.
    Unauthenticated,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 500.
    Server,
    /// Any other non-2xx status.
    Status(u16),
    /// The backend supplied its own error message with this status.
    Backend(u16),
    /// No response before the client-wide timeout.
    Timeout,
    /// No response at all (DNS, refused connection, TLS, ...).
    Network,
    /// A 2xx response whose body did not match the expected payload.
    Decode,
}

impl FailureKind {
    /// Classify a non-2xx HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            401 => Self::Unauthenticated,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::Server,
            other => Self::Status(other),
        }
    }

    /// The HTTP status this failure was derived from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation => Some(400),
            Self::Unauthenticated => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Server => Some(500),
            Self::Status(code) | Self::Backend(code) => Some(*code),
            Self::Timeout | Self::Network | Self::Decode => None,
        }
    }

    /// The fixed message used when the backend supplied none.
    pub fn default_message(&self) -> String {
        match self {
            Self::Validation => MSG_INVALID_REQUEST.to_string(),
            Self::Unauthenticated => MSG_SESSION_EXPIRED.to_string(),
            Self::Forbidden => MSG_PERMISSION_DENIED.to_string(),
            Self::NotFound => MSG_NOT_FOUND.to_string(),
            Self::Server => MSG_SERVER_ERROR.to_string(),
            Self::Status(code) => format!("Request failed with status code {code}"),
            Self::Backend(code) => Self::from_status(*code).default_message(),
            Self::Timeout => MSG_TIMEOUT.to_string(),
            Self::Network => MSG_NETWORK.to_string(),
            Self::Decode => MSG_INVALID_RESPONSE.to_string(),
        }
    }

    /// Whether a retry of the same request may succeed.
    ///
    /// Only failures where the request never got an answer qualify; every
    /// HTTP status is a definitive answer from the backend.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Network)
    }
}
