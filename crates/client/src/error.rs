use expertdb_core::FailureKind;

/// Failure to obtain any HTTP response.
///
/// A response with an error status is not a `TransportError`; it reaches
/// the normalizer as a [`RawResponse`](crate::transport::RawResponse).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The client-wide timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The server could not be reached (DNS, refused, TLS, ...).
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other failure while building or sending the request.
    #[error("HTTP request failed: {0}")]
    Request(String),
}

impl TransportError {
    pub fn kind(&self) -> FailureKind {
        match self {
            TransportError::Timeout => FailureKind::Timeout,
            TransportError::Connect(_) | TransportError::Request(_) => FailureKind::Network,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Errors raised while building a client from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    /// A default header name or value is not valid HTTP.
    #[error("invalid default header: {0}")]
    InvalidHeader(String),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
