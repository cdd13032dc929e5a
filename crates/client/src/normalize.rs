//! The normalizing request function.
//!
//! [`ApiClient::request`] is the single chokepoint every resource wrapper
//! calls. It performs one transport attempt and converts whatever happened
//! into an [`Envelope`]:
//!
//! - 2xx with a `{ success, ... }` body: the backend envelope passes through.
//! - 2xx with any other body: the body is the payload.
//! - Non-2xx with a backend error message: that message wins.
//! - Non-2xx otherwise: fixed message per status code.
//! - No response: timeout or network message.

use expertdb_core::envelope::Envelope;
use expertdb_core::failure::FailureKind;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::TransportError;
use crate::request::RequestDescriptor;
use crate::transport::RawResponse;

/// An envelope plus the classification of its failure, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<T> {
    pub envelope: Envelope<T>,
    pub failure: Option<FailureKind>,
}

impl<T> Classified<T> {
    fn ok(envelope: Envelope<T>) -> Self {
        Self {
            envelope,
            failure: None,
        }
    }

    fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::failure(message),
            failure: Some(kind),
        }
    }

    fn from_kind(kind: FailureKind) -> Self {
        Self::failed(kind, kind.default_message())
    }
}

impl ApiClient {
    /// Perform one call and normalize its outcome. Never fails.
    pub async fn request<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Envelope<T> {
        self.request_classified(&request).await.envelope
    }

    /// Like [`request`](Self::request), also reporting the failure class.
    pub async fn request_classified<T: DeserializeOwned>(
        &self,
        request: &RequestDescriptor,
    ) -> Classified<T> {
        match self.dispatch(request).await {
            Ok(result) => log_outcome(request, normalize(result)),
            Err(classified) => classified,
        }
    }

    /// Perform one call whose success payload is the raw response body.
    pub async fn request_bytes(&self, request: RequestDescriptor) -> Envelope<Vec<u8>> {
        match self.dispatch(&request).await {
            Ok(result) => log_outcome(&request, normalize_bytes(result)).envelope,
            Err(classified) => classified.envelope,
        }
    }

    /// Run the transport, short-circuiting requests whose body could not
    /// be serialized.
    async fn dispatch<T>(
        &self,
        request: &RequestDescriptor,
    ) -> Result<Result<RawResponse, TransportError>, Classified<T>> {
        if let Some(err) = request.body_error() {
            tracing::error!(
                method = %request.method(),
                url = %request.url(),
                error = %err,
                "Request body could not be serialized",
            );
            return Err(Classified::from_kind(FailureKind::Validation));
        }

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            params = ?request.params_list(),
            "Making request",
        );

        let result = self.transport_client().execute(request).await;

        match &result {
            Ok(response) => tracing::debug!(
                url = %request.url(),
                status = response.status,
                bytes = response.body.len(),
                "Response received",
            ),
            Err(e) => tracing::debug!(url = %request.url(), error = %e, "No response"),
        }

        Ok(result)
    }
}

fn log_outcome<T>(request: &RequestDescriptor, classified: Classified<T>) -> Classified<T> {
    if let Some(kind) = classified.failure {
        tracing::warn!(
            method = %request.method(),
            url = %request.url(),
            kind = ?kind,
            message = classified.envelope.message(),
            "Request failed",
        );
    }
    classified
}

/// Classify one transport outcome into an envelope.
pub fn normalize<T: DeserializeOwned>(
    result: Result<RawResponse, TransportError>,
) -> Classified<T> {
    match result {
        Ok(response) if response.is_success() => normalize_success(&response),
        Ok(response) => normalize_error(&response),
        Err(e) => Classified::from_kind(e.kind()),
    }
}

/// Classify a transport outcome whose success payload is the raw body.
pub fn normalize_bytes(result: Result<RawResponse, TransportError>) -> Classified<Vec<u8>> {
    match result {
        Ok(response) if response.is_success() => Classified::ok(Envelope::ok(response.body)),
        Ok(response) => normalize_error(&response),
        Err(e) => Classified::from_kind(e.kind()),
    }
}

fn normalize_success<T: DeserializeOwned>(response: &RawResponse) -> Classified<T> {
    let text = String::from_utf8_lossy(&response.body);
    let value = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            // Plain-text bodies are only acceptable for string payloads.
            Err(_) => Value::String(text.into_owned()),
        }
    };

    if let Some(obj) = value.as_object() {
        if let Some(success) = obj.get("success").and_then(Value::as_bool) {
            let message = obj
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            if !success {
                return Classified::failed(FailureKind::Backend(response.status), message);
            }

            return match obj.get("data") {
                Some(data) => decode(data.clone(), message),
                None => decode_inline(value.clone(), message),
            };
        }
    }

    decode(value, String::new())
}

fn decode<T: DeserializeOwned>(payload: Value, message: String) -> Classified<T> {
    match serde_json::from_value::<T>(payload) {
        Ok(data) => Classified::ok(Envelope::ok_with_message(data, message)),
        Err(e) => {
            tracing::warn!(error = %e, "Response body does not match the expected payload");
            Classified::from_kind(FailureKind::Decode)
        }
    }
}

/// Envelopes without a `data` key carry their payload inline, e.g.
/// `{ "id": 4, "success": true, "message": "..." }`. Payloads that don't
/// fit the object, such as `()`, decode from `null`.
fn decode_inline<T: DeserializeOwned>(value: Value, message: String) -> Classified<T> {
    match serde_json::from_value::<T>(value) {
        Ok(data) => Classified::ok(Envelope::ok_with_message(data, message)),
        Err(_) => decode(Value::Null, message),
    }
}

fn normalize_error<T>(response: &RawResponse) -> Classified<T> {
    match backend_message(&response.body) {
        Some(message) => Classified::failed(FailureKind::Backend(response.status), message),
        None => Classified::from_kind(FailureKind::from_status(response.status)),
    }
}

/// Extract the backend's own error message from an error body.
///
/// Two shapes are recognized: a failed envelope
/// `{ "success": false, "message": "..." }` and the backend's native
/// `{ "error": "..." }`. Anything else, including malformed or empty
/// messages, yields `None`.
fn backend_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let obj = value.as_object()?;

    let non_empty = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
    };

    match obj.get("success") {
        Some(Value::Bool(false)) => non_empty("message"),
        Some(_) => None,
        None => non_empty("error"),
    }
}
