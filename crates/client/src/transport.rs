//! Physical HTTP transport.
//!
//! [`Transport`] is the seam between the normalizing layer and the network.
//! [`HttpTransport`] is the production implementation over [`reqwest`];
//! tests substitute their own.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};

use crate::config::TransportConfig;
use crate::error::{ConfigError, TransportError};
use crate::request::{FormData, FormPart, RequestBody, RequestDescriptor};

/// Status and body of any HTTP response, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response with a JSON body.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one described request.
///
/// Implementations return `Ok` for every HTTP response regardless of
/// status, and `Err` only when no response was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: &RequestDescriptor,
        extra_headers: &HeaderMap,
    ) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] over a configured [`reqwest::Client`].
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the HTTP client from `config`.
    pub fn new(config: &TransportConfig) -> Result<Self, ConfigError> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ConfigError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ConfigError::InvalidHeader(format!("{name}: {value}")))?;
            default_headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .cookie_store(config.with_credentials)
            .build()?;

        tracing::debug!(
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            with_credentials = config.with_credentials,
            "HTTP transport configured",
        );

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a request URL against the API root.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &RequestDescriptor,
        extra_headers: &HeaderMap,
    ) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method().clone(), self.url(request.url()));

        if !request.params_list().is_empty() {
            builder = builder.query(request.params_list());
        }

        builder = match request.body() {
            Some(RequestBody::Json(value)) => builder.json(value),
            Some(RequestBody::Multipart(form)) => builder.multipart(to_multipart(form)?),
            None => builder,
        };

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = builder.headers(extra_headers.clone());

        let response = builder.send().await?;
        let status = response.status().as_u16();

        // Once an error status has arrived it must reach the interceptors
        // even if its body never does.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) if !(200..300).contains(&status) => {
                tracing::debug!(status, error = %e, "Error response body unreadable, dropping it");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(RawResponse { status, body })
    }
}

fn to_multipart(form: &FormData) -> Result<Form, TransportError> {
    let mut multipart = Form::new();
    for part in form.parts() {
        multipart = match part {
            FormPart::Text { name, value } => multipart.text(name.clone(), value.clone()),
            FormPart::File {
                name,
                filename,
                bytes,
                mime,
            } => {
                let mut file = Part::bytes(bytes.clone()).file_name(filename.clone());
                if let Some(mime) = mime {
                    file = file.mime_str(mime)?;
                }
                multipart.part(name.clone(), file)
            }
        };
    }
    Ok(multipart)
}
