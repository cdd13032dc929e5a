//! Typed client for the ExpertDB REST API.
//!
//! Every call goes through [`ApiClient::request`], which never fails: the
//! outcome of the HTTP exchange, whatever it was, is folded into an
//! [`Envelope`]. The per-resource methods in [`api`] only describe
//! requests.
//!
//! ```no_run
//! # async fn demo() -> Result<(), expertdb_client::ConfigError> {
//! use expertdb_client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(&ClientConfig::default())?;
//! let experts = client.get_experts(10, 0, None).await;
//! if !experts.is_success() {
//!     eprintln!("{}", experts.message());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod request;
pub mod retry;
pub mod session;
pub mod transport;

pub use client::{ApiClient, TransportClient};
pub use config::{ClientConfig, TransportConfig};
pub use error::{ConfigError, TransportError};
pub use expertdb_core::{Envelope, FailureKind};
pub use request::{FormData, RequestBody, RequestDescriptor};
pub use retry::RetryPolicy;
pub use session::{MemorySessionStore, Session, SessionEvent, SessionStore};
pub use transport::{HttpTransport, RawResponse, Transport};
