//! QcRest trait — the sole transport boundary between the dashboard and
//! the graph-database REST service. The dashboard depends on this crate,
//! never on a concrete HTTP stack.

pub mod http;
pub mod inprocess;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpClient;
pub use inprocess::InProcessRest;

#[derive(Debug, Error)]
pub enum QcRestError {
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    #[error("transport: {0}")]
    Transport(String),

    #[error("decode: {0}")]
    Decode(String),
}

#[async_trait]
pub trait QcRest: Send + Sync {
    /// Invoke `method` under the service's `domain` namespace with JSON
    /// `args`, returning the parsed response body.
    async fn call(&self, domain: &str, method: &str, args: &Value) -> Result<Value, QcRestError>;
}
