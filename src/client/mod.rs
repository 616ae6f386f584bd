//! Remote analysis client
//!
//! Every operation is a single GET against `{base_url}/{endpoint}/` with one
//! query parameter. The decoded body is handed back untouched; a failure is
//! logged once with the operation that failed and returned as-is.

pub mod endpoints;
pub mod http;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::error;

pub use endpoints::Endpoint;
pub use http::HttpTransport;

use crate::Result;
use crate::config::Config;

/// Performs the actual GET request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` with the given query pairs and decode the body.
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Value>;
}

/// Client for the Memescan analysis service.
#[derive(Clone)]
pub struct RemoteAnalysisClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
}

impl RemoteAnalysisClient {
    /// Create a client using the default HTTP transport.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(base_url, Arc::new(transport)))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Arc::from(base_url),
            transport,
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api.base_url.clone())
    }

    /// Base URL all endpoints resolve against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `endpoint` with a single parameter value.
    ///
    /// Strings are sent verbatim, other JSON values as compact JSON text and
    /// `null` leaves the parameter off. Nothing is validated locally.
    pub async fn call_endpoint(&self, endpoint: &Endpoint, param_value: &Value) -> Result<Value> {
        let url = endpoint.url(&self.base_url);
        let query: Vec<(&str, String)> = encode_param(param_value)
            .map(|v| (endpoint.param, v))
            .into_iter()
            .collect();

        self.transport.get(&url, &query).await.inspect_err(|e| {
            error!(
                endpoint = endpoint.path,
                param = endpoint.param,
                "Error {}: {e}",
                endpoint.action
            );
        })
    }

    /// Risk analysis for a token contract.
    pub async fn analyze_contract(&self, contract_address: &str) -> Result<Value> {
        self.call_endpoint(
            &endpoints::CONTRACT_ANALYSIS,
            &Value::from(contract_address),
        )
        .await
    }

    /// Detect bundled buys in caller-supplied transaction data.
    pub async fn detect_bundles(&self, transaction_data: &Value) -> Result<Value> {
        self.call_endpoint(&endpoints::BUNDLE_DETECTION, transaction_data)
            .await
    }

    /// Trend analysis over caller-supplied market data.
    pub async fn analyze_trends(&self, market_data: &Value) -> Result<Value> {
        self.call_endpoint(&endpoints::TREND_ANALYSIS, market_data)
            .await
    }

    /// Real-time activity for a wallet.
    pub async fn monitor_wallet(&self, wallet_address: &str) -> Result<Value> {
        self.call_endpoint(
            &endpoints::REAL_TIME_MONITORING,
            &Value::from(wallet_address),
        )
        .await
    }
}

impl fmt::Debug for RemoteAnalysisClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteAnalysisClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Query-string form of a parameter value.
fn encode_param(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
