//! HTTP transport backed by `reqwest`

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::Transport;
use crate::Result;

/// Default transport: GET with query string, JSON body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with its own connection pool.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("memescan-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client (shares its pool and settings).
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self.client.get(url).query(query).send().await?;
        let response = response.error_for_status()?;
        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
