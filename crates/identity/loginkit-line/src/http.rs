//! Default reqwest-backed authenticated-GET capability.

use async_trait::async_trait;
use loginkit_core::{AuthorizedHttp, BoxError, RawProfileResponse, TokenTransport};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Issues authenticated GET requests with a bounded timeout.
///
/// Non-2xx statuses are returned as responses, not errors; the strategy
/// classifies them.
pub struct ReqwestAuthorizedHttp {
    client: Client,
}

impl ReqwestAuthorizedHttp {
    pub fn new(timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for ReqwestAuthorizedHttp {
    fn default() -> Self {
        Self::new(30)
    }
}

#[async_trait]
impl AuthorizedHttp for ReqwestAuthorizedHttp {
    async fn get(
        &self,
        url: &str,
        access_token: &str,
        transport: TokenTransport,
    ) -> Result<RawProfileResponse, BoxError> {
        let request = match transport {
            TokenTransport::AuthorizationHeader => self.client.get(url).bearer_auth(access_token),
            TokenTransport::QueryParameter => self
                .client
                .get(url)
                .query(&[("access_token", access_token)]),
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("GET {} returned status {}", url, status);

        Ok(RawProfileResponse { status, body })
    }
}
