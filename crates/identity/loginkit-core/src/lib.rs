//! Core types and traits shared by login strategies and the generic OAuth2 engine.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to fetch user profile")]
    Transport(#[source] BoxError),

    #[error("failed to parse user profile")]
    Parse(#[source] serde_json::Error),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// How the access token is presented on the profile request.
///
/// The engine defaults to the query parameter; providers that require the
/// `Authorization` header opt in through their settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenTransport {
    QueryParameter,
    AuthorizationHeader,
}

/// Fully-populated settings handed to the generic OAuth2 engine.
///
/// All endpoints are absolute URLs and the credentials are non-empty; the
/// strategy constructor enforces both before this record exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Settings {
    pub provider: String,
    pub client_id: String,
    pub client_secret: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub profile_endpoint: String,
    pub callback_endpoint: String,
    pub profile_token_transport: TokenTransport,
}

/// Raw response from the provider's profile endpoint.
#[derive(Debug, Clone)]
pub struct RawProfileResponse {
    pub status: u16,
    pub body: String,
}

impl RawProfileResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Provider-agnostic user profile record.
///
/// Fields missing from the provider payload stay `None`; `raw_body` and
/// `raw_parsed` carry the original response for diagnostic use by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub provider: String,
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub picture_url: Option<String>,
    pub status_message: Option<String>,
    pub raw_body: String,
    pub raw_parsed: serde_json::Value,
}

/// Authenticated-GET capability supplied by the OAuth2 engine.
#[async_trait]
pub trait AuthorizedHttp: Send + Sync {
    async fn get(
        &self,
        url: &str,
        access_token: &str,
        transport: TokenTransport,
    ) -> Result<RawProfileResponse, BoxError>;
}

#[async_trait]
pub trait LoginStrategy: Send + Sync {
    fn name(&self) -> &str;

    async fn user_profile(&self, access_token: &str) -> ProfileResult<NormalizedProfile>;
}
