//! LINE login strategy implementation.

use crate::config::{LineConfig, PROVIDER_NAME};
use crate::error::ConfigError;
use crate::http::ReqwestAuthorizedHttp;
use async_trait::async_trait;
use loginkit_core::{
    AuthorizedHttp, LoginStrategy, NormalizedProfile, OAuth2Settings, ProfileError, ProfileResult,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Authenticates users against LINE Login by delegating the OAuth2 flow to
/// the generic engine and normalizing LINE's profile payload.
#[derive(Clone)]
pub struct LineStrategy {
    settings: OAuth2Settings,
    http: Arc<dyn AuthorizedHttp>,
}

impl LineStrategy {
    pub fn new(config: LineConfig) -> Result<Self, ConfigError> {
        Self::with_http(config, Arc::new(ReqwestAuthorizedHttp::default()))
    }

    /// Build the strategy around an injected GET capability.
    pub fn with_http(
        config: LineConfig,
        http: Arc<dyn AuthorizedHttp>,
    ) -> Result<Self, ConfigError> {
        let settings = config.resolve()?;
        Ok(Self { settings, http })
    }

    /// Engine-facing settings produced at construction.
    pub fn settings(&self) -> &OAuth2Settings {
        &self.settings
    }

    fn string_field(json: &Value, field: &str) -> Option<String> {
        json.get(field).and_then(|v| v.as_str()).map(String::from)
    }
}

#[async_trait]
impl LoginStrategy for LineStrategy {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn user_profile(&self, access_token: &str) -> ProfileResult<NormalizedProfile> {
        let response = self
            .http
            .get(
                &self.settings.profile_endpoint,
                access_token,
                self.settings.profile_token_transport,
            )
            .await
            .map_err(ProfileError::Transport)?;

        if !response.is_success() {
            error!("Profile request failed: {}", response.body);
            return Err(ProfileError::Transport(
                format!("profile endpoint returned status {}", response.status).into(),
            ));
        }

        let parsed: Value = serde_json::from_str(&response.body).map_err(ProfileError::Parse)?;

        let profile = NormalizedProfile {
            provider: PROVIDER_NAME.to_string(),
            id: Self::string_field(&parsed, "userId"),
            display_name: Self::string_field(&parsed, "displayName"),
            picture_url: Self::string_field(&parsed, "pictureUrl"),
            status_message: Self::string_field(&parsed, "statusMessage"),
            raw_body: response.body,
            raw_parsed: parsed,
        };

        debug!(
            "Successfully retrieved LINE profile for subject: {}",
            profile.id.as_deref().unwrap_or("<unknown>")
        );

        Ok(profile)
    }
}
