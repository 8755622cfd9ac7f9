//! LINE channel configuration.

use crate::error::ConfigError;
use loginkit_core::{OAuth2Settings, TokenTransport};
use serde::{Deserialize, Serialize};
use url::Url;

pub const PROVIDER_NAME: &str = "line";

pub const DEFAULT_AUTHORIZATION_URL: &str = "https://access.line.me/oauth2/v2.1/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://api.line.me/oauth2/v2.1/token";
pub const DEFAULT_PROFILE_URL: &str = "https://api.line.me/v2/profile";

/// LINE channel credentials plus optional endpoint overrides.
///
/// Endpoints left unset resolve to LINE's well-known URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    pub channel_id: String,
    pub channel_secret: String,
    pub callback_url: String,
    pub authorization_url: Option<String>,
    pub token_url: Option<String>,
    pub profile_url: Option<String>,
}

impl LineConfig {
    pub fn new(
        channel_id: impl Into<String>,
        channel_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            channel_secret: channel_secret.into(),
            callback_url: callback_url.into(),
            authorization_url: None,
            token_url: None,
            profile_url: None,
        }
    }

    pub fn with_authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = Some(url.into());
        self
    }

    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    pub fn with_profile_url(mut self, url: impl Into<String>) -> Self {
        self.profile_url = Some(url.into());
        self
    }

    /// Fill in provider defaults and produce the engine-facing settings.
    ///
    /// The profile request always uses the `Authorization` header; LINE
    /// rejects the engine's query-parameter default.
    pub fn resolve(&self) -> Result<OAuth2Settings, ConfigError> {
        if self.channel_id.is_empty() {
            return Err(ConfigError::MissingChannelId);
        }
        if self.channel_secret.is_empty() {
            return Err(ConfigError::MissingChannelSecret);
        }

        let authorization_endpoint = self
            .authorization_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHORIZATION_URL.to_string());
        let token_endpoint = self
            .token_url
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let profile_endpoint = self
            .profile_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_URL.to_string());

        for (endpoint, value) in [
            ("authorization", authorization_endpoint.as_str()),
            ("token", token_endpoint.as_str()),
            ("profile", profile_endpoint.as_str()),
            ("callback", self.callback_url.as_str()),
        ] {
            Url::parse(value).map_err(|source| ConfigError::InvalidUrl { endpoint, source })?;
        }

        Ok(OAuth2Settings {
            provider: PROVIDER_NAME.to_string(),
            client_id: self.channel_id.clone(),
            client_secret: self.channel_secret.clone(),
            authorization_endpoint,
            token_endpoint,
            profile_endpoint,
            callback_endpoint: self.callback_url.clone(),
            profile_token_transport: TokenTransport::AuthorizationHeader,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> LineConfig {
        LineConfig::new(
            "test_channel_id",
            "test_channel_secret",
            "http://localhost:3000/auth/line/callback",
        )
    }

    #[test]
    fn test_default_endpoints() {
        let settings = base_config().resolve().unwrap();

        assert_eq!(settings.provider, "line");
        assert_eq!(settings.authorization_endpoint, DEFAULT_AUTHORIZATION_URL);
        assert_eq!(settings.token_endpoint, DEFAULT_TOKEN_URL);
        assert_eq!(settings.profile_endpoint, DEFAULT_PROFILE_URL);
        assert_eq!(
            settings.callback_endpoint,
            "http://localhost:3000/auth/line/callback"
        );
        assert_eq!(
            settings.profile_token_transport,
            TokenTransport::AuthorizationHeader
        );
    }

    #[test]
    fn test_explicit_endpoints_preserved() {
        let settings = base_config()
            .with_authorization_url("https://sandbox.example.com/authorize")
            .with_token_url("https://sandbox.example.com/token")
            .with_profile_url("https://sandbox.example.com/profile")
            .resolve()
            .unwrap();

        assert_eq!(
            settings.authorization_endpoint,
            "https://sandbox.example.com/authorize"
        );
        assert_eq!(settings.token_endpoint, "https://sandbox.example.com/token");
        assert_eq!(
            settings.profile_endpoint,
            "https://sandbox.example.com/profile"
        );
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let mut config = base_config();
        config.channel_id = String::new();
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::MissingChannelId)
        ));

        let mut config = base_config();
        config.channel_secret = String::new();
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::MissingChannelSecret)
        ));
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let result = base_config().with_profile_url("/v2/profile").resolve();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidUrl {
                endpoint: "profile",
                ..
            })
        ));
    }

    #[test]
    fn test_relative_callback_rejected() {
        let mut config = base_config();
        config.callback_url = "auth/line/callback".to_string();

        assert!(matches!(
            config.resolve(),
            Err(ConfigError::InvalidUrl {
                endpoint: "callback",
                ..
            })
        ));
    }
}
