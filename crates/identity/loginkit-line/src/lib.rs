//! LINE Login identity strategy.
//!
//! This crate supplies LINE's endpoints and credential naming to a generic
//! OAuth2 engine and normalizes LINE's profile payload into the shared
//! profile record. The authorization-code flow itself (redirects, state,
//! token exchange) belongs to the engine, not to this crate.

mod config;
mod error;
mod http;
mod strategy;


pub use config::{
    DEFAULT_AUTHORIZATION_URL, DEFAULT_PROFILE_URL, DEFAULT_TOKEN_URL, LineConfig, PROVIDER_NAME,
};
pub use error::ConfigError;
pub use http::ReqwestAuthorizedHttp;
pub use strategy::LineStrategy;

// Re-export common types for convenience
pub use loginkit_core::{
    AuthorizedHttp, LoginStrategy, NormalizedProfile, OAuth2Settings, ProfileError, TokenTransport,
};
