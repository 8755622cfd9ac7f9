//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("channel id must not be empty")]
    MissingChannelId,

    #[error("channel secret must not be empty")]
    MissingChannelSecret,

    #[error("invalid {endpoint} URL: {source}")]
    InvalidUrl {
        endpoint: &'static str,
        #[source]
        source: url::ParseError,
    },
}
