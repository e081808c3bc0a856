use std::path::PathBuf;

/// Errors raised while setting up a lookup.
///
/// Failures that happen *during* a lookup (TLS, decode, missing geometry) are
/// never returned as errors; they are captured on the result's
/// `status_code`/`error` fields instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid proxy {url}: {source}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Provide API Key (argument or ${env_var})")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, Error>;
