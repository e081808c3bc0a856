use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{DEFAULT_TIMEOUT_SECS, Proxies};
use crate::error::{Error, Result};

const DEFAULT_USER_AGENT: &str = concat!("geocoder/", env!("CARGO_PKG_VERSION"));

fn default_timeout_secs() -> f64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub proxies: Option<Proxies>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            proxies: None,
            headers: BTreeMap::new(),
        }
    }
}

impl FileConfig {
    /// Search the usual locations and return the first config that parses.
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    /// First config in `paths` that exists and parses; broken files are
    /// logged and skipped.
    pub fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::from_path(path) {
                Ok(config) => return Some(config),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring config file"),
            }
        }
        None
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: Duration::try_from_secs_f64(self.timeout_secs)
                .unwrap_or_else(|_| Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS)),
            user_agent: self.user_agent.clone(),
            proxies: self.proxies.clone(),
            headers: self
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// Settings shared by the blocking and cooperative transports
#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub proxies: Option<Proxies>,
    /// Sent with every request, before the request's own headers
    pub headers: Vec<(String, String)>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        FileConfig::default().transport()
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("geocoder.toml"));
    paths.push(PathBuf::from(".geocoder.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("geocoder").join("config.toml"));
        paths.push(config_dir.join("geocoder.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".geocoder.toml"));
    }

    paths
}
