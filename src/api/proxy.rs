use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Proxy configuration as callers and config files supply it.
///
/// Accepts a single URL, a list of URLs, or a scheme-keyed table
/// (`{ https = "...", http = "..." }`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Proxies {
    Single(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl Proxies {
    /// Pick the one proxy a request goes through.
    ///
    /// First element of a list; for a table `https`, then `http`, then the
    /// first value in key order. Empty strings count as no proxy.
    pub fn select(&self) -> Option<&str> {
        let chosen = match self {
            Proxies::Single(url) => Some(url.as_str()),
            Proxies::List(urls) => urls.first().map(String::as_str),
            Proxies::Map(map) => map
                .get("https")
                .or_else(|| map.get("http"))
                .or_else(|| map.values().next())
                .map(String::as_str),
        };
        chosen.filter(|url| !url.is_empty())
    }
}

/// Proxy for every scheme, as both transports install it
pub(crate) fn build_proxy(url: &str) -> Result<reqwest::Proxy> {
    reqwest::Proxy::all(url).map_err(|source| Error::Proxy {
        url: url.to_string(),
        source,
    })
}

impl From<&str> for Proxies {
    fn from(url: &str) -> Self {
        Proxies::Single(url.to_string())
    }
}
