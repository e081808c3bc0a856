use std::time::Duration;

use super::Proxies;

/// Default per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// One HTTP GET as a provider adapter describes it.
#[derive(Debug, Clone)]
pub struct Request {
    pub url: String,
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub proxies: Option<Proxies>,
}

impl Request {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
            headers: Vec::new(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            proxies: None,
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxies(mut self, proxies: Proxies) -> Self {
        self.proxies = Some(proxies);
        self
    }

    /// The proxy URL this request should go through, if any
    pub fn proxy(&self) -> Option<&str> {
        self.proxies.as_ref().and_then(Proxies::select)
    }

    /// Transport-wide headers first, then this request's own, so a request
    /// header sent later wins on servers that keep the last value.
    pub(crate) fn headers_with<'a>(
        &'a self,
        defaults: &'a [(String, String)],
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        defaults
            .iter()
            .chain(&self.headers)
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
