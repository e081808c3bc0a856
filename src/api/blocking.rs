use reqwest::blocking::Client;

use super::{RawResponse, Request, Transport, TransportError};
use crate::config::TransportConfig;
use super::proxy::build_proxy;
use crate::error::{Error, Result};

/// Blocking HTTP transport backed by `reqwest::blocking`.
///
/// Must not be created or used from inside an async runtime.
#[derive(Debug, Clone)]
pub struct BlockingTransport {
    client: Client,
    config: TransportConfig,
}

impl BlockingTransport {
    pub fn new(config: TransportConfig) -> Result<Self> {
        let client = build_client(&config, config.proxies.as_ref().and_then(|p| p.select()))?;
        Ok(Self { client, config })
    }

    /// Reuse a caller-owned client; no synchronization is done over it.
    pub fn from_client(client: Client, config: TransportConfig) -> Self {
        Self { client, config }
    }

    /// A request carrying its own proxy gets a dedicated client, since
    /// reqwest fixes proxies at client construction.
    fn client_for(&self, request: &Request) -> std::result::Result<Client, TransportError> {
        match request.proxy() {
            Some(proxy) => build_client(&self.config, Some(proxy))
                .map_err(|e| TransportError::Client(e.to_string())),
            None => Ok(self.client.clone()),
        }
    }
}

fn build_client(config: &TransportConfig, proxy: Option<&str>) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout);

    if let Some(url) = proxy {
        builder = builder.proxy(build_proxy(url)?);
    }

    builder.build().map_err(Error::Client)
}

impl Transport for BlockingTransport {
    fn fetch(&self, request: &Request) -> std::result::Result<RawResponse, TransportError> {
        let client = self.client_for(request)?;

        let mut builder = client
            .get(&request.url)
            .query(&request.params)
            .timeout(request.timeout);
        for (key, value) in request.headers_with(&self.config.headers) {
            builder = builder.header(key, value);
        }

        tracing::debug!(url = %request.url, "sending blocking request");
        let response = builder.send()?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.bytes()?.to_vec();

        Ok(RawResponse { status, url, body })
    }
}
