use std::error::Error as StdError;
use std::future::Future;

use super::Request;

/// What came back over the wire, before any classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status as reported by the server
    pub status: u16,
    /// Final URL after redirects
    pub url: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("TLS negotiation failed: {0}")]
    Tls(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if is_tls_failure(&err) {
            TransportError::Tls(message)
        } else if err.is_timeout() {
            TransportError::Timeout(message)
        } else if err.is_connect() {
            TransportError::Connect(message)
        } else {
            TransportError::Request(message)
        }
    }
}

/// Render an error and all of its sources on one line
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// reqwest does not expose TLS failures as a kind. rustls errors show up
/// in the source chain, usually boxed inside an `io::Error` whose own
/// `source()` skips the wrapped error.
fn is_tls_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(cause) = current {
        if cause.is::<rustls::Error>() {
            return true;
        }
        let wrapped = cause
            .downcast_ref::<std::io::Error>()
            .and_then(std::io::Error::get_ref);
        if wrapped.is_some_and(|inner| is_tls_failure(inner)) {
            return true;
        }
        current = cause.source();
    }
    false
}

/// Blocking execution mode: the calling thread waits for the response.
pub trait Transport {
    fn fetch(&self, request: &Request) -> Result<RawResponse, TransportError>;
}

/// Cooperative execution mode: the calling task suspends at the single
/// network await and other tasks run meanwhile.
pub trait AsyncTransport {
    fn fetch(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
