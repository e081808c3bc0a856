use serde_json::Value;
use std::fmt;

use super::{Attributes, BoundingBox, Method, Provider};
use crate::api::{AsyncTransport, RawResponse, Request, Transport, TransportError};
use crate::quality;
use crate::response::{Content, StatusCode, classify};
use crate::tree::Tree;

pub const STATUS_OK: &str = "OK";
pub const NO_RESULTS: &str = "ERROR - No results found";
pub const NO_GEOMETRY: &str = "ERROR - No Geometry";
pub const UNHANDLED: &str = "ERROR - Unhandled Exception";
pub const SSL_ERROR: &str = "ERROR - SSLError";

/// Status code recorded when TLS negotiation fails
pub const SSL_STATUS: u16 = 495;

/// One geocoding lookup, normalized.
///
/// Built once per query by [`GeocodeResult::fetch`] or
/// [`GeocodeResult::fetch_async`]; afterwards it is a read-only surface and
/// every derived view is computed on access.
#[derive(Debug, Clone)]
pub struct GeocodeResult {
    provider: String,
    method: Method,
    status_code: StatusCode,
    error: Option<String>,
    url: String,
    content: Content,
    parse: Tree,
    attributes: Attributes,
}

impl GeocodeResult {
    fn new(provider: &str, method: Method, url: &str) -> Self {
        Self {
            provider: provider.to_string(),
            method,
            status_code: StatusCode::Unknown,
            error: None,
            url: url.to_string(),
            content: Content::Empty,
            parse: Tree::new(),
            attributes: Attributes::default(),
        }
    }

    /// Run the provider's request on a blocking transport.
    pub fn fetch<P, T>(provider: &P, transport: &T) -> Self
    where
        P: Provider + ?Sized,
        T: Transport + ?Sized,
    {
        let request = provider.request();
        let outcome = transport.fetch(&request);
        Self::from_outcome(provider, &request, outcome)
    }

    /// Run the provider's request on a cooperative transport. The only
    /// suspension point is the network call.
    pub async fn fetch_async<P, T>(provider: &P, transport: &T) -> Self
    where
        P: Provider + ?Sized,
        T: AsyncTransport,
    {
        let request = provider.request();
        let outcome = transport.fetch(&request).await;
        Self::from_outcome(provider, &request, outcome)
    }

    /// Classify a transport outcome and load it through the provider.
    ///
    /// Shared by both execution modes; never fails.
    pub fn from_outcome<P>(
        provider: &P,
        request: &Request,
        outcome: Result<RawResponse, TransportError>,
    ) -> Self
    where
        P: Provider + ?Sized,
    {
        let mut result = Self::new(provider.name(), provider.method(), &request.url);

        match outcome {
            Ok(raw) => result.read_response(raw),
            Err(TransportError::Tls(detail)) => {
                tracing::warn!(url = %request.url, %detail, "TLS negotiation failed");
                result.status_code = StatusCode::Code(SSL_STATUS);
                result.error = Some(SSL_ERROR.to_string());
            }
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "request failed");
                result.error = Some(format!("ERROR - {}", e));
            }
        }

        result.load_response(provider);
        result
    }

    fn read_response(&mut self, raw: RawResponse) {
        let classified = classify(raw);
        self.status_code = classified.status_code;
        self.url = classified.url;
        self.content = classified.content;
        self.error = classified.error;
    }

    fn load_response<P: Provider + ?Sized>(&mut self, provider: &P) {
        let entries = match &self.content {
            Content::Json(value) => provider.results(value),
            _ => Err(anyhow::anyhow!("no decoded content")),
        };

        let entries = entries.unwrap_or_else(|e| {
            tracing::debug!(provider = %self.provider, error = %e, "loading whole content as one entry");
            vec![self.content.to_json()]
        });

        for entry in &entries {
            self.load_entry(provider, entry);
        }
    }

    fn load_entry<P: Provider + ?Sized>(&mut self, provider: &P, entry: &Value) {
        self.parse.build(entry);
        provider.exceptions(&mut self.parse);
        if let Some(error) = provider.catch_errors(&self.parse) {
            self.error = Some(error);
        }
        self.attributes = provider.extract(entry, &self.parse);
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Final request URL (after redirects when a response was read)
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn parse(&self) -> &Tree {
        &self.parse
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn lat(&self) -> Option<f64> {
        self.attributes.lat.filter(|v| *v != 0.0)
    }

    pub fn lng(&self) -> Option<f64> {
        self.attributes.lng.filter(|v| *v != 0.0)
    }

    pub fn x(&self) -> Option<f64> {
        self.lng()
    }

    pub fn y(&self) -> Option<f64> {
        self.lat()
    }

    /// Both coordinates present and non-zero
    pub fn ok(&self) -> bool {
        self.lat().is_some() && self.lng().is_some()
    }

    pub fn address(&self) -> Option<&str> {
        non_empty(&self.attributes.address)
    }

    pub fn housenumber(&self) -> Option<&str> {
        non_empty(&self.attributes.housenumber)
    }

    pub fn street_number(&self) -> Option<&str> {
        self.housenumber()
    }

    pub fn street(&self) -> Option<&str> {
        non_empty(&self.attributes.street)
    }

    pub fn road(&self) -> Option<&str> {
        self.street()
    }

    pub fn route(&self) -> Option<&str> {
        self.street()
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.attributes.city)
    }

    pub fn locality(&self) -> Option<&str> {
        self.city()
    }

    pub fn state(&self) -> Option<&str> {
        non_empty(&self.attributes.state)
    }

    pub fn province(&self) -> Option<&str> {
        self.state()
    }

    pub fn country(&self) -> Option<&str> {
        non_empty(&self.attributes.country)
    }

    pub fn postal(&self) -> Option<&str> {
        non_empty(&self.attributes.postal)
    }

    pub fn accuracy(&self) -> Option<&str> {
        non_empty(&self.attributes.accuracy)
    }

    pub fn quality(&self) -> Option<&str> {
        non_empty(&self.attributes.quality)
    }

    pub fn population(&self) -> Option<u64> {
        self.attributes.population.filter(|p| *p != 0)
    }

    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.attributes.bbox.as_ref()
    }

    pub fn northeast(&self) -> Option<[f64; 2]> {
        self.bbox().map(BoundingBox::northeast)
    }

    pub fn northwest(&self) -> Option<[f64; 2]> {
        self.bbox().map(BoundingBox::northwest)
    }

    pub fn southeast(&self) -> Option<[f64; 2]> {
        self.bbox().map(BoundingBox::southeast)
    }

    pub fn southwest(&self) -> Option<[f64; 2]> {
        self.bbox().map(BoundingBox::southwest)
    }

    pub fn westsouth(&self) -> Option<[f64; 2]> {
        self.bbox().map(BoundingBox::westsouth)
    }

    pub fn eastnorth(&self) -> Option<[f64; 2]> {
        self.bbox().map(BoundingBox::eastnorth)
    }

    /// 0-10 quality estimate from the bounding box extent
    pub fn confidence(&self) -> u8 {
        quality::confidence(self.bbox())
    }

    /// Outcome of the lookup, most specific reason first.
    pub fn status(&self) -> &str {
        if self.ok() {
            return STATUS_OK;
        }
        if let Some(error) = self.error() {
            return error;
        }
        if self.status_code.is(200) {
            if self.address().is_none() {
                return NO_RESULTS;
            }
            return NO_GEOMETRY;
        }
        UNHANDLED
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn title_case(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

impl fmt::Display for GeocodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<[{}] {} - {}",
            self.status(),
            title_case(&self.provider),
            self.method
        )?;
        if let Some(address) = self.address() {
            write!(f, " [{}]", address)?;
        }
        write!(f, ">")
    }
}
