//! Turns a raw transport outcome into a status code and decoded content.

use serde_json::Value;
use std::fmt;

use crate::api::RawResponse;

pub const JSON_CORRUPTED: &str = "ERROR - JSON Corrupted";

/// Transport status of a result; `Unknown` until a response is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCode {
    #[default]
    Unknown,
    Code(u16),
}

impl StatusCode {
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            StatusCode::Unknown => None,
            StatusCode::Code(code) => Some(*code),
        }
    }

    pub fn is(&self, code: u16) -> bool {
        self.as_u16() == Some(code)
    }

    pub fn to_json(&self) -> Value {
        match self {
            StatusCode::Unknown => Value::from("Unknown"),
            StatusCode::Code(code) => Value::from(*code),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Unknown => write!(f, "Unknown"),
            StatusCode::Code(code) => write!(f, "{}", code),
        }
    }
}

/// Decoded payload of a response
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    /// Nothing was read (transport failure or non-200 empty body)
    #[default]
    Empty,
    Json(Value),
    /// Body that failed to decode as JSON
    Raw(Vec<u8>),
}

impl Content {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Content::Json(value) => Some(value),
            _ => None,
        }
    }

    /// JSON view used for tree building and debug output; raw bytes become
    /// a lossy UTF-8 string.
    pub fn to_json(&self) -> Value {
        match self {
            Content::Empty => Value::Null,
            Content::Json(value) => value.clone(),
            Content::Raw(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

/// Outcome of reading a response
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub status_code: StatusCode,
    pub url: String,
    pub content: Content,
    pub error: Option<String>,
}

/// Classify a raw response.
///
/// A non-empty body means the provider was reachable, so the status becomes
/// 200 whatever the server said; providers often report errors inside a
/// 200 JSON body. A 200 body that does not decode becomes a 400.
pub fn classify(raw: RawResponse) -> Classified {
    let mut status = raw.status;
    if !raw.body.is_empty() {
        status = 200;
    }

    let mut classified = Classified {
        status_code: StatusCode::Code(status),
        url: raw.url,
        content: Content::Empty,
        error: None,
    };

    if status == 200 {
        match serde_json::from_slice::<Value>(&raw.body) {
            Ok(value) => classified.content = Content::Json(value),
            Err(e) => {
                tracing::warn!(url = %classified.url, error = %e, "response body is not valid JSON");
                classified.status_code = StatusCode::Code(400);
                classified.error = Some(JSON_CORRUPTED.to_string());
                classified.content = Content::Raw(raw.body);
            }
        }
    }

    classified
}
