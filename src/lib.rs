//! geocoder - Normalize geocoding provider responses into one canonical result

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod geometry;
pub mod quality;
pub mod report;
pub mod response;
pub mod tree;

pub use api::{AsyncHttpTransport, BlockingTransport, Proxies, Request};
pub use config::{FileConfig, TransportConfig};
pub use domain::{Attributes, BoundingBox, GeocodeResult, Method, Provider};
pub use error::{Error, Result};
pub use response::{Content, StatusCode};
pub use tree::Tree;
