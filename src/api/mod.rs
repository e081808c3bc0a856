pub mod blocking;
pub mod cooperative;
pub mod key;
pub mod proxy;
pub mod request;
pub mod transport;

pub use blocking::BlockingTransport;
pub use cooperative::AsyncHttpTransport;
pub use key::resolve_api_key;
pub use proxy::Proxies;
pub use request::{DEFAULT_TIMEOUT_SECS, Request};
pub use transport::{AsyncTransport, RawResponse, Transport, TransportError};
