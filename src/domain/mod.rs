pub mod attributes;
pub mod bbox;
pub mod provider;
pub mod result;

#[cfg(test)]
pub(crate) mod testing;

pub use attributes::{Attributes, Method};
pub use bbox::BoundingBox;
pub use provider::Provider;
pub use result::GeocodeResult;
