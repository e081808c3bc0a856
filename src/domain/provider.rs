use serde_json::Value;

use super::{Attributes, Method};
use crate::api::Request;
use crate::tree::Tree;

/// Seam between the core and a provider-specific adapter.
///
/// The core runs the request, classifies the response and builds the
/// lookup tree; the adapter says where to send the request and how to read
/// canonical attributes back out.
///
/// For every entry returned by [`Provider::results`] the core builds the
/// tree, then calls `exceptions`, `catch_errors` and `extract` in that
/// order. Later entries overwrite the attributes of earlier ones.
pub trait Provider {
    fn name(&self) -> &str;

    fn method(&self) -> Method {
        Method::Geocode
    }

    fn request(&self) -> Request;

    /// Split decoded content into individual result entries.
    ///
    /// The default has no notion of entries and fails, which makes the core
    /// build the tree from the whole content instead.
    fn results(&self, _content: &Value) -> anyhow::Result<Vec<Value>> {
        anyhow::bail!("{} does not split results", self.name())
    }

    /// Repair provider quirks in the freshly built tree
    fn exceptions(&self, _tree: &mut Tree) {}

    /// Detect an API-level error reported inside a successful response
    fn catch_errors(&self, _tree: &Tree) -> Option<String> {
        None
    }

    fn extract(&self, entry: &Value, tree: &Tree) -> Attributes;
}
