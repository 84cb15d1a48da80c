//! Metadata providers: where [`SourceType`] descriptions come from.

pub mod manifest;
pub mod registry;

pub use manifest::{load_manifest, load_manifests, parse_manifest, ManifestFormat};
pub use registry::TypeRegistry;

use crate::core::SourceType;
use crate::errors::Result;

/// Resolves type names to metadata.
pub trait MetadataProvider {
    /// Look up a type by binary name.
    ///
    /// Fails with `Error::TypeResolution` when the name is unknown.
    fn resolve(&self, name: &str) -> Result<SourceType>;

    /// Names this provider can resolve, if it can enumerate them
    fn known_types(&self) -> Vec<String> {
        Vec::new()
    }
}
