use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::class::ClassDescription;

// -----------------------------------------------------------------------------
// BundleManifest

/// The class declarations carried by one bundle, scanned at startup.
///
/// The manifest is format-agnostic: anything with a serde deserializer
/// works. Registration happens through
/// [`ClassRegistry::register_manifest`](crate::ClassRegistry::register_manifest).
///
/// ```
/// use folio_bundle::BundleManifest;
///
/// let manifest: BundleManifest = serde_json::from_str(r#"{
///     "classes": [
///         { "name": "Exporter", "description": { "immediate_load": true } },
///         { "name": "Codec" }
///     ]
/// }"#).unwrap();
///
/// assert_eq!(manifest.classes.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BundleManifest {
    /// The classes this bundle contributes.
    pub classes: Vec<ManifestClass>,
}

/// One class declaration inside a [`BundleManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestClass {
    /// The unique class name to register.
    pub name: String,

    /// Registration metadata for the class.
    #[serde(default)]
    pub description: ClassDescription,
}
