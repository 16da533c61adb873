#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod bundle;
mod class;
mod error;
mod loader;
mod manifest;
mod object;
mod observer;
mod registry;

#[cfg(feature = "auto_register")]
mod static_registration;

// -----------------------------------------------------------------------------
// Top-level exports

pub use bundle::Bundle;
pub use class::{BundledClass, ClassDescription};
pub use error::{LoadError, LoaderError, RegisterError};
pub use loader::{ModuleLoader, StaticModuleLoader};
pub use manifest::{BundleManifest, ManifestClass};
pub use object::ClassObject;
pub use observer::LoadObserver;
pub use registry::ClassRegistry;

#[cfg(feature = "std")]
pub use registry::ClassRegistryArc;

#[cfg(feature = "auto_register")]
pub use static_registration::StaticClassRegistration;

// Needed by the `submit_bundled_class!` expansion.
#[cfg(feature = "auto_register")]
#[doc(hidden)]
pub use inventory;
