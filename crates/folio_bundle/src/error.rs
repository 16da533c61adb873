use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// LoaderError

/// Error reported by a [`ModuleLoader`](crate::ModuleLoader) when the
/// underlying module-loading facility fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LoaderError {
    message: Box<str>,
}

impl LoaderError {
    /// Create a loader error from any displayable reason.
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string().into_boxed_str(),
        }
    }
}

// -----------------------------------------------------------------------------
// RegisterError

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegisterError {
    #[error("a bundled class named `{0}` is already registered")]
    Duplicate(Box<str>),

    #[error("bundle `{bundle}` declares class `{class_name}` more than once")]
    DuplicateInManifest {
        bundle: Box<str>,
        class_name: Box<str>,
    },
}

// -----------------------------------------------------------------------------
// LoadError

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("no bundled class is registered under the name `{0}`")]
    NotRegistered(Box<str>),

    #[error("dependency cycle detected while loading bundled class `{0}`")]
    DependencyCycle(Box<str>),

    #[error("failed to load code for bundled class `{class_name}`: {source}")]
    Loader {
        class_name: Box<str>,
        source: LoaderError,
    },
}
