use alloc::boxed::Box;

// -----------------------------------------------------------------------------
// Bundle

/// A distributable unit of packaged code and resources, loaded on demand.
///
/// A bundle outlives every [`BundledClass`](crate::BundledClass) registered
/// from it; registry entries therefore hold their bundle behind an
/// [`Arc`](alloc::sync::Arc).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bundle {
    identifier: Box<str>,
    path: Box<str>,
}

impl Bundle {
    /// Create a bundle handle from its identifier and its on-disk location.
    ///
    /// The path is opaque to the registry; only the
    /// [`ModuleLoader`](crate::ModuleLoader) interprets it.
    pub fn new(identifier: impl Into<Box<str>>, path: impl Into<Box<str>>) -> Self {
        Self {
            identifier: identifier.into(),
            path: path.into(),
        }
    }

    /// The bundle's unique identifier.
    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Where the bundle lives on disk.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }
}
