use alloc::boxed::Box;

use folio_utils::hash::HashMap;

use crate::bundle::Bundle;
use crate::error::LoaderError;
use crate::object::ClassObject;

// -----------------------------------------------------------------------------
// ModuleLoader

/// The host module-loading facility, injected into the
/// [`ClassRegistry`](crate::ClassRegistry).
///
/// Implementations resolve the executable code for a class out of its bundle
/// and hand back the resolved [`ClassObject`]. The registry guarantees that a
/// class's dependencies have finished loading before its loader call, and
/// that each class is loaded at most once.
pub trait ModuleLoader: Send + Sync {
    /// Load the code for `class_name` out of `bundle`.
    fn load_class(
        &mut self,
        bundle: &Bundle,
        class_name: &str,
    ) -> Result<ClassObject, LoaderError>;
}

// -----------------------------------------------------------------------------
// StaticModuleLoader

/// A [`ModuleLoader`] over a fixed table of pre-built class objects.
///
/// Stands in for classes that are already linked into the executable and
/// need no dynamic loading step.
#[derive(Debug, Default)]
pub struct StaticModuleLoader {
    classes: HashMap<Box<str>, ClassObject>,
}

impl StaticModuleLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pre-built class object under `class_name`, replacing any
    /// previous one.
    pub fn insert(&mut self, class_name: impl Into<Box<str>>, object: ClassObject) -> &mut Self {
        self.classes.insert(class_name.into(), object);
        self
    }
}

impl ModuleLoader for StaticModuleLoader {
    fn load_class(
        &mut self,
        bundle: &Bundle,
        class_name: &str,
    ) -> Result<ClassObject, LoaderError> {
        match self.classes.get(class_name) {
            Some(object) => Ok(object.clone()),
            None => Err(LoaderError::new(format_args!(
                "class `{class_name}` is not in the static class table of bundle `{}`",
                bundle.identifier()
            ))),
        }
    }
}
