use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::bundle::Bundle;
use crate::object::ClassObject;

// -----------------------------------------------------------------------------
// ClassDescription

/// Registration metadata for one bundled class, supplied when the class is
/// registered and read-only afterwards.
///
/// Bundle manifests carry one description per declared class, so the type
/// deserializes from any self-describing serde format. Unknown keys are
/// ignored, descriptions may carry extra data for other framework layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassDescription {
    /// Load this class eagerly during the startup pass instead of on
    /// first use.
    pub immediate_load: bool,

    /// Class names that must finish loading before this one.
    pub dependencies: Vec<String>,

    /// Class names this class patches once they have loaded.
    pub modifies: Vec<String>,
}

// -----------------------------------------------------------------------------
// BundledClass

/// One registered, possibly-not-yet-loaded class.
///
/// Entries are created by
/// [`ClassRegistry::register_class`](crate::ClassRegistry::register_class)
/// and live as long as the registry. Only two things change after
/// registration: the entry flips to loaded exactly once, and later
/// registrations may append to its modifier list.
#[derive(Debug)]
pub struct BundledClass {
    class_name: Box<str>,
    bundle: Arc<Bundle>,
    description: ClassDescription,
    dependency_class_names: Vec<Box<str>>,
    modifying_class_names: Vec<Box<str>>,
    class_object: Option<ClassObject>,
    loaded: bool,
}

impl BundledClass {
    pub(crate) fn new(
        class_name: Box<str>,
        bundle: Arc<Bundle>,
        description: ClassDescription,
    ) -> Self {
        let dependency_class_names = description
            .dependencies
            .iter()
            .map(|name| name.as_str().into())
            .collect();

        Self {
            class_name,
            bundle,
            description,
            dependency_class_names,
            modifying_class_names: Vec::new(),
            class_object: None,
            loaded: false,
        }
    }

    pub(crate) fn mark_loaded(&mut self, object: ClassObject) {
        self.class_object = Some(object);
        self.loaded = true;
    }

    pub(crate) fn push_modifier(&mut self, class_name: Box<str>) {
        self.modifying_class_names.push(class_name);
    }

    // Access methods

    /// The unique name this class is registered under.
    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The bundle that contributes this class.
    #[inline]
    pub fn bundle(&self) -> &Arc<Bundle> {
        &self.bundle
    }

    /// The metadata this class was registered with.
    #[inline]
    pub fn description(&self) -> &ClassDescription {
        &self.description
    }

    /// Names of the classes that must load before this one, in load order.
    pub fn dependency_class_names(&self) -> impl Iterator<Item = &str> {
        self.dependency_class_names.iter().map(|name| &**name)
    }

    /// Names of the classes that patch this one after it loads, in the
    /// order they will be applied.
    pub fn modifying_class_names(&self) -> impl Iterator<Item = &str> {
        self.modifying_class_names.iter().map(|name| &**name)
    }

    /// The loaded class object, or `None` while the entry is unloaded.
    #[inline]
    pub fn class_object(&self) -> Option<&ClassObject> {
        self.class_object.as_ref()
    }

    /// Whether the class has finished loading.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
