use alloc::boxed::Box;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// LoadObserver

/// A sink for "class did load" events.
///
/// Observers registered on a [`ClassRegistry`](crate::ClassRegistry) are
/// notified, in registration order, each time a bundled class finishes
/// loading. A class's notification fires only after its dependencies have
/// been announced and after its modifier classes have loaded.
///
/// Any `FnMut(&str)` closure is an observer:
///
/// ```
/// use folio_bundle::{ClassRegistry, StaticModuleLoader};
///
/// let mut registry = ClassRegistry::new(StaticModuleLoader::new());
/// registry.add_observer(|class_name: &str| {
///     println!("did load {class_name}");
/// });
/// ```
pub trait LoadObserver: Send + Sync {
    /// The class registered under `class_name` finished loading.
    fn class_did_load(&mut self, class_name: &str);
}

impl<F> LoadObserver for F
where
    F: FnMut(&str) + Send + Sync,
{
    #[inline]
    fn class_did_load(&mut self, class_name: &str) {
        self(class_name);
    }
}

// -----------------------------------------------------------------------------
// Observers

/// The observer list owned by a registry.
#[derive(Default)]
pub(crate) struct Observers {
    sinks: Vec<Box<dyn LoadObserver>>,
}

impl Observers {
    pub(crate) fn push(&mut self, observer: Box<dyn LoadObserver>) {
        self.sinks.push(observer);
    }

    pub(crate) fn notify(&mut self, class_name: &str) {
        for sink in &mut self.sinks {
            sink.class_did_load(class_name);
        }
    }
}
