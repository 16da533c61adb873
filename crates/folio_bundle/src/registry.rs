use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use folio_utils::hash::{HashMap, HashSet};

use crate::bundle::Bundle;
use crate::class::{BundledClass, ClassDescription};
use crate::error::{LoadError, RegisterError};
use crate::loader::ModuleLoader;
use crate::manifest::BundleManifest;
use crate::object::ClassObject;
use crate::observer::{LoadObserver, Observers};

// -----------------------------------------------------------------------------
// ClassRegistry

/// The directory of lazily-loadable classes contributed by plugin bundles.
///
/// Classes are registered once, when their bundle is scanned, and loaded on
/// first use: resolving a class pulls its dependencies in first, loads its
/// module through the injected [`ModuleLoader`], applies any classes that
/// patch it, and then announces the load to every registered
/// [`LoadObserver`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use folio_bundle::{
///     Bundle, ClassDescription, ClassObject, ClassRegistry, StaticModuleLoader,
/// };
///
/// struct Exporter;
///
/// let mut loader = StaticModuleLoader::new();
/// loader.insert("Exporter", ClassObject::new(Exporter));
///
/// let mut registry = ClassRegistry::new(loader);
/// let bundle = Arc::new(Bundle::new("com.example.exporter", "plugins/exporter"));
/// registry
///     .register_class("Exporter", bundle, ClassDescription::default())
///     .unwrap();
///
/// let class = registry.class_named("Exporter").unwrap();
/// assert!(class.is::<Exporter>());
/// ```
pub struct ClassRegistry {
    classes: HashMap<Box<str>, BundledClass>,
    // Modifier declarations whose target has not been registered yet,
    // keyed by target class name.
    pending_modifiers: HashMap<Box<str>, Vec<Box<str>>>,
    loader: Box<dyn ModuleLoader>,
    observers: Observers,
}

impl ClassRegistry {
    /// Create an empty registry around the given module loader.
    pub fn new(loader: impl ModuleLoader + 'static) -> Self {
        Self {
            classes: HashMap::default(),
            pending_modifiers: HashMap::default(),
            loader: Box::new(loader),
            observers: Observers::default(),
        }
    }

    /// Register `observer` to be notified after every class load.
    pub fn add_observer(&mut self, observer: impl LoadObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // --------------------------------------------------------------------------
    // Registration

    /// Register a new bundled class under `name`.
    ///
    /// `description` supplies the dependency list, the immediate-load flag
    /// and the names of classes this one patches. Registering a name twice
    /// is a caller error and fails with [`RegisterError::Duplicate`].
    pub fn register_class(
        &mut self,
        name: &str,
        bundle: Arc<Bundle>,
        description: ClassDescription,
    ) -> Result<(), RegisterError> {
        if self.classes.contains_key(name) {
            return Err(RegisterError::Duplicate(name.into()));
        }

        let mut entry = BundledClass::new(name.into(), bundle, description);

        // Modifiers that were declared before their target existed.
        if let Some(pending) = self.pending_modifiers.remove(name) {
            for modifier in pending {
                entry.push_modifier(modifier);
            }
        }

        let modifies: Vec<Box<str>> = entry
            .description()
            .modifies
            .iter()
            .map(|target| target.as_str().into())
            .collect();

        log::trace!(
            "registered bundled class `{name}` from bundle `{}`",
            entry.bundle().identifier()
        );
        self.classes.insert(name.into(), entry);

        for target in modifies {
            match self.classes.get_mut(&*target) {
                Some(target_entry) => target_entry.push_modifier(name.into()),
                None => self
                    .pending_modifiers
                    .entry(target)
                    .or_default()
                    .push(name.into()),
            }
        }

        Ok(())
    }

    /// Register every class declared by `manifest` as contributed by
    /// `bundle`.
    ///
    /// The manifest is validated first: declaring the same class name twice
    /// within one manifest fails with [`RegisterError::DuplicateInManifest`]
    /// before anything is registered. Classes registered before a collision
    /// with an earlier bundle stay registered.
    pub fn register_manifest(
        &mut self,
        bundle: &Arc<Bundle>,
        manifest: &BundleManifest,
    ) -> Result<(), RegisterError> {
        let mut seen: HashSet<&str> = HashSet::default();
        for class in &manifest.classes {
            if !seen.insert(class.name.as_str()) {
                return Err(RegisterError::DuplicateInManifest {
                    bundle: bundle.identifier().into(),
                    class_name: class.name.as_str().into(),
                });
            }
        }

        for class in &manifest.classes {
            self.register_class(&class.name, Arc::clone(bundle), class.description.clone())?;
        }
        Ok(())
    }

    /// Register every class submitted through
    /// [`submit_bundled_class!`](crate::submit_bundled_class).
    ///
    /// Classes submitted under the same bundle identifier share one
    /// [`Bundle`]. Names that are already registered are skipped, so
    /// repeated calls are cheap. Returns the number of classes this call
    /// registered.
    #[cfg(feature = "auto_register")]
    pub fn register_static_classes(&mut self) -> usize {
        use crate::static_registration::StaticClassRegistration;

        let mut bundles: HashMap<&'static str, Arc<Bundle>> = HashMap::default();
        let mut registered = 0;

        for record in inventory::iter::<StaticClassRegistration> {
            if self.contains(record.class_name) {
                continue;
            }
            let bundle = bundles.entry(record.bundle_identifier).or_insert_with(|| {
                Arc::new(Bundle::new(record.bundle_identifier, record.bundle_path))
            });
            match self.register_class(
                record.class_name,
                Arc::clone(bundle),
                (record.description)(),
            ) {
                Ok(()) => registered += 1,
                Err(error) => log::warn!("skipping static class registration: {error}"),
            }
        }

        registered
    }

    // --------------------------------------------------------------------------
    // Lookup

    /// The registry entry for `name`, or `None` if no class is registered
    /// under it. Never forces a load.
    #[inline]
    pub fn bundled_class(&self, name: &str) -> Option<&BundledClass> {
        self.classes.get(name)
    }

    /// The bundle owning the class registered under `name`, without forcing
    /// a load.
    pub fn bundle_for_class(&self, name: &str) -> Option<Arc<Bundle>> {
        self.classes.get(name).map(|entry| Arc::clone(entry.bundle()))
    }

    /// Whether a class is registered under `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Number of registered classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns an iterator over the registered entries, in arbitrary order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &BundledClass> {
        self.classes.values()
    }

    // --------------------------------------------------------------------------
    // Loading

    /// Resolve the loaded class object for `name`, loading it and its
    /// dependencies first if necessary.
    pub fn class_named(&mut self, name: &str) -> Result<ClassObject, LoadError> {
        self.load_class(name)?;
        match self.classes.get(name).and_then(BundledClass::class_object) {
            Some(object) => Ok(object.clone()),
            // load_class only returns Ok once the entry holds its object.
            None => Err(LoadError::NotRegistered(name.into())),
        }
    }

    /// Idempotently load the class registered under `name`.
    ///
    /// Dependencies load depth-first before the class itself; classes that
    /// patch the freshly loaded class load right after it; observers are
    /// notified last. Loading an already-loaded class is a no-op. A
    /// dependency cycle fails fast with [`LoadError::DependencyCycle`].
    pub fn load_class(&mut self, name: &str) -> Result<(), LoadError> {
        let mut in_progress = Vec::new();
        self.load_inner(name, &mut in_progress)
    }

    fn load_inner(&mut self, name: &str, in_progress: &mut Vec<Box<str>>) -> Result<(), LoadError> {
        let Some(entry) = self.classes.get(name) else {
            return Err(LoadError::NotRegistered(name.into()));
        };
        if entry.is_loaded() {
            return Ok(());
        }
        if in_progress.iter().any(|pending| &**pending == name) {
            return Err(LoadError::DependencyCycle(name.into()));
        }

        let bundle = Arc::clone(entry.bundle());
        let dependencies: Vec<Box<str>> = entry.dependency_class_names().map(Into::into).collect();

        in_progress.push(name.into());
        for dependency in &dependencies {
            self.load_inner(dependency, in_progress)?;
        }

        let object = self
            .loader
            .load_class(&bundle, name)
            .map_err(|source| LoadError::Loader {
                class_name: name.into(),
                source,
            })?;

        // Entries are never removed, the re-borrow after recursion cannot miss.
        let Some(entry) = self.classes.get_mut(name) else {
            return Err(LoadError::NotRegistered(name.into()));
        };
        entry.mark_loaded(object);
        let modifiers: Vec<Box<str>> = entry.modifying_class_names().map(Into::into).collect();
        in_progress.pop();

        log::debug!("loaded bundled class `{name}` from bundle `{}`", bundle.identifier());

        for modifier in &modifiers {
            self.load_inner(modifier, in_progress)?;
        }

        self.observers.notify(name);
        Ok(())
    }

    /// Eagerly load every registered class whose description marks it for
    /// immediate loading, typically once at startup before deferred loading
    /// is available. Returns the number of immediate-load classes the pass
    /// picked up.
    pub fn process_immediate_load_classes(&mut self) -> Result<usize, LoadError> {
        let immediate: Vec<Box<str>> = self
            .classes
            .values()
            .filter(|entry| !entry.is_loaded() && entry.description().immediate_load)
            .map(|entry| entry.class_name().into())
            .collect();

        for name in &immediate {
            self.load_class(name)?;
        }
        if !immediate.is_empty() {
            log::debug!("immediate-load pass loaded {} bundled classes", immediate.len());
        }
        Ok(immediate.len())
    }

    /// Eagerly load every registered class, dependencies strictly before
    /// their dependents.
    pub fn load_all_classes(&mut self) -> Result<(), LoadError> {
        let names: Vec<Box<str>> = self.classes.keys().cloned().collect();
        for name in &names {
            self.load_class(name)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.classes.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// ClassRegistryArc

#[cfg(feature = "std")]
mod arc {
    use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

    use super::ClassRegistry;

    /// A reference-counted, lock-guarded [`ClassRegistry`] for use from more
    /// than one thread.
    #[derive(Clone)]
    pub struct ClassRegistryArc {
        /// The wrapped [`ClassRegistry`].
        pub internal: Arc<RwLock<ClassRegistry>>,
    }

    impl ClassRegistryArc {
        /// Wrap `registry` for shared use.
        pub fn new(registry: ClassRegistry) -> Self {
            Self {
                internal: Arc::new(RwLock::new(registry)),
            }
        }

        /// Takes a read lock on the underlying [`ClassRegistry`].
        pub fn read(&self) -> RwLockReadGuard<'_, ClassRegistry> {
            self.internal.read().unwrap_or_else(PoisonError::into_inner)
        }

        /// Takes a write lock on the underlying [`ClassRegistry`].
        pub fn write(&self) -> RwLockWriteGuard<'_, ClassRegistry> {
            self.internal
                .write()
                .unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl core::fmt::Debug for ClassRegistryArc {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            self.read().fmt(f)
        }
    }
}

#[cfg(feature = "std")]
pub use arc::ClassRegistryArc;

#[cfg(all(test, feature = "std"))]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::sync::Mutex;

    use folio_utils::default;

    use super::{ClassRegistry, ClassRegistryArc};
    use crate::bundle::Bundle;
    use crate::class::{BundledClass, ClassDescription};
    use crate::error::{LoadError, LoaderError, RegisterError};
    use crate::loader::ModuleLoader;
    use crate::manifest::BundleManifest;
    use crate::object::ClassObject;

    /// Loader that records the order classes were loaded in and hands out
    /// the class name as the class object.
    struct RecordingLoader {
        loads: Arc<Mutex<Vec<String>>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingLoader {
        fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let loads = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    loads: Arc::clone(&loads),
                    fail_on: None,
                },
                loads,
            )
        }
    }

    impl ModuleLoader for RecordingLoader {
        fn load_class(
            &mut self,
            _bundle: &Bundle,
            class_name: &str,
        ) -> Result<ClassObject, LoaderError> {
            if self.fail_on == Some(class_name) {
                return Err(LoaderError::new("module image is damaged"));
            }
            self.loads.lock().unwrap().push(class_name.to_string());
            Ok(ClassObject::new(class_name.to_string()))
        }
    }

    fn bundle() -> Arc<Bundle> {
        Arc::new(Bundle::new("com.example.plugins", "plugins/example"))
    }

    fn depends_on(names: &[&str]) -> ClassDescription {
        ClassDescription {
            dependencies: names.iter().map(|name| name.to_string()).collect(),
            ..default()
        }
    }

    fn registry() -> (ClassRegistry, Arc<Mutex<Vec<String>>>) {
        let (loader, loads) = RecordingLoader::new();
        (ClassRegistry::new(loader), loads)
    }

    #[test]
    fn duplicate_registration_rejected() {
        let (mut registry, _) = registry();
        registry
            .register_class("Outliner", bundle(), default())
            .unwrap();

        assert_eq!(
            registry
                .register_class("Outliner", bundle(), default())
                .unwrap_err(),
            RegisterError::Duplicate("Outliner".into()),
        );
    }

    #[test]
    fn unregistered_lookups_come_back_empty() {
        let (mut registry, _) = registry();

        assert!(registry.bundled_class("Missing").is_none());
        assert!(registry.bundle_for_class("Missing").is_none());
        assert!(!registry.contains("Missing"));
        assert_eq!(
            registry.class_named("Missing").unwrap_err(),
            LoadError::NotRegistered("Missing".into()),
        );
    }

    #[test]
    fn lookup_does_not_force_a_load() {
        let (mut registry, loads) = registry();
        registry
            .register_class("Outliner", bundle(), default())
            .unwrap();

        assert!(registry.bundle_for_class("Outliner").is_some());
        assert!(!registry.bundled_class("Outliner").unwrap().is_loaded());
        assert!(loads.lock().unwrap().is_empty());
    }

    #[test]
    fn loading_pulls_dependencies_first() {
        let (mut registry, loads) = registry();
        let bundle = bundle();
        registry
            .register_class("Canvas", Arc::clone(&bundle), default())
            .unwrap();
        registry
            .register_class("Inspector", Arc::clone(&bundle), depends_on(&["Canvas"]))
            .unwrap();

        registry.load_class("Inspector").unwrap();

        assert!(registry.bundled_class("Inspector").unwrap().is_loaded());
        assert!(registry.bundled_class("Canvas").unwrap().is_loaded());
        assert_eq!(*loads.lock().unwrap(), ["Canvas", "Inspector"]);
    }

    #[test]
    fn loading_twice_is_a_no_op() {
        let (mut registry, loads) = registry();
        registry
            .register_class("Canvas", bundle(), default())
            .unwrap();

        registry.load_class("Canvas").unwrap();
        registry.load_class("Canvas").unwrap();

        assert_eq!(loads.lock().unwrap().len(), 1);
    }

    #[test]
    fn class_named_resolves_and_loads() {
        let (mut registry, _) = registry();
        registry
            .register_class("Canvas", bundle(), default())
            .unwrap();

        let object = registry.class_named("Canvas").unwrap();
        assert_eq!(object.downcast_ref::<String>().unwrap(), "Canvas");
        assert!(registry.bundled_class("Canvas").unwrap().is_loaded());
    }

    #[test]
    fn immediate_load_pass_loads_exactly_the_marked_subset() {
        let (mut registry, _) = registry();
        let bundle = bundle();
        registry
            .register_class(
                "Startup",
                Arc::clone(&bundle),
                ClassDescription {
                    immediate_load: true,
                    ..default()
                },
            )
            .unwrap();
        registry
            .register_class("Deferred", Arc::clone(&bundle), default())
            .unwrap();

        assert_eq!(registry.process_immediate_load_classes().unwrap(), 1);

        assert!(registry.bundled_class("Startup").unwrap().is_loaded());
        assert!(!registry.bundled_class("Deferred").unwrap().is_loaded());
    }

    #[test]
    fn load_all_loads_everything_dependencies_first() {
        let (mut registry, loads) = registry();
        let bundle = bundle();
        registry
            .register_class("Exporter", Arc::clone(&bundle), depends_on(&["Codec"]))
            .unwrap();
        registry
            .register_class("Codec", Arc::clone(&bundle), default())
            .unwrap();
        registry
            .register_class("Importer", Arc::clone(&bundle), depends_on(&["Codec"]))
            .unwrap();

        registry.load_all_classes().unwrap();

        assert!(registry.iter().all(BundledClass::is_loaded));
        let loads = loads.lock().unwrap();
        assert_eq!(loads.len(), 3);
        let position = |name: &str| loads.iter().position(|loaded| loaded == name).unwrap();
        assert!(position("Codec") < position("Exporter"));
        assert!(position("Codec") < position("Importer"));
    }

    #[test]
    fn dependency_cycles_fail_fast() {
        let (mut registry, loads) = registry();
        let bundle = bundle();
        registry
            .register_class("Ouroboros", Arc::clone(&bundle), depends_on(&["Tail"]))
            .unwrap();
        registry
            .register_class("Tail", Arc::clone(&bundle), depends_on(&["Ouroboros"]))
            .unwrap();

        assert_eq!(
            registry.load_class("Ouroboros").unwrap_err(),
            LoadError::DependencyCycle("Ouroboros".into()),
        );
        assert!(loads.lock().unwrap().is_empty());
        assert!(!registry.bundled_class("Ouroboros").unwrap().is_loaded());
        assert!(!registry.bundled_class("Tail").unwrap().is_loaded());
    }

    #[test]
    fn modifiers_load_after_their_target() {
        let (mut registry, loads) = registry();
        let bundle = bundle();
        let notifications = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&notifications);
        registry.add_observer(move |class_name: &str| {
            sink.lock().unwrap().push(class_name.to_string());
        });

        registry
            .register_class("Document", Arc::clone(&bundle), default())
            .unwrap();
        registry
            .register_class(
                "DocumentExtensions",
                Arc::clone(&bundle),
                ClassDescription {
                    modifies: vec!["Document".to_string()],
                    ..default()
                },
            )
            .unwrap();

        registry.load_class("Document").unwrap();

        // The modifier's module loads right after its target.
        assert_eq!(*loads.lock().unwrap(), ["Document", "DocumentExtensions"]);
        // The target's did-load broadcast fires after its modifier's.
        assert_eq!(
            *notifications.lock().unwrap(),
            ["DocumentExtensions", "Document"]
        );
    }

    #[test]
    fn modifiers_registered_before_their_target_attach() {
        let (mut registry, _) = registry();
        let bundle = bundle();
        registry
            .register_class(
                "OutlineExtensions",
                Arc::clone(&bundle),
                ClassDescription {
                    modifies: vec!["Outliner".to_string()],
                    ..default()
                },
            )
            .unwrap();
        registry
            .register_class("Outliner", Arc::clone(&bundle), default())
            .unwrap();

        assert_eq!(
            registry
                .bundled_class("Outliner")
                .unwrap()
                .modifying_class_names()
                .collect::<Vec<_>>(),
            ["OutlineExtensions"]
        );

        registry.load_class("Outliner").unwrap();
        assert!(registry.bundled_class("OutlineExtensions").unwrap().is_loaded());
    }

    #[test]
    fn loader_failure_propagates_and_leaves_the_entry_unloaded() {
        let (mut loader, loads) = RecordingLoader::new();
        loader.fail_on = Some("Broken");
        let mut registry = ClassRegistry::new(loader);
        registry
            .register_class("Broken", bundle(), default())
            .unwrap();

        assert!(matches!(
            registry.load_class("Broken").unwrap_err(),
            LoadError::Loader { .. }
        ));
        assert!(!registry.bundled_class("Broken").unwrap().is_loaded());
        assert!(loads.lock().unwrap().is_empty());
    }

    #[test]
    fn manifest_registration_registers_each_class() {
        let manifest: BundleManifest = serde_json::from_str(
            r#"{
                "classes": [
                    { "name": "Exporter", "description": { "immediate_load": true } },
                    { "name": "Codec" }
                ]
            }"#,
        )
        .unwrap();

        let (mut registry, _) = registry();
        registry.register_manifest(&bundle(), &manifest).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.bundled_class("Exporter").unwrap().description().immediate_load);
        assert!(!registry.bundled_class("Codec").unwrap().description().immediate_load);
    }

    #[test]
    fn manifest_registration_rejects_internal_duplicates() {
        let manifest: BundleManifest = serde_json::from_str(
            r#"{
                "classes": [
                    { "name": "Exporter" },
                    { "name": "Exporter" }
                ]
            }"#,
        )
        .unwrap();

        let (mut registry, _) = registry();
        assert!(matches!(
            registry.register_manifest(&bundle(), &manifest).unwrap_err(),
            RegisterError::DuplicateInManifest { .. }
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn shared_registry_round_trip() {
        let (registry, _) = registry();
        let shared = ClassRegistryArc::new(registry);

        shared
            .write()
            .register_class("Canvas", bundle(), default())
            .unwrap();

        assert!(shared.read().contains("Canvas"));
        assert_eq!(shared.read().len(), 1);
    }
}
