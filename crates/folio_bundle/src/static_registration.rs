use crate::class::ClassDescription;

// -----------------------------------------------------------------------------
// StaticClassRegistration

/// A bundled-class registration submitted at link time.
///
/// Records are collected by the [`inventory`] crate and drained by
/// [`ClassRegistry::register_static_classes`](crate::ClassRegistry::register_static_classes).
/// Use [`submit_bundled_class!`](crate::submit_bundled_class) rather than
/// constructing one by hand.
pub struct StaticClassRegistration {
    /// The unique class name to register.
    pub class_name: &'static str,

    /// Identifier of the contributing bundle.
    pub bundle_identifier: &'static str,

    /// On-disk location of the contributing bundle.
    pub bundle_path: &'static str,

    /// Produces the registration metadata for the class.
    pub description: fn() -> ClassDescription,
}

inventory::collect!(StaticClassRegistration);

/// Submit a bundled class for link-time registration.
///
/// ```
/// use folio_bundle::ClassDescription;
///
/// folio_bundle::submit_bundled_class!(
///     "Exporter",
///     "com.example.exporter",
///     "plugins/exporter",
///     ClassDescription::default,
/// );
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! submit_bundled_class {
    ($class_name:expr, $bundle_identifier:expr, $bundle_path:expr, $description:expr $(,)?) => {
        $crate::inventory::submit! {
            $crate::StaticClassRegistration {
                class_name: $class_name,
                bundle_identifier: $bundle_identifier,
                bundle_path: $bundle_path,
                description: $description,
            }
        }
    };
}
