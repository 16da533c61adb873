//! Provide a [`HashMap`] pre-configured with [`FixedHashState`].

use crate::hash::FixedHashState;

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// Construct one through [`Default`]:
///
/// ```
/// use folio_utils::hash::HashMap;
///
/// let mut table: HashMap<&str, u32> = HashMap::default();
/// table.insert("three", 3);
/// assert_eq!(table.get("three"), Some(&3));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;
