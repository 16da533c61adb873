//! Provide a [`HashSet`] pre-configured with [`FixedHashState`].

use crate::hash::FixedHashState;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;
