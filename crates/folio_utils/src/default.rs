/// An ergonomic abbreviation for [`Default::default()`] to make initializing
/// structs easier.
///
/// # Example
///
/// ```
/// use folio_utils::default;
///
/// #[derive(Default)]
/// struct Config {
///   eager: bool,
///   retries: usize,
/// }
///
/// let config = Config {
///   eager: true,
///   ..default()
/// };
/// # assert_eq!(config.retries, 0);
/// ```
#[inline(always)]
pub fn default<T: Default>() -> T {
    T::default()
}
