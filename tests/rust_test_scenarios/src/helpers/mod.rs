pub mod resolver_instance;
pub mod resolver_parameters;

/// Substring of every line reporting an extra binding.
pub(crate) const MULTIPLE_BINDINGS_STRING: &str = "Found binding in";

/// Helper function to convert `Debug`-typed value to `String`.
pub(crate) fn to_str<T: core::fmt::Debug>(value: &T) -> String {
    format!("{value:?}")
}
