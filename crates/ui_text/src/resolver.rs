//! Lookup capability used to turn resource identifiers into display strings.

/// Maps a resource id plus positional arguments to a concrete string.
///
/// Implementations are expected to be pure lookups: the same `(id, args)`
/// pair always yields the same string. What happens for an unknown id is
/// up to the implementation (fallback text, the id itself, etc.); the
/// resolution layer never fails.
pub trait TextResolver {
    fn lookup(&self, id: &str, args: &[String]) -> String;
}
