//! Locations inside a schema document, for diagnostics.
//!
//! Rendered as a JSON Pointer fragment (RFC 6901): `#/fields/2/type/items`.
//! `~` is escaped as `~0` and `/` as `~1`.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaPath {
    pointer: String,
}

impl SchemaPath {
    /// The document root, displayed as `#`.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// This path extended by an object key.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut pointer: String = self.pointer.clone();
        pointer.push('/');
        for c in key.chars() {
            match c {
                '~' => pointer.push_str("~0"),
                '/' => pointer.push_str("~1"),
                other => pointer.push(other),
            }
        }
        Self { pointer }
    }

    /// This path extended by an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self {
            pointer: format!("{}/{index}", self.pointer),
        }
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.pointer)
    }
}
