//! Avro primitive names to TypeScript type kinds.

use crate::element::TypeKind;

/// Map an Avro type name to its kind.
///
/// Total: names outside the table become [`TypeKind::Reference`], which is how
/// named types declared elsewhere flow through.
#[must_use]
pub fn map_primitive(name: &str) -> TypeKind {
    match name {
        "null" => TypeKind::Null,
        "boolean" => TypeKind::Boolean,
        "int" | "long" | "short" | "float" | "double" | "fixed" => TypeKind::Number,
        "string" | "bytes" => TypeKind::String,
        "record" => TypeKind::Record,
        "enum" => TypeKind::Enum,
        "array" => TypeKind::Array,
        other => TypeKind::Reference(other.to_string()),
    }
}

/// True when `name` is in the table (i.e. not a reference).
#[must_use]
pub fn is_known(name: &str) -> bool {
    !matches!(map_primitive(name), TypeKind::Reference(_))
}
