//! Resolved type table produced by the parser and consumed by the generator.

/// Kind of one type alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Null,
    Boolean,
    Number,
    String,
    Record,
    Enum,
    /// Container; its element types live in [`ComposedType::subtypes`].
    Array,
    /// Opaque name of another root element, resolved by name at render time.
    Reference(String),
}

impl TypeKind {
    /// TypeScript spelling of the kind. References return the name as written.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Record => "record",
            Self::Enum => "enum",
            Self::Array => "Array",
            Self::Reference(name) => name,
        }
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array)
    }
}

/// One alternative of a (possibly singleton) union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedType {
    pub kind: TypeKind,
    /// Element types of a container, in declaration order. Empty otherwise.
    pub subtypes: Vec<ComposedType>,
}

impl ComposedType {
    #[must_use]
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            subtypes: Vec::new(),
        }
    }

    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Reference(name.into()))
    }

    /// An `Array` whose element is the union of `items`.
    #[must_use]
    pub fn array_of(items: Vec<ComposedType>) -> Self {
        Self {
            kind: TypeKind::Array,
            subtypes: items,
        }
    }
}

/// A field of a record, or any resolved member that was not hoisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldElement {
    pub name: String,
    /// Never empty. More than one entry means the source type was a union.
    pub types: Vec<ComposedType>,
    pub symbols: Option<Vec<String>>,
    pub doc: Option<String>,
}

impl FieldElement {
    #[must_use]
    pub fn new(name: impl Into<String>, types: Vec<ComposedType>) -> Self {
        Self {
            name: name.into(),
            types,
            symbols: None,
            doc: None,
        }
    }
}

/// A named type promoted to its own top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct RootElement {
    pub name: String,
    pub namespace: String,
    pub types: Vec<ComposedType>,
    /// Enum symbols in declaration order.
    pub symbols: Option<Vec<String>>,
    pub doc: Option<String>,
    /// The source schema node, verbatim.
    pub schema: serde_json::Value,
    /// Record fields in declaration order.
    pub children: Option<Vec<FieldElement>>,
}

impl RootElement {
    /// Root element with a single type alternative and no schema, symbols or children.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, kind: ComposedType) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            types: vec![kind],
            symbols: None,
            doc: None,
            schema: serde_json::Value::Null,
            children: None,
        }
    }

    /// `namespace.Name`, or just `Name` in the default namespace.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Every field declared by a record root, empty for other kinds.
    #[must_use]
    pub fn fields(&self) -> &[FieldElement] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_joins_namespace_and_name() {
        let element: RootElement =
            RootElement::new("com.acme", "Order", ComposedType::new(TypeKind::Record));
        assert_eq!("com.acme.Order", element.qualified_name());
    }

    #[test]
    fn qualified_name_in_default_namespace_is_bare() {
        let element: RootElement = RootElement::new("", "Order", ComposedType::new(TypeKind::Record));
        assert_eq!("Order", element.qualified_name());
    }

    #[test]
    fn array_of_keeps_item_order() {
        let array: ComposedType = ComposedType::array_of(vec![
            ComposedType::new(TypeKind::String),
            ComposedType::new(TypeKind::Null),
        ]);
        assert!(array.kind.is_container());
        assert_eq!(
            vec![TypeKind::String, TypeKind::Null],
            array
                .subtypes
                .iter()
                .map(|t| t.kind.clone())
                .collect::<Vec<TypeKind>>()
        );
    }
}
