//! Grouping of root elements by namespace.

use crate::element::RootElement;
use indexmap::IndexMap;

/// Root elements sharing one namespace, in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace<'a> {
    /// Dotted namespace name; empty for the default namespace.
    pub name: &'a str,
    pub elements: Vec<&'a RootElement>,
}

/// Namespaces keyed by name, in first-seen order.
pub type NamespaceMap<'a> = IndexMap<&'a str, Namespace<'a>>;

/// Bucket `elements` by namespace. Total; keeps discovery order both across
/// and within buckets.
#[must_use]
pub fn group(elements: &[RootElement]) -> NamespaceMap<'_> {
    let mut namespaces: NamespaceMap<'_> = IndexMap::new();
    for element in elements {
        let name: &str = element.namespace.as_str();
        namespaces
            .entry(name)
            .or_insert_with(|| Namespace {
                name,
                elements: Vec::new(),
            })
            .elements
            .push(element);
    }
    namespaces
}

/// Output path of a namespace: dots become directories, `.ts` is appended and
/// the default namespace is `default.ts`.
#[must_use]
pub fn file_name(namespace: &str) -> String {
    if namespace.is_empty() {
        "default.ts".to_string()
    } else {
        format!("{}.ts", namespace.replace('.', "/"))
    }
}
