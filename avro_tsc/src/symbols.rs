//! Name lookup for type references.

use crate::element::RootElement;
use std::collections::HashMap;

/// Every root element of one generation run, indexed by qualified and short
/// name.
#[derive(Debug, Default)]
pub struct SymbolTable<'a> {
    qualified: HashMap<String, &'a RootElement>,
    /// Short name to every element carrying it, in discovery order.
    short: HashMap<&'a str, Vec<&'a RootElement>>,
}

impl<'a> SymbolTable<'a> {
    #[must_use]
    pub fn new(elements: &'a [RootElement]) -> Self {
        let mut table: Self = Self::default();
        for element in elements {
            table
                .qualified
                .entry(element.qualified_name())
                .or_insert(element);
            table
                .short
                .entry(element.name.as_str())
                .or_default()
                .push(element);
        }
        table
    }

    /// Resolve `reference` as written inside `namespace`.
    ///
    /// Tries the exact qualified name, then the short name in `namespace`,
    /// then the first element discovered with that short name.
    #[must_use]
    pub fn resolve(&self, reference: &str, namespace: &str) -> Option<&'a RootElement> {
        if let Some(element) = self.qualified.get(reference) {
            return Some(*element);
        }
        let candidates: &Vec<&'a RootElement> = self.short.get(reference)?;
        candidates
            .iter()
            .find(|e| e.namespace == namespace)
            .or_else(|| candidates.first())
            .copied()
    }
}
