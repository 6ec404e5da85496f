//! Checks run over the whole root element table before anything is rendered.
//!
//! Collects every issue instead of stopping at the first, so one run reports
//! all elements that cannot be generated.

use crate::element::{ComposedType, RootElement, TypeKind};
use crate::error::{GenerationError, GenerationIssue, GenerationIssueKind};
use crate::names::{is_reserved_word, sanitize_name};
use crate::namespace::{self, NamespaceMap};
use crate::options::Options;
use crate::symbols::SymbolTable;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Validate `elements` against the symbol table built from them.
///
/// Every root must have exactly one type alternative and a name that is not
/// a reserved word. When `deny_dangling_references` is set, every type
/// reference must resolve. Namespace blocks must not use reserved words, and
/// no two namespaces may share an output file.
///
/// # Errors
///
/// Returns a `GenerationError` holding every issue found.
pub fn validate_elements(
    elements: &[RootElement],
    symbols: &SymbolTable<'_>,
    options: &Options,
) -> Result<(), GenerationError> {
    let mut issues: Vec<GenerationIssue> = Vec::new();

    for element in elements {
        let name: String = sanitize_name(&element.name);
        if is_reserved_word(&name) {
            push_issue(
                &mut issues,
                element,
                GenerationIssueKind::ReservedWord { word: name },
            );
        }

        if element.types.len() != 1 {
            push_issue(
                &mut issues,
                element,
                GenerationIssueKind::UnsupportedRootUnion {
                    alternatives: element.types.len(),
                },
            );
        }

        if !options.deny_dangling_references {
            continue;
        }
        for reference in dangling(&element.types, symbols, &element.namespace) {
            push_issue(
                &mut issues,
                element,
                GenerationIssueKind::DanglingTypeReference {
                    field: None,
                    reference,
                },
            );
        }
        for field in element.fields() {
            for reference in dangling(&field.types, symbols, &element.namespace) {
                push_issue(
                    &mut issues,
                    element,
                    GenerationIssueKind::DanglingTypeReference {
                        field: Some(field.name.clone()),
                        reference,
                    },
                );
            }
        }
    }

    validate_namespaces(&namespace::group(elements), options, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(GenerationError { issues })
    }
}

/// Issues are reported against the first element of the offending namespace.
fn validate_namespaces(
    namespaces: &NamespaceMap<'_>,
    options: &Options,
    issues: &mut Vec<GenerationIssue>,
) {
    let mut files: HashMap<String, &str> = HashMap::new();
    for ns in namespaces.values() {
        let Some(first) = ns.elements.first() else {
            continue;
        };
        if options.namespaces {
            for segment in ns.name.split('.').filter(|s| is_reserved_word(s)) {
                push_issue(
                    issues,
                    first,
                    GenerationIssueKind::ReservedWord {
                        word: segment.to_string(),
                    },
                );
            }
        }
        if options.single_file {
            continue;
        }
        match files.entry(namespace::file_name(ns.name)) {
            Entry::Occupied(owner) => push_issue(
                issues,
                first,
                GenerationIssueKind::OutputFileCollision {
                    file: owner.key().clone(),
                    namespace: (*owner.get()).to_string(),
                },
            ),
            Entry::Vacant(slot) => {
                slot.insert(ns.name);
            }
        }
    }
}

fn push_issue(issues: &mut Vec<GenerationIssue>, element: &RootElement, kind: GenerationIssueKind) {
    issues.push(GenerationIssue {
        element: element.qualified_name(),
        kind,
    });
}

/// Unresolvable reference names in `types`, container subtypes included.
fn dangling(types: &[ComposedType], symbols: &SymbolTable<'_>, namespace: &str) -> Vec<String> {
    let mut unresolved: Vec<String> = Vec::new();
    for composed in types {
        if let TypeKind::Reference(name) = &composed.kind
            && symbols.resolve(name, namespace).is_none()
        {
            unresolved.push(name.clone());
        }
        unresolved.extend(dangling(&composed.subtypes, symbols, namespace));
    }
    unresolved
}
