//! Avro schema parser.
//!
//! Walks a schema tree depth-first and hoists every named type into one flat,
//! ordered table of [`RootElement`]s. A type is registered only after all of
//! its nested types, so inner declarations always precede the declarations
//! that reference them.

use crate::element::{ComposedType, FieldElement, RootElement, TypeKind};
use crate::error::AvroTscError;
use crate::names::{is_avro_namespace, sanitize_name};
use crate::options::Options;
use crate::schema::{NodeKind, SchemaNode, json_kind};
use crate::schema_path::SchemaPath;
use crate::source;
use crate::type_map::map_primitive;
use rayon::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of processing one schema node.
struct Resolution {
    /// Root elements declared at or below the node, in registration order.
    roots: Vec<RootElement>,
    field: ResolvedField,
}

/// The node seen as a field of its parent.
struct ResolvedField {
    name: Option<String>,
    types: Vec<ComposedType>,
    symbols: Option<Vec<String>>,
    doc: Option<String>,
}

/// Outcome of resolving a type expression (`type`, a union alternative, `items`).
#[derive(Default)]
struct TypeResolution {
    types: Vec<ComposedType>,
    roots: Vec<RootElement>,
}

impl TypeResolution {
    fn single(kind: TypeKind) -> Self {
        Self {
            types: vec![ComposedType::new(kind)],
            roots: Vec::new(),
        }
    }
}

/// Parses Avro schemas into root elements.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
}

impl Parser {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Parse schema text.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSchema` if the text is not JSON or the schema is
    /// structurally invalid.
    pub fn parse_str(&self, schema_json: &str) -> Result<Vec<RootElement>, AvroTscError> {
        let schema: Value = serde_json::from_str(schema_json)?;
        self.parse(&schema)
    }

    /// Parse an already decoded schema: one schema object, or an array of
    /// them parsed in order.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSchema` on the first structurally invalid node.
    pub fn parse(&self, schema: &Value) -> Result<Vec<RootElement>, AvroTscError> {
        let path: SchemaPath = SchemaPath::root();
        let namespace: &str = &self.options.default_namespace;
        if !is_avro_namespace(namespace) {
            return Err(AvroTscError::malformed(
                &path,
                format!("default namespace '{namespace}' must be dot-separated Avro names"),
            ));
        }
        let roots: Vec<RootElement> = match schema {
            Value::Object(_) => self.process_node(schema, namespace, &path, true)?.roots,
            Value::Array(documents) => {
                let mut roots: Vec<RootElement> = Vec::new();
                for (index, document) in documents.iter().enumerate() {
                    roots.extend(
                        self.process_node(document, namespace, &path.index(index), true)?
                            .roots,
                    );
                }
                roots
            }
            other => {
                return Err(AvroTscError::malformed(
                    &path,
                    format!(
                        "top-level schema must be an object or an array of objects, found {}",
                        json_kind(other)
                    ),
                ));
            }
        };
        debug!(count = roots.len(), "found root types");
        Ok(roots)
    }

    /// Parse every file under `directory` whose path ends with `extension`.
    ///
    /// Files are parsed in parallel; results are concatenated in file name
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the directory cannot be listed, or
    /// `InFile` wrapping the first failure of the first failing file.
    pub fn load(
        &self,
        directory: &Path,
        extension: &str,
    ) -> Result<Vec<RootElement>, AvroTscError> {
        info!(directory = %directory.display(), extension, "loading file list");
        let files: Vec<PathBuf> = source::collect_files(directory, extension)?;
        let per_file: Vec<Vec<RootElement>> = files
            .par_iter()
            .map(|path| self.load_file(path))
            .collect::<Result<Vec<Vec<RootElement>>, AvroTscError>>()?;
        let elements: Vec<RootElement> = per_file.into_iter().flatten().collect();
        info!(
            files = files.len(),
            elements = elements.len(),
            "loaded schema files"
        );
        Ok(elements)
    }

    fn load_file(&self, path: &Path) -> Result<Vec<RootElement>, AvroTscError> {
        info!(file = %path.display(), "loading file");
        let schema_json: String = std::fs::read_to_string(path)
            .map_err(|e| AvroTscError::in_file(path, AvroTscError::Io(e)))?;
        self.parse_str(&schema_json)
            .map_err(|e| AvroTscError::in_file(path, e))
    }

    /// Process one object node.
    ///
    /// `inherited_namespace` is the effective namespace of the parent. The
    /// node is registered as a root element when `is_root` is set and it has
    /// a name.
    fn process_node(
        &self,
        value: &Value,
        inherited_namespace: &str,
        path: &SchemaPath,
        is_root: bool,
    ) -> Result<Resolution, AvroTscError> {
        let node: SchemaNode = SchemaNode::from_value(value, path)?;
        if let Some(declared) = node.namespace.as_deref()
            && !is_avro_namespace(declared)
        {
            return Err(AvroTscError::malformed(
                path.key("namespace"),
                format!("namespace '{declared}' must be dot-separated Avro names"),
            ));
        }
        let namespace: &str = node.namespace.as_deref().unwrap_or(inherited_namespace);
        let kind: NodeKind<'_> = node.classify(path)?;

        let TypeResolution { types, mut roots } = match &kind {
            NodeKind::Union(alternatives) => {
                self.resolve_union(alternatives, namespace, &path.key("type"))?
            }
            NodeKind::Complex(nested) => self.resolve_type(nested, namespace, &path.key("type"))?,
            NodeKind::Array(items) => {
                let items: TypeResolution =
                    self.resolve_type(items, namespace, &path.key("items"))?;
                TypeResolution {
                    types: vec![ComposedType::array_of(items.types)],
                    roots: items.roots,
                }
            }
            NodeKind::Record(_) => TypeResolution::single(TypeKind::Record),
            NodeKind::Enum(_) => TypeResolution::single(TypeKind::Enum),
            NodeKind::Scalar(scalar) => TypeResolution::single(scalar.clone()),
            NodeKind::NamedReference(name) => {
                TypeResolution::single(TypeKind::Reference((*name).to_string()))
            }
        };

        let symbols: Option<Vec<String>> = match &kind {
            NodeKind::Enum(symbols) => Some(symbols.to_vec()),
            _ => None,
        };

        if is_root && let Some(name) = node.name.as_deref().filter(|n| !n.is_empty()) {
            if sanitize_name(name).is_empty() {
                return Err(AvroTscError::malformed(
                    path.key("name"),
                    format!("name '{name}' has no characters usable in an identifier"),
                ));
            }
            let children: Option<Vec<FieldElement>> = match &kind {
                NodeKind::Record(fields) => {
                    let (children, field_roots) =
                        self.resolve_fields(fields, namespace, &path.key("fields"))?;
                    roots.extend(field_roots);
                    Some(children)
                }
                _ => None,
            };
            debug!(%path, namespace, name, "registered root element");
            roots.push(RootElement {
                name: name.to_string(),
                namespace: namespace.to_string(),
                types: types.clone(),
                symbols: symbols.clone(),
                doc: node.doc.clone(),
                schema: value.clone(),
                children,
            });
        }

        Ok(Resolution {
            roots,
            field: ResolvedField {
                name: node.name,
                types,
                symbols,
                doc: node.doc,
            },
        })
    }

    /// Resolve the fields of a record. Fields are never roots themselves;
    /// named types nested in them are.
    fn resolve_fields(
        &self,
        fields: &[Value],
        namespace: &str,
        path: &SchemaPath,
    ) -> Result<(Vec<FieldElement>, Vec<RootElement>), AvroTscError> {
        let mut children: Vec<FieldElement> = Vec::with_capacity(fields.len());
        let mut roots: Vec<RootElement> = Vec::new();
        for (index, field) in fields.iter().enumerate() {
            let field_path: SchemaPath = path.index(index);
            let Resolution {
                roots: field_roots,
                field: resolved,
            } = self.process_node(field, namespace, &field_path, false)?;
            roots.extend(field_roots);
            let name: String = resolved
                .name
                .filter(|n| !n.is_empty())
                .ok_or_else(|| {
                    AvroTscError::malformed(&field_path, "record field is missing required 'name'")
                })?;
            children.push(FieldElement {
                name,
                types: resolved.types,
                symbols: resolved.symbols,
                doc: resolved.doc,
            });
        }
        Ok((children, roots))
    }

    /// Resolve a type expression.
    ///
    /// Strings go through the type map, arrays are unions, and objects are
    /// nested schemas: hoisted and referenced by name when named, inlined
    /// otherwise.
    fn resolve_type(
        &self,
        value: &Value,
        namespace: &str,
        path: &SchemaPath,
    ) -> Result<TypeResolution, AvroTscError> {
        match value {
            Value::String(type_name) => match map_primitive(type_name) {
                TypeKind::Record | TypeKind::Enum | TypeKind::Array => {
                    Err(AvroTscError::malformed(
                        path,
                        format!("'{type_name}' must be declared as a schema object"),
                    ))
                }
                kind => Ok(TypeResolution::single(kind)),
            },
            Value::Array(alternatives) => self.resolve_union(alternatives, namespace, path),
            Value::Object(_) => {
                let Resolution { roots, field } = self.process_node(value, namespace, path, true)?;
                let types: Vec<ComposedType> = match field.name {
                    Some(name) if !name.is_empty() => vec![ComposedType::reference(name)],
                    _ => field.types,
                };
                Ok(TypeResolution { types, roots })
            }
            other => Err(AvroTscError::malformed(
                path,
                format!(
                    "expected a type name, a union or a schema object, found {}",
                    json_kind(other)
                ),
            )),
        }
    }

    /// Resolve each alternative in declaration order and concatenate them.
    /// Nested unions flatten into the outer one.
    fn resolve_union(
        &self,
        alternatives: &[Value],
        namespace: &str,
        path: &SchemaPath,
    ) -> Result<TypeResolution, AvroTscError> {
        if alternatives.is_empty() {
            return Err(AvroTscError::malformed(
                path,
                "union must declare at least one alternative",
            ));
        }
        let mut resolution: TypeResolution = TypeResolution::default();
        for (index, alternative) in alternatives.iter().enumerate() {
            let resolved: TypeResolution =
                self.resolve_type(alternative, namespace, &path.index(index))?;
            resolution.types.extend(resolved.types);
            resolution.roots.extend(resolved.roots);
        }
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(schema: &Value) -> Vec<RootElement> {
        Parser::default().parse(schema).expect("parse should succeed")
    }

    fn find<'a>(elements: &'a [RootElement], name: &str) -> &'a RootElement {
        elements
            .iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("root element {name} should exist"))
    }

    fn single(kind: TypeKind) -> Vec<ComposedType> {
        vec![ComposedType::new(kind)]
    }

    fn names(elements: &[RootElement]) -> Vec<&str> {
        elements.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn parse_simple_record() {
        let schema: Value = json!({
            "type": "record",
            "namespace": "nspace",
            "name": "TestType",
            "fields": [
                { "name": "PropTestString1", "type": "string" },
                { "name": "PropTestNumber1", "type": "int" },
                { "name": "PropTestNumber2", "type": "short" },
                { "name": "PropTestNumber3", "type": "long" },
                { "name": "PropTestNumber4", "type": "float" },
                { "name": "PropTestBoolean", "type": "boolean" },
                {
                    "name": "PropTestEnum",
                    "type": {
                        "name": "TestEnum",
                        "type": "enum",
                        "symbols": ["SYMBOL_1", "SYMBOL_2", "SYMBOL_3"]
                    }
                },
                { "name": "PropTestBooleanOrNull", "type": ["null", "boolean"] }
            ]
        });

        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(2, elements.len());

        let record: &RootElement = find(&elements, "TestType");
        assert_eq!("nspace", record.namespace);
        assert_eq!(single(TypeKind::Record), record.types);
        let children: &[FieldElement] = record.fields();
        assert_eq!(8, children.len());
        assert_eq!(single(TypeKind::String), children[0].types);
        for child in &children[1..5] {
            assert_eq!(single(TypeKind::Number), child.types, "{}", child.name);
        }
        assert_eq!(single(TypeKind::Boolean), children[5].types);
        assert_eq!(vec![ComposedType::reference("TestEnum")], children[6].types);
        assert_eq!(
            vec![
                ComposedType::new(TypeKind::Null),
                ComposedType::new(TypeKind::Boolean)
            ],
            children[7].types
        );

        let enumeration: &RootElement = find(&elements, "TestEnum");
        assert_eq!("nspace", enumeration.namespace);
        assert_eq!(single(TypeKind::Enum), enumeration.types);
        assert_eq!(3, enumeration.symbols.as_ref().map_or(0, Vec::len));
        assert!(enumeration.children.is_none());
    }

    #[test]
    fn parse_complex_record_hoists_in_depth_first_order() {
        let schema: Value = json!({
            "type": "record",
            "namespace": "nspace",
            "name": "TestType",
            "fields": [
                { "name": "PropTestString1", "type": "string" },
                {
                    "name": "PropTestSubType1",
                    "type": {
                        "name": "TestSubType1",
                        "type": "record",
                        "fields": [
                            { "name": "PropTestString2", "type": "string" },
                            {
                                "name": "PropTestEnum",
                                "namespace": "nspace.subspace1",
                                "type": {
                                    "name": "TestEnum",
                                    "namespace": "nspace.subspace1",
                                    "type": "enum",
                                    "symbols": ["SYMBOL_1", "SYMBOL_2", "SYMBOL_3"]
                                }
                            }
                        ]
                    }
                },
                {
                    "name": "PropTestSubType2",
                    "type": {
                        "name": "TestSubType2Array",
                        "type": "array",
                        "items": {
                            "name": "TestSubType2",
                            "namespace": "nspace.subspace2",
                            "type": "record",
                            "fields": [
                                {
                                    "name": "PropTestSubType3",
                                    "type": {
                                        "name": "TestSubType3",
                                        "type": "record",
                                        "fields": [{ "name": "TestNumber", "type": "long" }]
                                    }
                                }
                            ]
                        }
                    }
                }
            ]
        });

        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(
            vec![
                "TestEnum",
                "TestSubType1",
                "TestSubType3",
                "TestSubType2",
                "TestSubType2Array",
                "TestType"
            ],
            names(&elements)
        );

        assert_eq!("nspace", find(&elements, "TestSubType1").namespace);
        assert_eq!("nspace.subspace2", find(&elements, "TestSubType3").namespace);
        assert_eq!("nspace.subspace2", find(&elements, "TestSubType2").namespace);
        assert_eq!("nspace", find(&elements, "TestType").namespace);
        assert_eq!("nspace.subspace1", find(&elements, "TestEnum").namespace);

        let array: &RootElement = find(&elements, "TestSubType2Array");
        assert_eq!("nspace", array.namespace);
        assert_eq!(
            vec![ComposedType::array_of(vec![ComposedType::reference(
                "TestSubType2"
            )])],
            array.types
        );
    }

    #[test]
    fn nested_arrays_yield_one_root_per_level() {
        let schema: Value = json!({
            "type": "record",
            "namespace": "nspace",
            "name": "TestType",
            "fields": [
                {
                    "name": "PropTestArray",
                    "type": {
                        "name": "TestArray",
                        "type": "array",
                        "items": {
                            "name": "TestSubArray",
                            "namespace": "nspace.subspace",
                            "type": "array",
                            "items": {
                                "name": "TestSubType",
                                "type": "record",
                                "fields": [{ "name": "PropTestNumber", "type": "long" }]
                            }
                        }
                    }
                }
            ]
        });

        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(
            vec!["TestSubType", "TestSubArray", "TestArray", "TestType"],
            names(&elements)
        );

        let outer: &RootElement = find(&elements, "TestArray");
        assert_eq!("nspace", outer.namespace);
        assert_eq!(
            vec![ComposedType::array_of(vec![ComposedType::reference(
                "TestSubArray"
            )])],
            outer.types
        );

        let inner: &RootElement = find(&elements, "TestSubArray");
        assert_eq!("nspace.subspace", inner.namespace);
        assert_eq!(
            vec![ComposedType::array_of(vec![ComposedType::reference(
                "TestSubType"
            )])],
            inner.types
        );

        assert_eq!("nspace.subspace", find(&elements, "TestSubType").namespace);
    }

    #[test]
    fn three_array_levels_around_a_record_give_four_roots() {
        let schema: Value = json!({
            "name": "L1", "type": "array", "items": {
                "name": "L2", "type": "array", "items": {
                    "name": "L3", "type": "array", "items": {
                        "name": "Leaf", "type": "record", "fields": []
                    }
                }
            }
        });
        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(vec!["Leaf", "L3", "L2", "L1"], names(&elements));
    }

    #[test]
    fn union_order_is_preserved() {
        for alternatives in [json!(["null", "string"]), json!(["string", "null"])] {
            let schema: Value = json!({
                "type": "record",
                "name": "R",
                "fields": [{ "name": "u", "type": alternatives }]
            });
            let elements: Vec<RootElement> = parse(&schema);
            let expected: Vec<TypeKind> = alternatives
                .as_array()
                .expect("array")
                .iter()
                .map(|a| map_primitive(a.as_str().expect("string")))
                .collect();
            let actual: Vec<TypeKind> = elements[0].fields()[0]
                .types
                .iter()
                .map(|t| t.kind.clone())
                .collect();
            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn named_union_alternative_is_hoisted_and_referenced() {
        let schema: Value = json!({
            "type": "record",
            "name": "Holder",
            "fields": [{
                "name": "payload",
                "type": [
                    "null",
                    { "type": "record", "name": "Payload", "fields": [{ "name": "id", "type": "long" }] },
                    { "type": "array", "items": "string" }
                ]
            }]
        });
        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(vec!["Payload", "Holder"], names(&elements));
        assert_eq!(
            vec![
                ComposedType::new(TypeKind::Null),
                ComposedType::reference("Payload"),
                ComposedType::array_of(vec![ComposedType::new(TypeKind::String)]),
            ],
            find(&elements, "Holder").fields()[0].types
        );
    }

    #[test]
    fn nested_unions_flatten() {
        let schema: Value = json!({ "name": "U", "type": ["null", ["int", "string"]] });
        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(3, elements[0].types.len());
    }

    #[test]
    fn namespace_is_inherited_until_overridden() {
        let schema: Value = json!({
            "type": "record",
            "namespace": "outer",
            "name": "A",
            "fields": [
                { "name": "b", "type": { "type": "record", "name": "B", "fields": [] } },
                {
                    "name": "c",
                    "type": {
                        "type": "record",
                        "name": "C",
                        "namespace": "other",
                        "fields": [
                            { "name": "d", "type": { "type": "enum", "name": "D", "symbols": ["X"] } }
                        ]
                    }
                }
            ]
        });
        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!("outer", find(&elements, "A").namespace);
        assert_eq!("outer", find(&elements, "B").namespace);
        assert_eq!("other", find(&elements, "C").namespace);
        assert_eq!("other", find(&elements, "D").namespace);
    }

    #[test]
    fn default_namespace_comes_from_options() {
        let parser: Parser = Parser::new(Options {
            default_namespace: "fallback".to_string(),
            ..Options::default()
        });
        let elements: Vec<RootElement> = parser
            .parse(&json!({ "type": "enum", "name": "E", "symbols": ["A"] }))
            .expect("parse");
        assert_eq!("fallback", elements[0].namespace);
    }

    #[test]
    fn root_keeps_verbatim_schema() {
        let schema: Value = json!({
            "type": "record",
            "name": "T",
            "doc": "A thing.",
            "fields": [{ "name": "a", "type": "string", "default": "x" }]
        });
        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(schema, elements[0].schema);
        assert_eq!(Some("A thing."), elements[0].doc.as_deref());
    }

    #[test]
    fn anonymous_array_items_are_inlined() {
        let schema: Value = json!({
            "type": "record",
            "name": "Grid",
            "fields": [{
                "name": "cells",
                "type": { "type": "array", "items": { "type": "array", "items": ["null", "int"] } }
            }]
        });
        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(1, elements.len());
        assert_eq!(
            vec![ComposedType::array_of(vec![ComposedType::array_of(vec![
                ComposedType::new(TypeKind::Null),
                ComposedType::new(TypeKind::Number),
            ])])],
            elements[0].fields()[0].types
        );
    }

    #[test]
    fn anonymous_record_items_are_rejected() {
        let schema: Value = json!({
            "type": "record",
            "name": "Holder",
            "fields": [{
                "name": "rows",
                "type": { "type": "array", "items": { "type": "record", "fields": [] } }
            }]
        });
        let err: AvroTscError = Parser::default()
            .parse(&schema)
            .expect_err("anonymous record must fail");
        assert_eq!(
            "malformed schema at #/fields/0/type/items: record is missing required 'name'",
            err.to_string()
        );
    }

    #[test]
    fn top_level_array_parses_each_schema() {
        let schema: Value = json!([
            { "type": "enum", "name": "Color", "symbols": ["RED"] },
            { "type": "record", "name": "Car", "fields": [{ "name": "color", "type": "Color" }] }
        ]);
        let elements: Vec<RootElement> = parse(&schema);
        assert_eq!(vec!["Color", "Car"], names(&elements));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let result = Parser::default().parse_str("{ \"type\": ");
        assert!(matches!(result, Err(AvroTscError::MalformedSchema { .. })));
    }

    #[test]
    fn top_level_scalar_is_malformed() {
        let result = Parser::default().parse(&json!("string"));
        assert!(matches!(result, Err(AvroTscError::MalformedSchema { .. })));
    }

    #[test]
    fn field_without_name_is_malformed() {
        let schema: Value = json!({ "type": "record", "name": "R", "fields": [{ "type": "int" }] });
        let err: AvroTscError = Parser::default().parse(&schema).expect_err("must fail");
        assert_eq!(
            "malformed schema at #/fields/0: record field is missing required 'name'",
            err.to_string()
        );
    }

    #[test]
    fn namespace_that_is_not_dotted_names_is_malformed() {
        for namespace in [".tmp.escape", "a..b", "a.", "a/../../b"] {
            let schema: Value =
                json!({ "type": "enum", "namespace": namespace, "name": "E", "symbols": ["A"] });
            let err: AvroTscError = Parser::default().parse(&schema).expect_err(namespace);
            let expected: String = format!(
                "malformed schema at #/namespace: namespace '{namespace}' must be dot-separated Avro names"
            );
            assert_eq!(expected, err.to_string());
        }
    }

    #[test]
    fn nested_namespace_is_checked_too() {
        let schema: Value = json!({
            "type": "record",
            "name": "R",
            "fields": [{
                "name": "e",
                "type": { "type": "enum", "namespace": "/abs", "name": "E", "symbols": ["A"] }
            }]
        });
        let result = Parser::default().parse(&schema);
        assert!(matches!(result, Err(AvroTscError::MalformedSchema { .. })));
    }

    #[test]
    fn invalid_default_namespace_is_malformed() {
        let parser: Parser = Parser::new(Options {
            default_namespace: "..".to_string(),
            ..Options::default()
        });
        let result = parser.parse(&json!({ "type": "enum", "name": "E", "symbols": ["A"] }));
        assert!(matches!(result, Err(AvroTscError::MalformedSchema { .. })));
    }

    #[test]
    fn name_without_identifier_characters_is_malformed() {
        let schema: Value =
            json!({ "type": "enum", "namespace": "n", "name": "123", "symbols": ["A"] });
        let err: AvroTscError = Parser::default().parse(&schema).expect_err("must fail");
        assert_eq!(
            "malformed schema at #/name: name '123' has no characters usable in an identifier",
            err.to_string()
        );
    }

    #[test]
    fn empty_union_is_malformed() {
        let schema: Value = json!({ "type": "record", "name": "R", "fields": [{ "name": "u", "type": [] }] });
        let result = Parser::default().parse(&schema);
        assert!(matches!(result, Err(AvroTscError::MalformedSchema { .. })));
    }

    #[test]
    fn bare_container_name_in_type_expression_is_malformed() {
        let schema: Value = json!({ "name": "A", "type": "array", "items": "record" });
        let result = Parser::default().parse(&schema);
        assert!(matches!(result, Err(AvroTscError::MalformedSchema { .. })));
    }
}
