use crate::element::TypeKind;
use crate::error::AvroTscError;
use crate::schema_path::SchemaPath;
use crate::type_map::map_primitive;
use serde::Deserialize;
use serde_json::Value;

/// One object node of an Avro schema: a named type or a record field.
///
/// Only the keys used by the generator are modeled; everything else
/// (`default`, `aliases`, `order`, `logicalType`, ...) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SchemaNode {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub doc: Option<String>,

    /// A primitive or type name, a union (array), or a nested schema (object).
    #[serde(default)]
    pub r#type: Option<Value>,

    #[serde(default)]
    pub fields: Option<Vec<Value>>,

    #[serde(default)]
    pub symbols: Option<Vec<String>>,

    #[serde(default)]
    pub items: Option<Value>,
}

/// What a node's `type` declares, decided once per node.
#[derive(Debug, PartialEq)]
pub enum NodeKind<'a> {
    /// `"type": [alt, ...]`
    Union(&'a [Value]),
    /// `"type": { ... }`
    Complex(&'a Value),
    /// `"type": "record"` with its field nodes.
    Record(&'a [Value]),
    /// `"type": "enum"` with its symbols.
    Enum(&'a [String]),
    /// `"type": "array"` with its `items` type.
    Array(&'a Value),
    /// A primitive in the type table.
    Scalar(TypeKind),
    /// Any other name: a reference to a named type.
    NamedReference(&'a str),
}

impl SchemaNode {
    /// Read a node, failing with `MalformedSchema` at `path` if `value` is
    /// not an object or a modeled key has the wrong shape.
    pub fn from_value(value: &Value, path: &SchemaPath) -> Result<Self, AvroTscError> {
        if !value.is_object() {
            return Err(AvroTscError::malformed(
                path,
                format!("expected a schema object, found {}", json_kind(value)),
            ));
        }
        Self::deserialize(value).map_err(|e| AvroTscError::malformed(path, e.to_string()))
    }

    /// Classify the node by its `type`.
    ///
    /// Records and enums must carry a `name`; records need `fields`, enums
    /// need `symbols` and arrays need `items`.
    pub fn classify(&self, path: &SchemaPath) -> Result<NodeKind<'_>, AvroTscError> {
        let Some(type_value) = self.r#type.as_ref() else {
            return Err(AvroTscError::malformed(path, "missing required 'type'"));
        };
        match type_value {
            Value::Array(alternatives) => Ok(NodeKind::Union(alternatives)),
            Value::Object(_) => Ok(NodeKind::Complex(type_value)),
            Value::String(type_name) => self.classify_named(type_name, path),
            other => Err(AvroTscError::malformed(
                path.key("type"),
                format!(
                    "'type' must be a string, an array or an object, found {}",
                    json_kind(other)
                ),
            )),
        }
    }

    fn classify_named<'a>(
        &'a self,
        type_name: &'a str,
        path: &SchemaPath,
    ) -> Result<NodeKind<'a>, AvroTscError> {
        match type_name {
            "record" => {
                self.require_name(type_name, path)?;
                let fields: &[Value] = self.fields.as_deref().ok_or_else(|| {
                    AvroTscError::malformed(path, "record is missing required 'fields'")
                })?;
                Ok(NodeKind::Record(fields))
            }
            "enum" => {
                self.require_name(type_name, path)?;
                let symbols: &[String] = self.symbols.as_deref().ok_or_else(|| {
                    AvroTscError::malformed(path, "enum is missing required 'symbols'")
                })?;
                Ok(NodeKind::Enum(symbols))
            }
            "array" => {
                let items: &Value = self.items.as_ref().ok_or_else(|| {
                    AvroTscError::malformed(path, "array is missing required 'items'")
                })?;
                Ok(NodeKind::Array(items))
            }
            other => match map_primitive(other) {
                TypeKind::Reference(_) => Ok(NodeKind::NamedReference(other)),
                kind => Ok(NodeKind::Scalar(kind)),
            },
        }
    }

    fn require_name(&self, type_name: &str, path: &SchemaPath) -> Result<(), AvroTscError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(AvroTscError::malformed(
                path,
                format!("{type_name} is missing required 'name'"),
            )),
        }
    }
}

/// Short description of a JSON value's kind for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
