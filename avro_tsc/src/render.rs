//! Renderers turning root elements into TypeScript declarations.
//!
//! Each export mode owns a [`RendererTable`]: one [`Renderer`] per element
//! kind plus a required fallback used for every kind without its own entry.
//! Renderers produce the declaration without the `export ` keyword and
//! without indentation; the generator adds both.

use crate::element::{ComposedType, FieldElement, RootElement, TypeKind};
use crate::names::{escape_single_quoted, property_key, sanitize_name, sanitize_qualified_name};
use crate::options::ExportMode;
use crate::symbols::SymbolTable;
use std::collections::HashMap;

/// Everything a renderer needs besides the element itself.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Namespace the declaration is emitted in.
    pub namespace: &'a str,
    pub symbols: &'a SymbolTable<'a>,
    /// One indentation level.
    pub tabulator: &'a str,
    /// Render references to other namespaces as `ns.Name`. Off when output
    /// has no namespace blocks.
    pub qualify_foreign: bool,
}

impl RenderContext<'_> {
    /// TypeScript spelling of one type alternative; containers recurse into
    /// their element types.
    #[must_use]
    pub fn type_name(&self, composed: &ComposedType) -> String {
        match &composed.kind {
            TypeKind::Array => format!(
                "{}<{}>",
                composed.kind.display_name(),
                self.union(&composed.subtypes)
            ),
            TypeKind::Reference(reference) => self.reference_name(reference),
            kind => kind.display_name().to_string(),
        }
    }

    /// Alternatives joined with ` | `, in declaration order.
    #[must_use]
    pub fn union(&self, types: &[ComposedType]) -> String {
        types
            .iter()
            .map(|t| self.type_name(t))
            .collect::<Vec<String>>()
            .join(" | ")
    }

    /// Name under which a referenced element is visible from this namespace.
    /// Unresolved references are emitted as written.
    fn reference_name(&self, reference: &str) -> String {
        match self.symbols.resolve(reference, self.namespace) {
            Some(target) if self.qualify_foreign && target.namespace != self.namespace => {
                sanitize_qualified_name(&target.qualified_name())
            }
            Some(target) => sanitize_name(&target.name),
            None => reference.to_string(),
        }
    }
}

/// Renders one kind of root element.
pub trait Renderer {
    /// Composite renderers receive their element's fields, each rendered by
    /// [`Renderer::render_child`].
    fn is_composite(&self) -> bool {
        false
    }

    fn render(&self, element: &RootElement, children: &[String], ctx: &RenderContext<'_>)
    -> String;

    /// One field of a composite element.
    fn render_child(&self, field: &FieldElement, ctx: &RenderContext<'_>) -> String {
        ctx.union(&field.types)
    }
}

/// `type Name = T1 | T2;` for scalars, arrays and references.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasRenderer;

impl Renderer for AliasRenderer {
    fn render(&self, element: &RootElement, _: &[String], ctx: &RenderContext<'_>) -> String {
        format!(
            "type {} = {};",
            sanitize_name(&element.name),
            ctx.union(&element.types)
        )
    }
}

/// A string enum whose members are named after their values.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumRenderer;

impl Renderer for EnumRenderer {
    fn render(&self, element: &RootElement, _: &[String], ctx: &RenderContext<'_>) -> String {
        let members: Vec<String> = element
            .symbols
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|symbol| {
                format!(
                    "{}{} = '{}'",
                    ctx.tabulator,
                    property_key(symbol),
                    escape_single_quoted(symbol)
                )
            })
            .collect();
        let name: String = sanitize_name(&element.name);
        if members.is_empty() {
            format!("enum {name}\n{{\n}};")
        } else {
            format!("enum {name}\n{{\n{}\n}};", members.join(",\n"))
        }
    }
}

/// An object type with one property per record field.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordRenderer;

impl Renderer for RecordRenderer {
    fn is_composite(&self) -> bool {
        true
    }

    fn render(&self, element: &RootElement, children: &[String], ctx: &RenderContext<'_>) -> String {
        let name: String = sanitize_name(&element.name);
        if children.is_empty() {
            return format!("type {name} = {{}};");
        }
        let body: Vec<String> = children
            .iter()
            .map(|child| indent(child, ctx.tabulator))
            .collect();
        format!("type {name} = {{\n{}\n}};", body.join(",\n"))
    }

    fn render_child(&self, field: &FieldElement, ctx: &RenderContext<'_>) -> String {
        let type_name: String = match field.symbols.as_deref() {
            // An enum declared inline on the field becomes a union of literals.
            Some(symbols) if field.types.iter().all(|t| t.kind == TypeKind::Enum) => symbols
                .iter()
                .map(|s| format!("'{}'", escape_single_quoted(s)))
                .collect::<Vec<String>>()
                .join(" | "),
            _ => ctx.union(&field.types),
        };
        let declaration: String = format!("{}: {type_name}", property_key(&field.name));
        match field.doc.as_deref() {
            Some(doc) => format!("{}\n{declaration}", doc_comment(doc)),
            None => declaration,
        }
    }
}

/// Renderers for one export mode, keyed by element kind.
pub struct RendererTable {
    fallback: Box<dyn Renderer>,
    renderers: HashMap<TypeKind, Box<dyn Renderer>>,
}

impl RendererTable {
    /// Empty table; every lookup yields `fallback` until kinds are added.
    #[must_use]
    pub fn new(fallback: impl Renderer + 'static) -> Self {
        Self {
            fallback: Box::new(fallback),
            renderers: HashMap::new(),
        }
    }

    /// Register `renderer` for `kind`, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, kind: TypeKind, renderer: impl Renderer + 'static) -> Self {
        self.renderers.insert(kind, Box::new(renderer));
        self
    }

    /// The renderer for `kind`, or the fallback.
    #[must_use]
    pub fn lookup(&self, kind: &TypeKind) -> &dyn Renderer {
        match self.renderers.get(kind) {
            Some(renderer) => renderer.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    /// The table for `mode`, or `None` if the mode has no renderers.
    #[must_use]
    pub fn for_mode(mode: ExportMode) -> Option<Self> {
        match mode {
            ExportMode::Type => Some(
                Self::new(AliasRenderer)
                    .with(TypeKind::Enum, EnumRenderer)
                    .with(TypeKind::Record, RecordRenderer),
            ),
            ExportMode::Interface | ExportMode::Abstract => None,
        }
    }
}

/// Documentation comment (`/** ... */`) for `doc`: one line for single-line text, one ` * ` line per
/// line otherwise.
#[must_use]
pub fn doc_comment(doc: &str) -> String {
    let doc: String = doc.trim().replace("*/", "*\\/");
    let lines: Vec<&str> = doc.lines().map(str::trim_end).collect();
    match lines.as_slice() {
        [] => "/** */".to_string(),
        [line] => format!("/** {line} */"),
        _ => {
            let mut comment: String = "/**".to_string();
            for line in &lines {
                comment.push('\n');
                comment.push_str(if line.is_empty() { " *" } else { " * " });
                comment.push_str(line);
            }
            comment.push_str("\n */");
            comment
        }
    }
}

/// Prefix every non-empty line of `text` with `padding`.
#[must_use]
pub fn indent(text: &str, padding: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{padding}{line}")
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}
