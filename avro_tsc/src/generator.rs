//! TypeScript code generator.
//!
//! Groups root elements by namespace and renders one file per namespace, each
//! holding an `export namespace` block with one declaration per element.

use crate::assembler;
use crate::element::RootElement;
use crate::error::AvroTscError;
use crate::names::{sanitize_name, sanitize_qualified_name};
use crate::namespace::{self, Namespace, NamespaceMap};
use crate::options::Options;
use crate::render::{RenderContext, Renderer, RendererTable, doc_comment, indent};
use crate::symbols::SymbolTable;
use crate::validate::validate_elements;
use std::path::Path;
use tracing::debug;

/// Name of the file produced when every namespace is merged.
pub const MERGED_FILE_NAME: &str = "index.ts";

/// One generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Path relative to the output directory.
    pub filename: String,
    pub content: String,
}

/// Renders root elements with the renderer table of the configured export
/// mode.
pub struct Generator {
    options: Options,
    renderers: RendererTable,
}

impl Generator {
    /// # Errors
    ///
    /// Returns `UnimplementedExportMode` if `options.export_mode` has no
    /// renderers.
    pub fn new(options: Options) -> Result<Self, AvroTscError> {
        let renderers: RendererTable = RendererTable::for_mode(options.export_mode)
            .ok_or(AvroTscError::UnimplementedExportMode(options.export_mode))?;
        Ok(Self { options, renderers })
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// One file per namespace, in first-seen namespace order.
    ///
    /// # Errors
    ///
    /// Returns `Generation` listing every root union and, unless dangling
    /// references are allowed, every unresolvable type reference. Nothing is
    /// rendered in that case.
    pub fn generate(&self, elements: &[RootElement]) -> Result<Vec<ExportFile>, AvroTscError> {
        let symbols: SymbolTable<'_> = SymbolTable::new(elements);
        validate_elements(elements, &symbols, &self.options)?;

        let namespaces: NamespaceMap<'_> = namespace::group(elements);
        let files: Vec<ExportFile> = namespaces
            .values()
            .map(|ns| ExportFile {
                filename: namespace::file_name(ns.name),
                content: self.generate_namespace(ns, &symbols),
            })
            .collect();
        debug!(
            elements = elements.len(),
            files = files.len(),
            "generated namespaces"
        );
        Ok(files)
    }

    /// [`Generator::generate`], merged into one file when `single_file` is
    /// set.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate`].
    pub fn assemble(&self, elements: &[RootElement]) -> Result<Vec<ExportFile>, AvroTscError> {
        let files: Vec<ExportFile> = self.generate(elements)?;
        if self.options.single_file {
            Ok(vec![merge_files(&files)])
        } else {
            Ok(files)
        }
    }

    /// Generate and write the result under `output_dir`, replacing whatever
    /// the directory held before.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate`], plus `Io` if writing fails.
    pub fn dump(&self, elements: &[RootElement], output_dir: &Path) -> Result<(), AvroTscError> {
        let files: Vec<ExportFile> = self.assemble(elements)?;
        assembler::write_files(output_dir, &files)
    }

    fn generate_namespace(&self, ns: &Namespace<'_>, symbols: &SymbolTable<'_>) -> String {
        let wrap: bool = self.options.namespaces && !ns.name.is_empty();
        let padding: &str = if wrap { &self.options.tabulator } else { "" };
        let ctx: RenderContext<'_> = RenderContext {
            namespace: ns.name,
            symbols,
            tabulator: &self.options.tabulator,
            qualify_foreign: self.options.namespaces,
        };

        let mut output: String = String::new();
        if wrap {
            output.push_str(&format!(
                "export namespace {} {{\n",
                sanitize_qualified_name(ns.name)
            ));
        }
        for element in &ns.elements {
            let declaration: String = self.render_element(element, &ctx);
            output.push_str(&indent(&format!("{declaration}\n\n"), padding));
        }
        if wrap {
            output.push_str("}\n");
        }
        output
    }

    fn render_element(&self, element: &RootElement, ctx: &RenderContext<'_>) -> String {
        // Roots hold exactly one type once validated.
        let Some(root_type) = element.types.first() else {
            return String::new();
        };
        let renderer: &dyn Renderer = self.renderers.lookup(&root_type.kind);

        let mut declaration: String = String::new();
        if let Some(doc) = element.doc.as_deref() {
            declaration.push_str(&doc_comment(doc));
            declaration.push('\n');
        }
        declaration.push_str("export ");
        if renderer.is_composite() {
            let children: Vec<String> = element
                .fields()
                .iter()
                .map(|field| renderer.render_child(field, ctx))
                .collect();
            declaration.push_str(&renderer.render(element, &children, ctx));
            if self.options.export_schema {
                declaration.push_str(&format!(
                    "\n\nexport const {}_SCHEMA = {};",
                    sanitize_name(&element.name),
                    element.schema
                ));
            }
        } else {
            declaration.push_str(&renderer.render(element, &[], ctx));
        }
        declaration
    }
}

/// Concatenate every file, blank-line separated, into `index.ts`.
#[must_use]
pub fn merge_files(files: &[ExportFile]) -> ExportFile {
    ExportFile {
        filename: MERGED_FILE_NAME.to_string(),
        content: files
            .iter()
            .map(|file| file.content.as_str())
            .collect::<Vec<&str>>()
            .join("\n\n"),
    }
}
