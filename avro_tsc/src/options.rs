//! Options for parsing and TypeScript generation.

use std::fmt;

/// Declaration style used for root elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ExportMode {
    /// `export type Name = ...;`
    #[default]
    Type,
    /// `export interface Name { ... }` (not implemented)
    Interface,
    /// `export abstract class Name { ... }` (not implemented)
    Abstract,
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Self::Type => "type",
            Self::Interface => "interface",
            Self::Abstract => "abstract",
        };
        f.write_str(name)
    }
}

/// Options shared by the parser, the generator and the CLI.
///
/// Built once and handed by value to [`crate::Parser::new`] and
/// [`crate::Generator::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::struct_excessive_bools)]
pub struct Options {
    /// Merge every namespace into a single `index.ts` instead of one file per
    /// namespace.
    ///
    /// **Default: false.**
    pub single_file: bool,

    /// Declaration style for root elements. Only [`ExportMode::Type`] has
    /// renderers; the others fail when the generator is constructed.
    ///
    /// **Default: [`ExportMode::Type`].**
    pub export_mode: ExportMode,

    /// Wrap declarations in `export namespace` blocks.
    ///
    /// **Default: true.**
    pub namespaces: bool,

    /// Emit `export const Name_SCHEMA = {...};` after every record holding
    /// the verbatim source schema.
    ///
    /// **Default: true.**
    pub export_schema: bool,

    /// One level of indentation.
    ///
    /// **Default: `"\t"`.**
    pub tabulator: String,

    /// Suffix used to filter input files when loading a directory, leading
    /// `.` included. Empty accepts every file.
    ///
    /// **Default: `".avro"`.**
    pub input_extension: String,

    /// Namespace for schema nodes that neither declare one nor inherit one.
    ///
    /// **Default: empty (the default namespace).**
    pub default_namespace: String,

    /// Fail generation when a named type reference matches no root element.
    /// When false, unresolved names are emitted as written.
    ///
    /// **Default: true.**
    pub deny_dangling_references: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            single_file: false,
            export_mode: ExportMode::Type,
            namespaces: true,
            export_schema: true,
            tabulator: "\t".to_string(),
            input_extension: ".avro".to_string(),
            default_namespace: String::new(),
            deny_dangling_references: true,
        }
    }
}
