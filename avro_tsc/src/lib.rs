//! Generate TypeScript type declarations from Apache Avro schemas.
//!
//! [`Parser`] flattens schemas into a table of [`RootElement`]s, hoisting every
//! named type nested anywhere in a schema. [`Generator`] groups that table by
//! namespace and renders one `export namespace` block per namespace, as one
//! file each or merged into `index.ts`.

mod assembler;
pub mod element;
mod error;
mod generator;
pub mod names;
pub mod namespace;
mod options;
mod parser;
mod render;
mod schema;
mod schema_path;
mod source;
mod symbols;
pub mod type_map;
mod validate;

pub use element::{ComposedType, FieldElement, RootElement, TypeKind};
pub use error::{AvroTscError, GenerationError, GenerationIssue, GenerationIssueKind};
pub use generator::{ExportFile, Generator, MERGED_FILE_NAME, merge_files};
pub use options::{ExportMode, Options};
pub use parser::Parser;

use std::io::Write;
use std::path::Path;

/// Parse one schema document and generate its output files.
///
/// Honors `options.single_file`: the result is then a single `index.ts`.
///
/// # Errors
///
/// Returns `UnimplementedExportMode` before parsing if the export mode has no
/// renderers, `MalformedSchema` if the schema is invalid, or `Generation` if
/// the parsed elements cannot be rendered.
pub fn generate_from_str(
    schema_json: &str,
    options: Options,
) -> Result<Vec<ExportFile>, AvroTscError> {
    let generator: Generator = Generator::new(options.clone())?;
    let elements: Vec<RootElement> = Parser::new(options).parse_str(schema_json)?;
    generator.assemble(&elements)
}

/// Generate TypeScript from a schema string and write it to `writer`.
///
/// Every namespace is written, merged the same way as `index.ts`. The writer
/// can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Stdout`.
///
/// # Errors
///
/// Same as [`generate_from_str`], plus `Io` if writing fails.
pub fn generate_to_writer<W: Write>(
    schema_json: &str,
    writer: &mut W,
    options: Options,
) -> Result<(), AvroTscError> {
    let files: Vec<ExportFile> = generate_from_str(schema_json, options)?;
    let merged: ExportFile = merge_files(&files);
    writer.write_all(merged.content.as_bytes())?;
    Ok(())
}

/// Convert every schema file under `input_dir` and write the result below
/// `output_dir`, which is cleared first.
///
/// # Errors
///
/// Returns `SourceUnavailable` if `input_dir` cannot be listed, `InFile` for
/// the first input file that fails to load, `Generation` if the elements
/// cannot be rendered, or `Io` if writing fails.
pub fn generate_from_dir(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    options: Options,
) -> Result<(), AvroTscError> {
    let generator: Generator = Generator::new(options.clone())?;
    let elements: Vec<RootElement> =
        Parser::new(options).load(input_dir.as_ref(), &generator.options().input_extension)?;
    generator.dump(&elements, output_dir.as_ref())
}
