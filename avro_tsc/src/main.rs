//! Binary to generate TypeScript declarations from Avro schemas.
//!
//! Usage: `avrotsc [OPTIONS] [INPUT_DIR] [OUTPUT_DIR]`
//!
//! With both directories, every schema file under `INPUT_DIR` is converted and
//! the result written below `OUTPUT_DIR`, which is cleared first. Without
//! them, one schema is read from stdin and the merged declarations are written
//! to stdout.

use std::io::{read_to_string, stdin, stdout};
use std::path::PathBuf;
use std::process;

use avro_tsc::{AvroTscError, ExportMode, Options, generate_from_dir, generate_to_writer};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "avro_tsc=info";

#[derive(Parser, Debug)]
#[expect(clippy::struct_excessive_bools)]
#[command(
    name = "avrotsc",
    version,
    about = "Generate TypeScript type declarations from Avro schemas"
)]
struct Cli {
    /// Directory searched recursively for schema files
    #[arg(value_name = "INPUT_DIR", requires = "output_dir")]
    input_dir: Option<PathBuf>,

    /// Directory receiving the generated files
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Merge every namespace into a single index.ts
    #[arg(short, long)]
    single_file: bool,

    /// Suffix of schema files, leading dot included; empty accepts every file
    #[arg(short = 'e', long, default_value = ".avro")]
    input_extension: String,

    /// Declaration style
    #[arg(short = 'm', long, value_enum, default_value_t = ExportMode::Type)]
    export_mode: ExportMode,

    /// Indentation unit
    #[arg(short, long, default_value = "\t")]
    tabulator: String,

    /// Namespace for schemas that declare none
    #[arg(long, value_name = "NS")]
    namespace: Option<String>,

    /// Do not emit the `_SCHEMA` constant after each record
    #[arg(long)]
    no_schema: bool,

    /// Do not wrap declarations in namespace blocks
    #[arg(long)]
    no_namespaces: bool,

    /// Emit unresolved type references as written instead of failing
    #[arg(long)]
    allow_dangling_references: bool,

    /// Do not log to stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            single_file: self.single_file,
            export_mode: self.export_mode,
            namespaces: !self.no_namespaces,
            export_schema: !self.no_schema,
            tabulator: self.tabulator.clone(),
            input_extension: self.input_extension.clone(),
            default_namespace: self.namespace.clone().unwrap_or_default(),
            deny_dangling_references: !self.allow_dangling_references,
        }
    }
}

fn main() {
    let cli: Cli = Cli::parse();
    if !cli.quiet {
        init_tracing();
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), AvroTscError> {
    let options: Options = cli.options();
    if let (Some(input_dir), Some(output_dir)) = (&cli.input_dir, &cli.output_dir) {
        return generate_from_dir(input_dir, output_dir, options);
    }
    let schema_json: String = read_to_string(stdin())?;
    generate_to_writer(&schema_json, &mut stdout(), options)
}
