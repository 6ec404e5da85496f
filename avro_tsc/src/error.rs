use crate::options::ExportMode;
use std::error;
use std::fmt;
use std::path::PathBuf;

/// Error type for Avro to TypeScript generation.
#[derive(Debug)]
pub enum AvroTscError {
    /// The schema text is not valid JSON, or a node lacks a required field.
    MalformedSchema {
        /// JSON pointer to the offending node (`#` for the document root).
        path: String,
        /// What is wrong with the node.
        reason: String,
    },

    /// The input directory could not be listed.
    SourceUnavailable { path: PathBuf, reason: String },

    /// The selected export mode has no renderers.
    UnimplementedExportMode(ExportMode),

    /// One or more root elements cannot be rendered.
    Generation(GenerationError),

    /// A failure while loading one particular input file.
    InFile {
        path: PathBuf,
        error: Box<AvroTscError>,
    },

    /// I/O error (e.g., reading a schema file, writing an output file).
    Io(std::io::Error),
}

impl AvroTscError {
    pub(crate) fn malformed(path: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::MalformedSchema {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn in_file(path: impl Into<PathBuf>, error: Self) -> Self {
        Self::InFile {
            path: path.into(),
            error: Box::new(error),
        }
    }
}

impl error::Error for AvroTscError {}

impl fmt::Display for AvroTscError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSchema { path, reason } => {
                write!(f, "malformed schema at {path}: {reason}")
            }
            Self::SourceUnavailable { path, reason } => {
                write!(f, "cannot list input directory '{}': {reason}", path.display())
            }
            Self::UnimplementedExportMode(mode) => {
                write!(f, "export mode '{mode}' is not implemented")
            }
            Self::Generation(generation_error) => fmt::Display::fmt(generation_error, f),
            Self::InFile { path, error } => write!(f, "{}: {error}", path.display()),
            Self::Io(io_error) => fmt::Display::fmt(io_error, f),
        }
    }
}

impl From<std::io::Error> for AvroTscError {
    fn from(io_error: std::io::Error) -> Self {
        Self::Io(io_error)
    }
}

impl From<serde_json::Error> for AvroTscError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::malformed("#", json_error.to_string())
    }
}

impl From<GenerationError> for AvroTscError {
    fn from(generation_error: GenerationError) -> Self {
        Self::Generation(generation_error)
    }
}

/// Every problem found in a root element table before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError {
    pub issues: Vec<GenerationIssue>,
}

impl error::Error for GenerationError {}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot generate {} element(s):", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

/// A single problem tied to one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationIssue {
    /// Qualified name of the root element (`namespace.Name`).
    pub element: String,
    pub kind: GenerationIssueKind,
}

impl fmt::Display for GenerationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.element, self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationIssueKind {
    /// The root resolved to `alternatives` types instead of exactly one.
    UnsupportedRootUnion { alternatives: usize },
    /// A named type reference matches no root element.
    DanglingTypeReference {
        /// Field holding the reference; `None` for the element's own type.
        field: Option<String>,
        reference: String,
    },
    /// The element name or a namespace segment is a TypeScript reserved word.
    ReservedWord { word: String },
    /// Two namespaces map to the same output file.
    OutputFileCollision { file: String, namespace: String },
}

impl fmt::Display for GenerationIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedRootUnion { alternatives } => write!(
                f,
                "root type must have exactly one type alternative, found {alternatives}"
            ),
            Self::DanglingTypeReference {
                field: Some(field),
                reference,
            } => write!(f, "field '{field}' references unknown type '{reference}'"),
            Self::DanglingTypeReference {
                field: None,
                reference,
            } => write!(f, "references unknown type '{reference}'"),
            Self::ReservedWord { word } => {
                write!(f, "'{word}' is a reserved word in TypeScript")
            }
            Self::OutputFileCollision { file, namespace } => write!(
                f,
                "output file '{file}' is already written for namespace '{namespace}'"
            ),
        }
    }
}
