use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The line does not have the shape of an access log line. Expected for
    /// dirty input, e.g. an empty `$request` leaves `""` after the timestamp.
    #[error("unexpected log line contents")]
    SyntaxMismatch,

    /// The line matched but the fields it produced are unusable. This means
    /// the parser itself is wrong, not the input.
    #[error(transparent)]
    SchemaViolation(#[from] SchemaViolation),
}

impl ParseError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::SchemaViolation(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("unexpected log line length: {found} (expected {expected})")]
    FieldCount { expected: usize, found: usize },

    #[error("log line pattern has no field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to read access log {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line_number}: {source}")]
    ReadLine {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_number}: {violation}")]
    SchemaViolation {
        line_number: usize,
        line: String,
        #[source]
        violation: SchemaViolation,
    },

    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl AnalyzeError {
    /// Process exit status for this error. Schema violations get their own
    /// status so they can be told apart from I/O trouble.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyzeError::SchemaViolation { .. } => 2,
            _ => 1,
        }
    }
}
