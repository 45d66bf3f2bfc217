//! Error types with rich diagnostics using miette
//!
//! Parse errors carry spans into the record text so the offending field is
//! pointed at; I/O errors carry the path that failed.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<stdin>")
    pub name: String,
    /// The record text, one record per line
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while turning records into elements
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("integer out of range: {text}")]
    #[diagnostic(
        code(symeps::parse::integer_overflow),
        help("record fields must fit in a signed 32-bit integer")
    )]
    IntegerOverflow {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("too large")]
        span: SourceSpan,
    },

    #[error("'{tag}' record needs {expected} following lines, only {found} remain")]
    #[diagnostic(code(symeps::parse::truncated_record))]
    TruncatedRecord {
        tag: char,
        expected: usize,
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("count given here")]
        span: SourceSpan,
    },
}

// ============================================================================
// I/O Errors
// ============================================================================

/// Errors reading symbols or writing EPS documents
#[derive(Error, Diagnostic, Debug)]
pub enum IoError {
    #[error("can't open {} for reading", path.display())]
    #[diagnostic(code(symeps::io::open_input))]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't open {} for writing", path.display())]
    #[diagnostic(code(symeps::io::open_output))]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading standard input")]
    #[diagnostic(code(symeps::io::read_stdin))]
    ReadStdin(#[source] std::io::Error),

    #[error("failed writing {name}")]
    #[diagnostic(code(symeps::io::write))]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
