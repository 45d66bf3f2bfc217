//! Convert gEDA/gschem schematic symbols to Encapsulated PostScript.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use pest_derive::Parser;

pub mod ast;
pub mod errors;
pub mod log;
pub mod parse;
pub mod render;
pub mod store;
pub mod types;

pub use render::EpsOptions;

use crate::errors::IoError;
use crate::store::RecordStore;

#[derive(Parser)]
#[grammar = "records.pest"]
pub struct RecordParser;

/// Convert symbol text to an EPS document named `name`.
///
/// Returns the EPS text on success, or an error with diagnostics.
pub fn sym2eps(source: &str, name: &str) -> Result<String, miette::Report> {
    let eps = sym2eps_bytes(source.as_bytes(), name)?;
    // Labels are copied byte for byte, so UTF-8 in gives UTF-8 out.
    Ok(String::from_utf8_lossy(&eps).into_owned())
}

/// Convert symbol bytes to EPS bytes. Labels in any 8-bit encoding are
/// passed through unchanged.
pub fn sym2eps_bytes(source: &[u8], name: &str) -> Result<Vec<u8>, miette::Report> {
    let store = RecordStore::load_bytes("<input>", source);
    let mut out = Vec::new();
    convert(&store, &EpsOptions::new(name), &mut out)?;
    Ok(out)
}

/// Parse `store` and write it as one EPS document to `out`.
pub fn convert(store: &RecordStore, options: &EpsOptions, out: &mut dyn Write) -> miette::Result<()> {
    let elements = parse::parse(store)?;
    render::render(&elements, options, out).map_err(|source| IoError::Write {
        name: options.document_name.clone(),
        source,
    })?;
    Ok(())
}

/// Convert a symbol file, or standard input, to an EPS file, or standard
/// output. The document is named after the output path, or `stdout.eps`.
///
/// The whole document is rendered before the output is opened, so a
/// symbol that fails to parse leaves no file behind.
pub fn convert_file(input: Option<&Path>, output: Option<&Path>) -> miette::Result<()> {
    let store = match input {
        Some(path) => {
            let bytes = fs::read(path).map_err(|source| IoError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            RecordStore::load_bytes(path.display().to_string(), &bytes)
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(IoError::ReadStdin)?;
            RecordStore::load_bytes("<stdin>", &bytes)
        }
    };
    crate::log::debug!("loaded {} records from {}", store.len(), store.name());

    let options = match output {
        Some(path) => EpsOptions::new(path.display().to_string()),
        None => EpsOptions::default(),
    };
    let mut eps = Vec::new();
    convert(&store, &options, &mut eps)?;

    let write_error = |source| IoError::Write {
        name: options.document_name.clone(),
        source,
    };
    match output {
        Some(path) => {
            let mut file = File::create(path).map_err(|source| IoError::OpenOutput {
                path: path.to_path_buf(),
                source,
            })?;
            file.write_all(&eps).map_err(write_error)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&eps).and_then(|()| stdout.flush()).map_err(write_error)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    fn ints(rule: Rule, input: &str) -> Vec<String> {
        let pairs = RecordParser::parse(rule, input)
            .unwrap_or_else(|e| panic!("Failed to parse {input:?}: {e}"));
        pairs
            .flatten()
            .filter(|pair| pair.as_rule() == Rule::int)
            .map(|pair| pair.as_str().to_string())
            .collect()
    }

    #[test]
    fn parse_line_record() {
        assert_eq!(ints(Rule::record, "L 0 0 1000 0 3 10 0 0 -1 -1"), [
            "0", "0", "1000", "0", "3", "10", "0", "0", "-1", "-1"
        ]);
    }

    #[test]
    fn parse_record_stops_at_junk() {
        assert_eq!(ints(Rule::record, "V 1 2 three 4"), ["1", "2"]);
    }

    #[test]
    fn parse_record_tag_only() {
        assert!(ints(Rule::record, "G").is_empty());
    }

    #[test]
    fn parse_record_tabs() {
        assert_eq!(ints(Rule::record, "B\t1\t-2"), ["1", "-2"]);
    }

    #[test]
    fn parse_segment_comma_pair() {
        assert_eq!(ints(Rule::segment, "M 100,200"), ["100", "200"]);
    }

    #[test]
    fn parse_segment_space_pair() {
        assert_eq!(ints(Rule::segment, "l -5 6"), ["-5", "6"]);
    }

    #[test]
    fn parse_segment_single_operand() {
        assert_eq!(ints(Rule::segment, "v 300"), ["300"]);
    }

    #[test]
    fn parse_record_accepts_any_text() {
        assert!(ints(Rule::record, "\u{1}\u{ff}( 12").is_empty());
        assert_eq!(ints(Rule::segment, "Q12"), ["12"]);
    }

    #[test]
    fn parse_segment_close() {
        assert!(ints(Rule::segment, "z").is_empty());
    }

    #[test]
    fn sym2eps_empty_input() {
        let eps = sym2eps("", "empty.eps").unwrap();
        assert!(eps.contains("%%BoundingBox: 0 0 2.88 2.88\n"));
        assert!(eps.contains("%%BeginDocument: empty.eps\n"));
        assert!(eps.contains("20 20 translate\n"));
    }

    #[test]
    fn sym2eps_reports_truncation() {
        let err = sym2eps("T 0 0 5 10 1 1 0 0 4\nonly\n", "t.eps").unwrap_err();
        assert!(err.to_string().contains("needs 4 following lines"), "{err}");
    }
}
