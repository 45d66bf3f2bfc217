//! The record store: symbol input split into trimmed lines.

use crate::errors::SourceContext;

/// Input lines in file order, one record per line, kept as raw bytes.
///
/// Carriage returns are dropped and leading whitespace is trimmed, so every
/// entry starts with its tag (or, for text sub-records, the label itself).
/// Labels are passed through byte for byte; only diagnostics see UTF-8.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    name: String,
    lines: Vec<Vec<u8>>,
}

impl RecordStore {
    /// Split `source` into records.
    pub fn load(name: impl Into<String>, source: &str) -> Self {
        Self::load_bytes(name, source.as_bytes())
    }

    /// Split raw bytes into records. Bytes need not be UTF-8; Latin-1
    /// labels from older symbol libraries survive unchanged.
    pub fn load_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let text: Vec<u8> = bytes.iter().copied().filter(|&b| b != b'\r').collect();
        let mut pieces: Vec<&[u8]> = text.split(|&b| b == b'\n').collect();
        // A final newline terminates the last record rather than opening one.
        if pieces.last().is_some_and(|last| last.is_empty()) {
            pieces.pop();
        }
        let lines = pieces
            .into_iter()
            .map(|line| {
                let start = line.iter().position(|&b| !is_c_space(b)).unwrap_or(line.len());
                line[start..].to_vec()
            })
            .collect();
        Self {
            name: name.into(),
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.lines.get(index).map(Vec::as_slice)
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    /// The longest UTF-8 prefix of record `index`, for field parsing.
    /// Record fields are ASCII, so a stray byte only ends the field list.
    pub fn record_text(&self, index: usize) -> &str {
        let bytes = self.lines.get(index).map(Vec::as_slice).unwrap_or_default();
        match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Byte offset of record `index` within [`RecordStore::source_context`].
    pub fn offset_of(&self, index: usize) -> usize {
        self.lines[..index.min(self.lines.len())]
            .iter()
            .map(|line| String::from_utf8_lossy(line).len() + 1)
            .sum()
    }

    /// The normalized records rejoined as text, for diagnostics.
    pub fn source_context(&self) -> SourceContext {
        let text: Vec<String> = self
            .lines
            .iter()
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect();
        SourceContext::new(self.name.clone(), text.join("\n"))
    }
}

/// Whitespace as C's `isspace` sees it; newlines never reach here.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0b | 0x0c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_leading_whitespace_and_carriage_returns() {
        let store = RecordStore::load("t.sym", "  L 0 0 1 1 3 0\r\n\tB 1 2 3 4 5 6\r\n");
        assert_eq!(store.lines(), [b"L 0 0 1 1 3 0".to_vec(), b"B 1 2 3 4 5 6".to_vec()]);
    }

    #[test]
    fn keeps_blank_lines_and_unterminated_last_line() {
        let store = RecordStore::load("t.sym", "v 20110115 2\n\nP 0 0 1 1 1");
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(1), Some(&b""[..]));
        assert_eq!(store.get(2), Some(&b"P 0 0 1 1 1"[..]));
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(RecordStore::load("t.sym", "").is_empty());
        assert!(RecordStore::load("t.sym", "\r").is_empty());
    }

    #[test]
    fn trailing_whitespace_is_preserved() {
        let store = RecordStore::load("t.sym", "   label with space  \n");
        assert_eq!(store.get(0), Some(&b"label with space  "[..]));
    }

    #[test]
    fn offsets_follow_joined_source() {
        let store = RecordStore::load("t.sym", "ab\ncde\nf\n");
        assert_eq!(store.offset_of(0), 0);
        assert_eq!(store.offset_of(1), 3);
        assert_eq!(store.offset_of(2), 7);
        let ctx = store.source_context();
        assert_eq!(&ctx.source[7..8], "f");
    }

    #[test]
    fn latin1_bytes_are_kept() {
        let store = RecordStore::load_bytes("t.sym", b"T 0 0\n10\xb5F\n");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some(&b"10\xb5F"[..]));
    }

    #[test]
    fn record_text_stops_at_invalid_utf8() {
        let store = RecordStore::load_bytes("t.sym", b"L 1 2\xff 3\n");
        assert_eq!(store.record_text(0), "L 1 2");
    }

    #[test]
    fn offsets_count_replacement_characters() {
        // 0xe9 becomes U+FFFD (3 bytes) in the diagnostic text
        let store = RecordStore::load_bytes("t.sym", b"\xe9\nL 0 0\n");
        assert_eq!(store.offset_of(1), 4);
        assert_eq!(&store.source_context().source[4..5], "L");
    }
}
