//! Drawing order.
//!
//! Elements are drawn grouped by record type, then by line width, then by
//! color, so runs of identical pen state need a single state change.

/// The pen state an element is drawn with, as used for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub tag: char,
    pub size: i32,
    pub color: i32,
}

/// One drawable element waiting to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortableEntry {
    pub key: SortKey,
    /// Input line of the element's record; the final tie-breaker.
    pub record: usize,
    /// Position in the parsed element list.
    pub element: usize,
}

/// Order entries by (tag, size, color, record).
pub fn sort_entries(entries: &mut [SortableEntry]) {
    entries.sort_by_key(|entry| (entry.key.tag, entry.key.size, entry.key.color, entry.record));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: char, size: i32, color: i32, record: usize) -> SortableEntry {
        SortableEntry {
            key: SortKey { tag, size, color },
            record,
            element: record,
        }
    }

    fn tags(entries: &[SortableEntry]) -> String {
        entries.iter().map(|e| e.key.tag).collect()
    }

    #[test]
    fn groups_by_tag_in_ascii_order() {
        let mut entries = vec![
            entry('T', 10, 5, 0),
            entry('L', 0, 3, 1),
            entry('L', 5, 1, 2),
            entry('B', 2, 3, 3),
        ];
        sort_entries(&mut entries);
        assert_eq!(tags(&entries), "BLLT");
    }

    #[test]
    fn size_before_color_before_record() {
        let mut entries = vec![
            entry('L', 10, 1, 0),
            entry('L', 0, 9, 1),
            entry('L', 0, 3, 2),
            entry('L', 0, 3, 3),
        ];
        sort_entries(&mut entries);
        let records: Vec<usize> = entries.iter().map(|e| e.record).collect();
        assert_eq!(records, [2, 3, 1, 0]);
    }

    #[test]
    fn nets_sort_apart_from_pins() {
        let mut entries = vec![entry('P', 13, 1, 0), entry('N', 13, 4, 1), entry('U', 13, 10, 2)];
        sort_entries(&mut entries);
        assert_eq!(tags(&entries), "NPU");
    }
}
