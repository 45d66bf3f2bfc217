//! Helvetica character widths for estimating rendered text length.

/// Advance width of each byte value in Helvetica, as a fraction of the
/// font size. Control codes and the unassigned 127..=160 range are zero.
#[rustfmt::skip]
pub const HELVETICA_WIDTHS: [f32; 256] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.277979, 0.277979, 0.35498, 0.555981, 0.555981, 0.888989, 0.666992, 0.221997,
    0.332983, 0.332983, 0.388989, 0.583984, 0.277979, 0.332983, 0.277979, 0.277979,
    0.555981, 0.555981, 0.555981, 0.555981, 0.555981, 0.555981, 0.555981, 0.555981,
    0.555981, 0.555981, 0.277979, 0.277979, 0.583984, 0.583984, 0.583984, 0.555981,
    1.01499, 0.666992, 0.666992, 0.721997, 0.721997, 0.666992, 0.610986, 0.777979,
    0.721997, 0.277979, 0.5, 0.666992, 0.555981, 0.832983, 0.721997, 0.777979,
    0.666992, 0.777979, 0.721997, 0.666992, 0.610986, 0.721997, 0.666992, 0.943994,
    0.666992, 0.666992, 0.610986, 0.277979, 0.277979, 0.277979, 0.468994, 0.555981,
    0.221997, 0.555981, 0.555981, 0.5, 0.555981, 0.555981, 0.277979, 0.555981,
    0.555981, 0.221997, 0.221997, 0.5, 0.221997, 0.832983, 0.555981, 0.555981,
    0.555981, 0.555981, 0.332983, 0.5, 0.277979, 0.555981, 0.5, 0.721997,
    0.5, 0.5, 0.5, 0.333984, 0.259985, 0.333984, 0.583984, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.332983, 0.555981, 0.555981, 0.166992, 0.555981, 0.555981, 0.555981,
    0.555981, 0.190991, 0.332983, 0.555981, 0.332983, 0.332983, 0.5, 0.5,
    0.0, 0.555981, 0.555981, 0.555981, 0.277979, 0.0, 0.536987, 0.35,
    0.221997, 0.332983, 0.332983, 0.555981, 1.0, 1.0, 0.0, 0.610986,
    0.0, 0.332983, 0.332983, 0.332983, 0.332983, 0.332983, 0.332983, 0.332983,
    0.332983, 0.0, 0.332983, 0.332983, 0.0, 0.332983, 0.332983, 0.332983,
    1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.369995, 0.0, 0.0, 0.0, 0.0,
    0.555981, 0.777979, 1.0, 0.36499, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.888989, 0.0, 0.0, 0.0, 0.277979, 0.0, 0.0,
    0.221997, 0.610986, 0.943994, 0.610986, 0.0, 0.0, 0.0, 0.0,
];

/// Estimated width of `text` set at `size`, in the same units as `size`.
///
/// Widths are summed per byte in single precision and truncated.
pub fn text_width(text: &[u8], size: i32) -> i32 {
    let size = size as f32;
    let total: f32 = text
        .iter()
        .fold(0.0, |acc, &byte| acc + HELVETICA_WIDTHS[usize::from(byte)] * size);
    total as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capital_a_at_one_thousand() {
        assert_eq!(text_width(b"A", 1000), 666);
    }

    #[test]
    fn empty_and_control_text_has_no_width() {
        assert_eq!(text_width(b"", 500), 0);
        assert_eq!(text_width(b"\x7f\t", 500), 0);
    }

    #[test]
    fn widths_accumulate_before_truncation() {
        // 0.555981 * 1000 * 5 = 2779.9, truncated once at the end
        assert_eq!(text_width(b"00000", 1000), 2779);
    }

    #[test]
    fn refdes_label() {
        assert_eq!(text_width(b"U1", 180), 230);
    }

    #[test]
    fn utf8_sequences_are_measured_per_byte() {
        // U+00B5 is 0xc2 0xb5; only the lead byte has a width
        assert_eq!(text_width("\u{b5}".as_bytes(), 1000), 332);
        assert_eq!(text_width(b"\xb5", 1000), 0);
    }
}
