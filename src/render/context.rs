//! Emitter state - tracks the graphics state already written

use crate::types::color_slot;

use super::defaults;

/// The color, line width and font most recently written to the document.
///
/// Every drawing operator asks for the state it needs; only values that
/// differ from what is already in effect are written again.
#[derive(Debug, Clone, Default)]
pub struct EmitterState {
    color: Option<usize>,
    line_width: Option<i32>,
    font_size: Option<f64>,
}

impl EmitterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select color `code`. Returns the color table slot to write, or
    /// `None` if that slot is already current.
    pub fn switch_color(&mut self, code: i32) -> Option<usize> {
        let slot = color_slot(code);
        if self.color == Some(slot) {
            return None;
        }
        self.color = Some(slot);
        Some(slot)
    }

    /// Select a line width, raised to the minimum. Returns the width to
    /// write, or `None` if it is already current.
    pub fn switch_line_width(&mut self, width: i32) -> Option<i32> {
        let width = width.max(defaults::MIN_LINE_WIDTH);
        if self.line_width == Some(width) {
            return None;
        }
        self.line_width = Some(width);
        Some(width)
    }

    /// Select a font size. Returns true if it has to be written.
    pub fn switch_font_size(&mut self, size: f64) -> bool {
        if self.font_size == Some(size) {
            return false;
        }
        self.font_size = Some(size);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_always_writes() {
        let mut state = EmitterState::new();
        assert_eq!(state.switch_color(3), Some(3));
        assert_eq!(state.switch_line_width(10), Some(10));
        assert!(state.switch_font_size(194.0));
    }

    #[test]
    fn repeated_requests_are_suppressed() {
        let mut state = EmitterState::new();
        state.switch_color(3);
        state.switch_line_width(10);
        assert_eq!(state.switch_color(3), None);
        assert_eq!(state.switch_line_width(10), None);
        assert_eq!(state.switch_line_width(12), Some(12));
    }

    #[test]
    fn clamped_values_compare_after_clamping() {
        let mut state = EmitterState::new();
        assert_eq!(state.switch_color(-4), Some(16));
        assert_eq!(state.switch_color(99), None);
        assert_eq!(state.switch_line_width(0), Some(1));
        assert_eq!(state.switch_line_width(1), None);
        assert_eq!(state.switch_line_width(-3), None);
    }

    #[test]
    fn font_size_cache() {
        let mut state = EmitterState::new();
        assert!(state.switch_font_size(194.0));
        assert!(!state.switch_font_size(194.0));
        assert!(state.switch_font_size(155.0));
    }
}
