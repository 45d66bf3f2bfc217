//! Text label sizing and anchor offsets.
//!
//! Labels are measured twice: once generously for the bounding box and
//! once at the size the font is actually set. Both use the same metrics.

use glam::IVec2;

use crate::types::{HAlign, Rotation, VAlign};

use super::defaults;

/// Record text size (points) in mils, at `scale`, truncated.
fn scaled_size(size: i32, scale: f64) -> i32 {
    (f64::from(size) * 1000.0 / defaults::POINTS_PER_INCH * scale) as i32
}

/// Glyph height used when measuring a label's extent.
pub fn extent_size(size: i32) -> i32 {
    scaled_size(size, defaults::TEXT_EXTENT_SCALE)
}

/// Font size handed to `scalefont`.
pub fn font_size(size: i32) -> f64 {
    f64::from(scaled_size(size, defaults::TEXT_FONT_SCALE))
}

/// Distance from the anchor back to the label's left edge.
pub fn anchor_x(h: HAlign, len: i32) -> i32 {
    match h {
        HAlign::Left => 0,
        HAlign::Center => len / 2,
        HAlign::Right => len,
    }
}

/// Distance from the anchor down to the label's bottom when measuring.
pub fn extent_y(v: VAlign, size: i32) -> i32 {
    match v {
        VAlign::Bottom => 0,
        VAlign::Middle => (f64::from(size) * 0.35) as i32,
        VAlign::Top => (f64::from(size) * 0.7) as i32,
    }
}

/// Baseline of the first of `lines` lines relative to the anchor, for
/// lines `step` apart. Later lines sit one `step` lower each.
pub fn first_baseline(v: VAlign, step: f64, lines: i32) -> i32 {
    let above = f64::from(lines - 1);
    match v {
        VAlign::Bottom => (step * above) as i32,
        VAlign::Middle => (step * (above / 2.0 - 0.3)) as i32,
        VAlign::Top => (step * -0.65) as i32,
    }
}

/// Two opposite corners of a `len` by `size` label at `anchor`, shifted
/// back by (`xo`, `yo`) along its own axes and turned by `rotation`.
pub fn label_corners(
    anchor: IVec2,
    rotation: Rotation,
    xo: i32,
    yo: i32,
    len: i32,
    size: i32,
) -> [IVec2; 2] {
    // Sums of four i32 terms always fit in i64.
    let (x, y) = (i64::from(anchor.x), i64::from(anchor.y));
    let (xo, yo, len, size) = (i64::from(xo), i64::from(yo), i64::from(len), i64::from(size));
    let corners = match rotation {
        Rotation::R0 => [(x - xo, y - yo), (x - xo + len, y - yo + size)],
        Rotation::R90 => [(x + yo, y - xo), (x + yo - size, y - xo + len)],
        Rotation::R180 => [(x + xo, y + yo), (x + xo - len, y + yo - size)],
        Rotation::R270 => [(x - yo, y + xo), (x - yo + size, y + xo - len)],
    };
    corners.map(|(x, y)| IVec2::new(clamp_i32(x), clamp_i32(y)))
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Escape a label for a PostScript string literal. Other bytes, 8-bit
/// ones included, are copied as they are.
pub fn escape_ps_string(text: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(text.len());
    for &byte in text {
        if matches!(byte, b'(' | b')' | b'\\') {
            escaped.push(b'\\');
        }
        escaped.push(byte);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_for_ten_point_text() {
        assert_eq!(extent_size(10), 180);
        assert_eq!(font_size(10), 194.0);
    }

    #[test]
    fn anchor_offsets() {
        assert_eq!(anchor_x(HAlign::Center, 101), 50);
        assert_eq!(anchor_x(HAlign::Right, 101), 101);
        assert_eq!(extent_y(VAlign::Middle, 180), 62);
        assert_eq!(extent_y(VAlign::Top, 180), 125);
    }

    #[test]
    fn baselines_for_two_lines() {
        let step = 194.0 * 1.35;
        assert_eq!(first_baseline(VAlign::Bottom, step, 2), 261);
        assert_eq!(first_baseline(VAlign::Middle, step, 2), 52);
        assert_eq!(first_baseline(VAlign::Top, step, 2), -170);
        assert_eq!(first_baseline(VAlign::Bottom, step, 1), 0);
    }

    #[test]
    fn corners_rotate_with_the_label() {
        let anchor = IVec2::new(100, 200);
        assert_eq!(
            label_corners(anchor, Rotation::R0, 10, 5, 50, 20),
            [IVec2::new(90, 195), IVec2::new(140, 215)]
        );
        assert_eq!(
            label_corners(anchor, Rotation::R90, 10, 5, 50, 20),
            [IVec2::new(105, 190), IVec2::new(85, 240)]
        );
        assert_eq!(
            label_corners(anchor, Rotation::R180, 10, 5, 50, 20),
            [IVec2::new(110, 205), IVec2::new(60, 185)]
        );
        assert_eq!(
            label_corners(anchor, Rotation::R270, 10, 5, 50, 20),
            [IVec2::new(95, 210), IVec2::new(115, 160)]
        );
    }

    #[test]
    fn corners_clamp_at_the_coordinate_limits() {
        let anchor = IVec2::new(i32::MAX, i32::MIN);
        assert_eq!(
            label_corners(anchor, Rotation::R0, -10, 5, i32::MAX, i32::MAX),
            [IVec2::new(i32::MAX, i32::MIN), IVec2::new(i32::MAX, -6)]
        );
    }

    #[test]
    fn escapes_parentheses_and_backslash() {
        assert_eq!(escape_ps_string(br"a(b)\c"), br"a\(b\)\\c");
        assert_eq!(escape_ps_string(b"plain"), b"plain");
        assert_eq!(escape_ps_string(b"4.7\xb5F"), b"4.7\xb5F");
    }
}
