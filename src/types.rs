//! Geometry and style primitives shared by the scanner and the emitter.
//!
//! Coordinates are integer mils (thousandths of an inch), the unit gEDA
//! symbol files use.

use std::fmt;

use glam::IVec2;

/// Axis-aligned bounding box in mils, only ever widened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: IVec2,
    pub max: IVec2,
}

impl BoundingBox {
    /// Sentinel extents; any real point widens past them.
    const UNSET: i32 = 1 << 30;

    /// An empty box (min beyond max) that the first point will replace.
    pub fn new() -> Self {
        Self {
            min: IVec2::splat(Self::UNSET),
            max: IVec2::splat(-Self::UNSET),
        }
    }

    /// A box from explicit extents.
    pub fn from_extents(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min: IVec2::new(min_x, min_y),
            max: IVec2::new(max_x, max_y),
        }
    }

    /// True until something has been added.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Widen to cover `point` with a square margin of half of `stroke`.
    ///
    /// The half width uses integer division, so odd strokes lose a unit.
    /// Margins stop at the edges of the coordinate range.
    pub fn expand(&mut self, point: IVec2, stroke: i32) {
        let half = IVec2::splat(stroke / 2);
        self.min = self.min.min(point.saturating_sub(half));
        self.max = self.max.max(point.saturating_add(half));
    }

    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y)
    }

    /// The box grown by `margin` on every side.
    pub fn padded(self, margin: i32) -> Self {
        Self {
            min: self.min.saturating_sub(IVec2::splat(margin)),
            max: self.max.saturating_add(IVec2::splat(margin)),
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Colors
// ============================================================================

/// An RGB triple with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {:.1} {:.1}", self.0, self.1, self.2)
    }
}

/// gEDA color indices mapped to printable colors.
///
/// The background maps to white and the "white" foreground to black so
/// symbols come out as dark ink on paper.
pub const COLOR_MAP: [Rgb; 17] = [
    Rgb(1.0, 1.0, 1.0), // background
    Rgb(0.0, 0.0, 0.0), // white
    Rgb(0.8, 0.0, 0.0), // red
    Rgb(0.0, 0.5, 0.0), // green
    Rgb(0.0, 0.0, 1.0), // blue
    Rgb(0.5, 0.5, 0.0), // yellow
    Rgb(0.0, 0.5, 0.5), // cyan
    Rgb(0.0, 0.5, 0.5),
    Rgb(0.8, 0.0, 0.0), // red
    Rgb(0.0, 0.5, 0.0), // green
    Rgb(0.0, 0.5, 0.0), // green
    Rgb(0.9, 0.4, 0.0), // orange
    Rgb(0.9, 0.4, 0.0), // orange
    Rgb(0.0, 0.5, 0.5), // cyan
    Rgb(0.6, 0.6, 0.6), // grey90
    Rgb(0.4, 0.4, 0.4), // grey
    Rgb(0.6, 0.0, 0.6), // other
];

/// Map a record's color code onto [`COLOR_MAP`]; anything out of range,
/// negative codes included, becomes the last ("other") entry.
pub fn color_slot(code: i32) -> usize {
    usize::try_from(code)
        .ok()
        .filter(|&slot| slot < COLOR_MAP.len())
        .unwrap_or(COLOR_MAP.len() - 1)
}

// ============================================================================
// Text placement
// ============================================================================

/// Horizontal anchor of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Bottom,
    Middle,
    Top,
}

/// gEDA's 0..=8 alignment code: `code / 3` picks the column, `code % 3` the
/// row, so 0 is lower left and 8 upper right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub h: HAlign,
    pub v: VAlign,
}

impl Alignment {
    /// Decode an alignment code. Codes outside 0..=8 fall back to the
    /// left column and bottom row on whichever axis they overflow.
    pub fn from_code(code: i32) -> Self {
        let h = match code / 3 {
            1 => HAlign::Center,
            2 => HAlign::Right,
            _ => HAlign::Left,
        };
        let v = match code % 3 {
            1 => VAlign::Middle,
            2 => VAlign::Top,
            _ => VAlign::Bottom,
        };
        Self { h, v }
    }
}

/// The four right-angle text rotations, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// `None` for any angle other than 0, 90, 180 or 270.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::R0),
            90 => Some(Rotation::R90),
            180 => Some(Rotation::R180),
            270 => Some(Rotation::R270),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_pads_by_half_stroke() {
        let mut bounds = BoundingBox::new();
        bounds.expand(IVec2::new(0, 0), 10);
        bounds.expand(IVec2::new(1000, 0), 10);
        assert_eq!(bounds, BoundingBox::from_extents(-5, 1005, -5, 5));
    }

    #[test]
    fn odd_stroke_truncates() {
        let mut bounds = BoundingBox::new();
        bounds.expand(IVec2::new(10, 10), 3);
        assert_eq!(bounds, BoundingBox::from_extents(9, 11, 9, 11));
    }

    #[test]
    fn new_box_is_empty_until_expanded() {
        let mut bounds = BoundingBox::new();
        assert!(bounds.is_empty());
        bounds.expand(IVec2::ZERO, 0);
        assert!(!bounds.is_empty());
        assert_eq!(bounds.width(), 0);
    }

    #[test]
    fn margins_stop_at_the_coordinate_limits() {
        let mut bounds = BoundingBox::new();
        bounds.expand(IVec2::new(i32::MAX, i32::MIN), 10);
        bounds.expand(IVec2::new(i32::MIN, 0), 10);
        assert_eq!(bounds, BoundingBox::from_extents(i32::MIN, i32::MAX, i32::MIN, 5));
        assert_eq!(bounds.width(), i64::from(u32::MAX));
        let page = bounds.padded(20);
        assert_eq!(page.min, IVec2::new(i32::MIN, i32::MIN));
        assert_eq!(page.max, IVec2::new(i32::MAX, 25));
    }

    #[test]
    fn never_narrows() {
        let mut bounds = BoundingBox::from_extents(-100, 100, -100, 100);
        bounds.expand(IVec2::new(5, 5), 2);
        assert_eq!(bounds, BoundingBox::from_extents(-100, 100, -100, 100));
    }

    #[test]
    fn color_codes_clamp_to_other() {
        assert_eq!(color_slot(0), 0);
        assert_eq!(color_slot(16), 16);
        assert_eq!(color_slot(17), 16);
        assert_eq!(color_slot(-1), 16);
        assert_eq!(COLOR_MAP[color_slot(2)].to_string(), "0.8 0.0 0.0");
    }

    #[test]
    fn alignment_grid() {
        assert_eq!(
            Alignment::from_code(0),
            Alignment { h: HAlign::Left, v: VAlign::Bottom }
        );
        assert_eq!(
            Alignment::from_code(4),
            Alignment { h: HAlign::Center, v: VAlign::Middle }
        );
        assert_eq!(
            Alignment::from_code(8),
            Alignment { h: HAlign::Right, v: VAlign::Top }
        );
        assert_eq!(Alignment::from_code(-1).v, VAlign::Bottom);
        assert_eq!(Alignment::from_code(12).h, HAlign::Left);
    }

    #[test]
    fn only_right_angles_rotate() {
        assert_eq!(Rotation::from_degrees(270), Some(Rotation::R270));
        assert_eq!(Rotation::from_degrees(45), None);
    }
}
