//! Fixed sizes and settings (coordinates in mils unless noted)

/// Blank space added around the drawing on every side.
pub const MARGIN: i32 = 20;
/// Stroke width assumed for nets, buses and pins when measuring: one point.
pub const NET_LINE_SIZE: i32 = (1000.0 / 72.0) as i32;
/// Line width nets, buses and pins are drawn with.
pub const NET_LINE_WIDTH: i32 = 1;
/// Thinnest line width ever written.
pub const MIN_LINE_WIDTH: i32 = 1;
/// Drawings wider than this are printed at half size.
pub const MAX_FULL_SCALE_WIDTH: i32 = 10_000;
/// Drawings taller than this are printed at half size.
pub const MAX_FULL_SCALE_HEIGHT: i32 = 15_000;
/// PostScript points per inch; coordinates are thousandths of an inch.
pub const POINTS_PER_INCH: f64 = 72.0;
/// Text size (points) to mils, padded a little when measuring extents.
pub const TEXT_EXTENT_SCALE: f64 = 1.3;
/// Text size (points) to mils for the font actually set.
pub const TEXT_FONT_SCALE: f64 = 1.4;
/// Baseline-to-baseline distance as a multiple of the font size.
pub const LINE_SPACING: f64 = 1.35;
pub const FONT_NAME: &str = "Helvetica";
/// `%%BeginDocument` name when writing to standard output.
pub const STDOUT_DOCUMENT: &str = "stdout.eps";
