//! EPS generation

use std::io::{self, Write};

use crate::log::debug;
use crate::types::{BoundingBox, COLOR_MAP};

use super::context::EmitterState;
use super::defaults;
use super::extent::Extents;
use super::shapes::{Element, Shape};

/// Output sink plus the graphics state already written to it.
pub struct EpsWriter<'a> {
    out: &'a mut dyn Write,
    state: EmitterState,
}

impl<'a> EpsWriter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            state: EmitterState::new(),
        }
    }

    /// The raw sink, for drawing operators.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Make `color` and `width` current, writing only what changed.
    pub fn pen(&mut self, color: i32, width: i32) -> io::Result<()> {
        if let Some(slot) = self.state.switch_color(color) {
            debug!("color {} -> slot {}", color, slot);
            writeln!(self.out, "{} setrgbcolor", COLOR_MAP[slot])?;
        }
        if let Some(width) = self.state.switch_line_width(width) {
            writeln!(self.out, "{} setlinewidth", width)?;
        }
        Ok(())
    }

    /// Make `size` the current Helvetica size, writing it only if it changed.
    pub fn font(&mut self, size: f64) -> io::Result<()> {
        if self.state.switch_font_size(size) {
            writeln!(
                self.out,
                "/{} findfont {} scalefont setfont",
                defaults::FONT_NAME,
                format_g(size)
            )?;
        }
        Ok(())
    }
}

/// Page scale: halved for drawings too big for a page at full size.
pub fn page_scale(bounds: &BoundingBox) -> f64 {
    if bounds.width() > i64::from(defaults::MAX_FULL_SCALE_WIDTH)
        || bounds.height() > i64::from(defaults::MAX_FULL_SCALE_HEIGHT)
    {
        0.5
    } else {
        1.0
    }
}

/// Mils to PostScript points at `scale`.
fn to_points(mils: i64, scale: f64) -> f64 {
    mils as f64 / 1000.0 * defaults::POINTS_PER_INCH * scale
}

/// Write a complete EPS document drawing `elements` in `extents` order.
pub fn write_eps(
    elements: &[Element],
    extents: &Extents,
    document_name: &str,
    margin: i32,
    out: &mut dyn Write,
) -> io::Result<()> {
    // Nothing drawn: an empty page at the origin rather than inverted extents.
    let drawing = if extents.bounds.is_empty() {
        BoundingBox::from_extents(0, 0, 0, 0)
    } else {
        extents.bounds
    };
    let scale = page_scale(&drawing);
    let page = drawing.padded(margin);
    debug!("page {}x{} mils at scale {}", page.width(), page.height(), scale);

    writeln!(out, "%!PS-Adobe-3.0 EPSF-3.0")?;
    writeln!(
        out,
        "%%BoundingBox: 0 0 {} {}",
        format_g(to_points(page.width(), scale)),
        format_g(to_points(page.height(), scale))
    )?;
    writeln!(out, "%%Pages: 1")?;
    writeln!(
        out,
        "save countdictstack mark newpath /showpage {{}} def /setpagedevice {{pop}} def"
    )?;
    writeln!(out, "%%EndProlog")?;
    writeln!(out, "%%Page: 1 1")?;
    writeln!(out, "%%BeginDocument: {}", document_name)?;
    writeln!(
        out,
        "{} dup scale",
        format_g(defaults::POINTS_PER_INCH / 1000.0 * scale)
    )?;
    writeln!(
        out,
        "{} {} translate",
        -i64::from(page.min.x),
        -i64::from(page.min.y)
    )?;
    writeln!(out, "/t {{ gsave translate rotate moveto show grestore }} bind def")?;

    let mut eps = EpsWriter::new(out);
    for entry in &extents.entries {
        elements[entry.element].render_eps(&mut eps)?;
    }

    writeln!(out, "showpage")?;
    writeln!(out, "%%EndDocument")?;
    writeln!(out, "%%Trailer")?;
    writeln!(out, "cleartomark countdictstack exch sub {{ end }} repeat restore")?;
    writeln!(out, "%%EOF")?;
    out.flush()
}

/// Format a real number the way C's `%g` does: six significant digits,
/// trailing zeros dropped, exponent form outside 1e-4..1e6.
pub fn format_g(value: f64) -> String {
    const PRECISION: i32 = 6;
    if value == 0.0 || !value.is_finite() {
        return if value == 0.0 { "0".to_string() } else { value.to_string() };
    }

    // Round to the requested significant digits first; that decides the exponent.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_g_matches_printf() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(75.60000000000001), "75.6");
        assert_eq!(format_g(3.6000000000000005), "3.6");
        assert_eq!(format_g(0.072), "0.072");
        assert_eq!(format_g(0.036), "0.036");
        assert_eq!(format_g(194.0), "194");
        assert_eq!(format_g(1234567.0), "1.23457e+06");
        assert_eq!(format_g(0.00001234), "1.234e-05");
        assert_eq!(format_g(999999.5), "1e+06");
        assert_eq!(format_g(-2.5), "-2.5");
        assert_eq!(format_g(100000.0), "100000");
    }

    #[test]
    fn pen_writes_only_changes() {
        let mut buf = Vec::new();
        {
            let mut eps = EpsWriter::new(&mut buf);
            eps.pen(2, 10).unwrap();
            eps.pen(2, 10).unwrap();
            eps.pen(2, 12).unwrap();
            eps.pen(40, 12).unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "0.8 0.0 0.0 setrgbcolor\n10 setlinewidth\n12 setlinewidth\n0.6 0.0 0.6 setrgbcolor\n"
        );
    }

    #[test]
    fn font_written_once_per_size() {
        let mut buf = Vec::new();
        {
            let mut eps = EpsWriter::new(&mut buf);
            eps.font(194.0).unwrap();
            eps.font(194.0).unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "/Helvetica findfont 194 scalefont setfont\n");
    }

    #[test]
    fn scale_halves_past_thresholds() {
        assert_eq!(page_scale(&BoundingBox::from_extents(0, 10_000, 0, 15_000)), 1.0);
        assert_eq!(page_scale(&BoundingBox::from_extents(0, 10_001, 0, 10)), 0.5);
        assert_eq!(page_scale(&BoundingBox::from_extents(0, 10, -1, 15_000)), 0.5);
    }
}
