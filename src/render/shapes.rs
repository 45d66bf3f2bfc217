//! Shape behavior for each symbol element
//!
//! Every element type knows how to:
//! - Report the pen state it is drawn with (for ordering)
//! - Widen the drawing's bounding box
//! - Write itself as PostScript

use std::io;

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use crate::ast::{Arc, Circle, Line, Net, Path, PathSegment, Rect, Text};
use crate::types::{Alignment, BoundingBox, Rotation};

use super::defaults;
use super::eps::EpsWriter;
use super::metrics::text_width;
use super::sort::SortKey;
use super::text;

/// Common behavior for all elements
#[enum_dispatch]
pub trait Shape {
    /// Index of the element's own record in the input.
    fn record(&self) -> usize;

    /// Record tag, line width and color used to order drawing.
    fn sort_key(&self) -> SortKey;

    /// Widen `bounds` to cover everything this element draws.
    fn expand_bounds(&self, bounds: &mut BoundingBox);

    /// Write the element's drawing operators.
    fn render_eps(&self, eps: &mut EpsWriter<'_>) -> io::Result<()>;
}

/// A parsed drawable record.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line(Line),
    Path(Path),
    Rect(Rect),
    Circle(Circle),
    Arc(Arc),
    Text(Text),
    Net(Net),
}

impl Shape for Line {
    fn record(&self) -> usize {
        self.record
    }

    fn sort_key(&self) -> SortKey {
        SortKey { tag: 'L', size: self.width, color: self.color }
    }

    fn expand_bounds(&self, bounds: &mut BoundingBox) {
        bounds.expand(self.from, self.width);
        bounds.expand(self.to, self.width);
    }

    fn render_eps(&self, eps: &mut EpsWriter<'_>) -> io::Result<()> {
        eps.pen(self.color, self.width)?;
        writeln!(
            eps.out(),
            "{} {} moveto {} {} lineto stroke",
            self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}

impl Path {
    /// Walk the segments, handing each one and the pen position after it
    /// to `visit`. The pen starts at the origin.
    fn trace(&self, mut visit: impl FnMut(&PathSegment, IVec2)) {
        let mut pen = IVec2::ZERO;
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(to) | PathSegment::LineTo(to) => pen = to,
                PathSegment::MoveBy(by) | PathSegment::LineBy(by) => pen = pen.saturating_add(by),
                PathSegment::HorizontalTo(x) => pen.x = x,
                PathSegment::HorizontalBy(dx) => pen.x = pen.x.saturating_add(dx),
                PathSegment::VerticalTo(y) => pen.y = y,
                PathSegment::VerticalBy(dy) => pen.y = pen.y.saturating_add(dy),
                PathSegment::Close | PathSegment::Unknown(_) => {}
            }
            visit(segment, pen);
        }
    }
}

impl Shape for Path {
    fn record(&self) -> usize {
        self.record
    }

    fn sort_key(&self) -> SortKey {
        SortKey { tag: 'H', size: self.width, color: self.color }
    }

    fn expand_bounds(&self, bounds: &mut BoundingBox) {
        self.trace(|segment, pen| {
            if !matches!(segment, PathSegment::Close | PathSegment::Unknown(_)) {
                bounds.expand(pen, self.width);
            }
        });
    }

    fn render_eps(&self, eps: &mut EpsWriter<'_>) -> io::Result<()> {
        eps.pen(self.color, self.width)?;
        let paint = if self.is_filled() { "fill" } else { "stroke" };

        let mut result = Ok(());
        let mut unpainted = false;
        let out = eps.out();
        self.trace(|segment, pen| {
            if result.is_err() {
                return;
            }
            result = match *segment {
                PathSegment::MoveTo(to) => writeln!(out, "{} {} moveto", to.x, to.y),
                PathSegment::MoveBy(by) => writeln!(out, "{} {} rmoveto", by.x, by.y),
                PathSegment::LineTo(to) => writeln!(out, "{} {} lineto", to.x, to.y),
                PathSegment::LineBy(by) => writeln!(out, "{} {} rlineto", by.x, by.y),
                PathSegment::HorizontalTo(x) => writeln!(out, "{} {} lineto", x, pen.y),
                PathSegment::HorizontalBy(dx) => writeln!(out, "{} 0 rlineto", dx),
                PathSegment::VerticalTo(y) => writeln!(out, "{} {} lineto", pen.x, y),
                PathSegment::VerticalBy(dy) => writeln!(out, "0 {} rlineto", dy),
                PathSegment::Close => writeln!(out, "closepath {}", paint),
                PathSegment::Unknown(_) => return,
            };
            unpainted = !matches!(segment, PathSegment::Close);
        });
        result?;

        // An open path is still outlined.
        if unpainted {
            writeln!(out, "stroke")?;
        }
        Ok(())
    }
}

impl Shape for Rect {
    fn record(&self) -> usize {
        self.record
    }

    fn sort_key(&self) -> SortKey {
        SortKey { tag: 'B', size: self.width, color: self.color }
    }

    fn expand_bounds(&self, bounds: &mut BoundingBox) {
        bounds.expand(self.corner, self.width);
        bounds.expand(self.corner.saturating_add(self.size), self.width);
    }

    fn render_eps(&self, eps: &mut EpsWriter<'_>) -> io::Result<()> {
        eps.pen(self.color, self.width)?;
        let IVec2 { x, y } = self.corner;
        let IVec2 { x: w, y: h } = self.size;
        writeln!(
            eps.out(),
            "{x} {y} moveto {w} 0 rlineto 0 {h} rlineto {} 0 rlineto closepath stroke",
            -i64::from(w)
        )
    }
}

impl Shape for Circle {
    fn record(&self) -> usize {
        self.record
    }

    fn sort_key(&self) -> SortKey {
        SortKey { tag: 'V', size: self.width, color: self.color }
    }

    fn expand_bounds(&self, bounds: &mut BoundingBox) {
        let r = IVec2::splat(self.radius);
        bounds.expand(self.center.saturating_sub(r), self.width);
        bounds.expand(self.center.saturating_add(r), self.width);
    }

    fn render_eps(&self, eps: &mut EpsWriter<'_>) -> io::Result<()> {
        eps.pen(self.color, self.width)?;
        writeln!(
            eps.out(),
            "newpath {} {} {} 0 360 arc stroke",
            self.center.x, self.center.y, self.radius
        )
    }
}

impl Shape for Arc {
    fn record(&self) -> usize {
        self.record
    }

    fn sort_key(&self) -> SortKey {
        SortKey { tag: 'A', size: self.width, color: self.color }
    }

    /// Measured as the whole circle the arc lies on.
    fn expand_bounds(&self, bounds: &mut BoundingBox) {
        let r = IVec2::splat(self.radius);
        bounds.expand(self.center.saturating_sub(r), self.width);
        bounds.expand(self.center.saturating_add(r), self.width);
    }

    fn render_eps(&self, eps: &mut EpsWriter<'_>) -> io::Result<()> {
        eps.pen(self.color, self.width)?;
        writeln!(
            eps.out(),
            "newpath {} {} {} {} {} arc stroke",
            self.center.x,
            self.center.y,
            self.radius,
            self.start_angle,
            i64::from(self.start_angle) + i64::from(self.sweep_angle)
        )
    }
}

impl Shape for Text {
    fn record(&self) -> usize {
        self.record
    }

    fn sort_key(&self) -> SortKey {
        SortKey { tag: 'T', size: self.size, color: self.color }
    }

    /// Every label line is measured at the same anchor; hidden text and
    /// angles other than right angles contribute nothing.
    fn expand_bounds(&self, bounds: &mut BoundingBox) {
        if !self.visible {
            return;
        }
        let Some(rotation) = Rotation::from_degrees(self.angle) else {
            return;
        };
        let size = text::extent_size(self.size);
        let alignment = Alignment::from_code(self.alignment);
        for label in self.shown_lines() {
            let len = text_width(label, size);
            let xo = text::anchor_x(alignment.h, len);
            let yo = text::extent_y(alignment.v, size);
            for corner in text::label_corners(self.anchor, rotation, xo, yo, len, size) {
                bounds.expand(corner, 0);
            }
        }
    }

    fn render_eps(&self, eps: &mut EpsWriter<'_>) -> io::Result<()> {
        if !self.visible {
            return Ok(());
        }
        let font_size = text::font_size(self.size);
        let step = font_size * defaults::LINE_SPACING;
        eps.pen(self.color, 0)?;
        eps.font(font_size)?;

        // Upside-down text is turned right way up by mirroring its anchor.
        let (angle, alignment) = if self.angle == 180 {
            (0, Alignment::from_code(8_i32.saturating_sub(self.alignment)))
        } else {
            (self.angle, Alignment::from_code(self.alignment))
        };
        let line_count = i32::try_from(self.lines.len()).unwrap_or(i32::MAX);
        let first = text::first_baseline(alignment.v, step, line_count);

        for (j, label) in self.shown_lines().enumerate() {
            let len = text_width(label, font_size as i32);
            let xo = text::anchor_x(alignment.h, len);
            let baseline = (f64::from(first) - step * j as f64) as i32;
            let out = eps.out();
            out.write_all(b"(")?;
            out.write_all(&text::escape_ps_string(label))?;
            writeln!(
                out,
                ") {} {} {} {} {} t",
                -i64::from(xo),
                baseline,
                angle,
                self.anchor.x,
                self.anchor.y
            )?;
        }
        Ok(())
    }
}

impl Shape for Net {
    fn record(&self) -> usize {
        self.record
    }

    fn sort_key(&self) -> SortKey {
        SortKey {
            tag: self.kind.tag(),
            size: defaults::NET_LINE_SIZE,
            color: self.color,
        }
    }

    fn expand_bounds(&self, bounds: &mut BoundingBox) {
        bounds.expand(self.from, defaults::NET_LINE_SIZE);
        bounds.expand(self.to, defaults::NET_LINE_SIZE);
    }

    fn render_eps(&self, eps: &mut EpsWriter<'_>) -> io::Result<()> {
        eps.pen(self.color, defaults::NET_LINE_WIDTH)?;
        writeln!(
            eps.out(),
            "{} {} moveto {} {} lineto stroke",
            self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}
