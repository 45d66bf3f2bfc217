//! Parse symbol records into elements

use std::ops::Range;

use glam::IVec2;
use pest::Parser;

use crate::ast::*;
use crate::errors::ParseError;
use crate::log::{debug, warn};
use crate::render::Element;
use crate::store::RecordStore;
use crate::{RecordParser, Rule};

/// Integer fields read from one line, with their byte ranges in that line.
#[derive(Debug, Default)]
struct Fields {
    values: Vec<i32>,
    spans: Vec<Range<usize>>,
}

impl Fields {
    /// Field `n`, or 0 when the line ran out of integers first.
    fn get(&self, n: usize) -> i32 {
        self.values.get(n).copied().unwrap_or(0)
    }

    fn point(&self, n: usize) -> IVec2 {
        IVec2::new(self.get(n), self.get(n + 1))
    }
}

/// Parse every record in `store`.
///
/// Path and text records take their segment and label lines with them;
/// picture records skip the line naming the image. Unknown tags and blank
/// lines are passed over.
pub fn parse(store: &RecordStore) -> Result<Vec<Element>, ParseError> {
    let mut elements: Vec<Element> = Vec::new();
    let mut index = 0;

    while index < store.len() {
        let Some(&tag) = store.lines()[index].first() else {
            index += 1;
            continue;
        };
        let tag = char::from(tag);

        let mut consumed = 0;
        match tag {
            'L' => {
                let f = read_fields(store, index, Rule::record)?;
                elements.push(
                    Line {
                        record: index,
                        from: f.point(0),
                        to: f.point(2),
                        color: f.get(4),
                        width: f.get(5),
                    }
                    .into(),
                );
            }
            'H' => {
                let f = read_fields(store, index, Rule::record)?;
                consumed = sub_record_count(store, index, tag, &f, 12)?;
                let mut segments = Vec::with_capacity(consumed);
                for sub in index + 1..=index + consumed {
                    if let Some(segment) = parse_segment(store, sub)? {
                        segments.push(segment);
                    }
                }
                elements.push(
                    Path {
                        record: index,
                        color: f.get(0),
                        width: f.get(1),
                        cap_style: f.get(2),
                        dash_style: f.get(3),
                        dash_length: f.get(4),
                        dash_space: f.get(5),
                        fill_type: f.get(6),
                        fill_width: f.get(7),
                        fill_angles: (f.get(8), f.get(10)),
                        fill_pitches: (f.get(9), f.get(11)),
                        segments,
                    }
                    .into(),
                );
            }
            'G' => {
                debug!("record {}: picture not drawn", index);
                consumed = 1;
            }
            'B' => {
                let f = read_fields(store, index, Rule::record)?;
                elements.push(
                    Rect {
                        record: index,
                        corner: f.point(0),
                        size: f.point(2),
                        color: f.get(4),
                        width: f.get(5),
                    }
                    .into(),
                );
            }
            'V' => {
                let f = read_fields(store, index, Rule::record)?;
                elements.push(
                    Circle {
                        record: index,
                        center: f.point(0),
                        radius: f.get(2),
                        color: f.get(3),
                        width: f.get(4),
                    }
                    .into(),
                );
            }
            'A' => {
                let f = read_fields(store, index, Rule::record)?;
                elements.push(
                    Arc {
                        record: index,
                        center: f.point(0),
                        radius: f.get(2),
                        start_angle: f.get(3),
                        sweep_angle: f.get(4),
                        color: f.get(5),
                        width: f.get(6),
                    }
                    .into(),
                );
            }
            'T' => {
                let f = read_fields(store, index, Rule::record)?;
                consumed = sub_record_count(store, index, tag, &f, 8)?;
                let lines = store.lines()[index + 1..=index + consumed].to_vec();
                elements.push(
                    Text {
                        record: index,
                        anchor: f.point(0),
                        color: f.get(2),
                        size: f.get(3),
                        visible: f.get(4) != 0,
                        show: ShowNameValue::from_code(f.get(5)),
                        angle: f.get(6),
                        alignment: f.get(7),
                        lines,
                    }
                    .into(),
                );
            }
            'N' | 'U' | 'P' => {
                let kind = match tag {
                    'N' => NetKind::Net,
                    'U' => NetKind::Bus,
                    _ => NetKind::Pin,
                };
                let f = read_fields(store, index, Rule::record)?;
                elements.push(
                    Net {
                        record: index,
                        kind,
                        from: f.point(0),
                        to: f.point(2),
                        color: f.get(4),
                    }
                    .into(),
                );
            }
            _ => {
                debug!("record {}: ignoring '{}'", index, tag);
            }
        }

        index += 1 + consumed;
    }

    debug!("parsed {} elements from {} records", elements.len(), store.len());
    Ok(elements)
}

/// Parse one path segment line. Blank lines yield nothing.
fn parse_segment(store: &RecordStore, index: usize) -> Result<Option<PathSegment>, ParseError> {
    let Some(&op) = store.lines()[index].first() else {
        return Ok(None);
    };
    let op = char::from(op);
    let segment = match op {
        'Z' | 'z' => PathSegment::Close,
        'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' => {
            let f = read_fields(store, index, Rule::segment)?;
            let (a, point) = (f.get(0), f.point(0));
            match op {
                'M' => PathSegment::MoveTo(point),
                'm' => PathSegment::MoveBy(point),
                'L' => PathSegment::LineTo(point),
                'l' => PathSegment::LineBy(point),
                'H' => PathSegment::HorizontalTo(a),
                'h' => PathSegment::HorizontalBy(a),
                'V' => PathSegment::VerticalTo(a),
                _ => PathSegment::VerticalBy(a),
            }
        }
        other => {
            debug!("record {}: unknown path op '{}'", index, other);
            PathSegment::Unknown(other)
        }
    };
    Ok(Some(segment))
}

/// Read the integer fields of line `index` with grammar `rule`.
fn read_fields(store: &RecordStore, index: usize, rule: Rule) -> Result<Fields, ParseError> {
    let line = store.record_text(index);
    let pairs = match RecordParser::parse(rule, line) {
        Ok(pairs) => pairs,
        // Both rules accept any line that starts with a character.
        Err(e) => {
            warn!("record {}: no fields read: {}", index, e);
            return Ok(Fields::default());
        }
    };

    let mut fields = Fields::default();
    for pair in pairs.flatten().filter(|pair| pair.as_rule() == Rule::int) {
        let span = pair.as_span();
        let value = pair.as_str().parse::<i32>().map_err(|_| ParseError::IntegerOverflow {
            text: pair.as_str().to_string(),
            src: store.source_context().named_source(),
            span: (store.offset_of(index) + span.start(), span.end() - span.start()).into(),
        })?;
        fields.values.push(value);
        fields.spans.push(span.start()..span.end());
    }
    Ok(fields)
}

/// The number of following lines a record owns, from its field `field`.
/// Negative counts own nothing.
fn sub_record_count(
    store: &RecordStore,
    index: usize,
    tag: char,
    fields: &Fields,
    field: usize,
) -> Result<usize, ParseError> {
    let expected = usize::try_from(fields.get(field)).unwrap_or(0);
    let found = store.len() - index - 1;
    if expected <= found {
        return Ok(expected);
    }

    warn!("record {}: '{}' wants {} lines, {} left", index, tag, expected, found);
    let line_start = store.offset_of(index);
    let span = match fields.spans.get(field) {
        Some(range) => (line_start + range.start, range.len()),
        None => (line_start, store.record_text(index).len()),
    };
    Err(ParseError::TruncatedRecord {
        tag,
        expected,
        found,
        src: store.source_context().named_source(),
        span: span.into(),
    })
}
