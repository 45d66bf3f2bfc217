//! Typed symbol records.
//!
//! Each drawable record is parsed once into one of these structs; the
//! scanner and the emitter both read the same fields.

use glam::IVec2;

/// Which of the three net-like records a [`Net`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetKind {
    Net,
    Bus,
    Pin,
}

impl NetKind {
    pub fn tag(self) -> char {
        match self {
            NetKind::Net => 'N',
            NetKind::Bus => 'U',
            NetKind::Pin => 'P',
        }
    }
}

/// `L x1 y1 x2 y2 color width ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub record: usize,
    pub from: IVec2,
    pub to: IVec2,
    pub color: i32,
    pub width: i32,
}

/// `H color width capstyle dashstyle dashlength dashspace filltype
/// fillwidth angle1 pitch1 angle2 pitch2 num_lines`, followed by
/// `num_lines` segment records.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub record: usize,
    pub color: i32,
    pub width: i32,
    pub cap_style: i32,
    pub dash_style: i32,
    pub dash_length: i32,
    pub dash_space: i32,
    pub fill_type: i32,
    pub fill_width: i32,
    pub fill_angles: (i32, i32),
    pub fill_pitches: (i32, i32),
    pub segments: Vec<PathSegment>,
}

impl Path {
    /// Any non-zero fill type paints closed subpaths solid.
    pub fn is_filled(&self) -> bool {
        self.fill_type != 0
    }
}

/// One pen movement inside a path. Upper-case op-codes are absolute,
/// lower-case ones relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    MoveTo(IVec2),
    MoveBy(IVec2),
    LineTo(IVec2),
    LineBy(IVec2),
    HorizontalTo(i32),
    HorizontalBy(i32),
    VerticalTo(i32),
    VerticalBy(i32),
    Close,
    /// An op-code outside the path vocabulary; has no effect.
    Unknown(char),
}

/// `B x y width height color line_width ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub record: usize,
    pub corner: IVec2,
    pub size: IVec2,
    pub color: i32,
    pub width: i32,
}

/// `V x y radius color line_width ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub record: usize,
    pub center: IVec2,
    pub radius: i32,
    pub color: i32,
    pub width: i32,
}

/// `A x y radius start_angle sweep_angle color line_width ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub record: usize,
    pub center: IVec2,
    pub radius: i32,
    pub start_angle: i32,
    pub sweep_angle: i32,
    pub color: i32,
    pub width: i32,
}

/// How much of a `name=value` attribute label is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowNameValue {
    Both,
    ValueOnly,
    NameOnly,
}

impl ShowNameValue {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ShowNameValue::ValueOnly,
            2 => ShowNameValue::NameOnly,
            _ => ShowNameValue::Both,
        }
    }

    /// The visible part of `label`. Labels without `=` show whole.
    pub fn apply(self, label: &[u8]) -> &[u8] {
        let Some(eq) = label.iter().position(|&b| b == b'=') else {
            return label;
        };
        match self {
            ShowNameValue::ValueOnly => &label[eq + 1..],
            ShowNameValue::NameOnly => &label[..eq],
            ShowNameValue::Both => label,
        }
    }
}

/// `T x y color size visibility show_name_value angle alignment num_lines`,
/// followed by `num_lines` label records.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub record: usize,
    pub anchor: IVec2,
    pub color: i32,
    pub size: i32,
    pub visible: bool,
    pub show: ShowNameValue,
    pub angle: i32,
    pub alignment: i32,
    /// Raw label bytes, not necessarily UTF-8.
    pub lines: Vec<Vec<u8>>,
}

impl Text {
    /// The label lines as they are displayed.
    pub fn shown_lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(|line| self.show.apply(line))
    }
}

/// `N`, `U` or `P` with `x1 y1 x2 y2 color ...`; drawn at a fixed width.
#[derive(Debug, Clone, PartialEq)]
pub struct Net {
    pub record: usize,
    pub kind: NetKind,
    pub from: IVec2,
    pub to: IVec2,
    pub color: i32,
}
