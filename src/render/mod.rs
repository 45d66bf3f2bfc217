//! EPS rendering for symbol elements
//!
//! This module is organized into submodules:
//! - `defaults`: Fixed sizes and settings
//! - `metrics`: Helvetica character widths
//! - `text`: Label sizing and anchor offsets
//! - `shapes`: The `Shape` trait and the `Element` enum
//! - `extent`: The bounding box scan
//! - `sort`: Drawing order
//! - `context`: Graphics state already written
//! - `eps`: Document generation

pub mod context;
pub mod defaults;
pub mod eps;
pub mod extent;
pub mod metrics;
pub mod shapes;
pub mod sort;
pub mod text;

use std::io::{self, Write};

pub use context::EmitterState;
pub use extent::{Extents, scan_extents};
pub use shapes::{Element, Shape};
pub use sort::{SortKey, SortableEntry, sort_entries};

/// Per-document settings.
#[derive(Debug, Clone)]
pub struct EpsOptions {
    /// Name written on the `%%BeginDocument` line.
    pub document_name: String,
    /// Blank space around the drawing, in mils.
    pub margin: i32,
}

impl EpsOptions {
    pub fn new(document_name: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            ..Self::default()
        }
    }
}

impl Default for EpsOptions {
    fn default() -> Self {
        Self {
            document_name: defaults::STDOUT_DOCUMENT.to_string(),
            margin: defaults::MARGIN,
        }
    }
}

/// Scan, order and write `elements` as one EPS document.
pub fn render(elements: &[Element], options: &EpsOptions, out: &mut dyn Write) -> io::Result<()> {
    let mut extents = scan_extents(elements);
    sort_entries(&mut extents.entries);
    eps::write_eps(elements, &extents, &options.document_name, options.margin, out)
}
