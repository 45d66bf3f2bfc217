//! Extent scan: the first pass over the parsed elements.

use crate::log::debug;
use crate::types::BoundingBox;

use super::shapes::{Element, Shape};
use super::sort::SortableEntry;

/// Everything the emitter needs to know before it writes a byte.
#[derive(Debug, Clone)]
pub struct Extents {
    /// Union of every element's extent, stroke margins included.
    pub bounds: BoundingBox,
    /// One entry per drawable element, in input order until sorted.
    pub entries: Vec<SortableEntry>,
}

/// Measure every element and collect the drawing list.
pub fn scan_extents(elements: &[Element]) -> Extents {
    let mut bounds = BoundingBox::new();
    let mut entries = Vec::with_capacity(elements.len());

    for (position, element) in elements.iter().enumerate() {
        element.expand_bounds(&mut bounds);
        entries.push(SortableEntry {
            key: element.sort_key(),
            record: element.record(),
            element: position,
        });
    }

    debug!(
        "scanned {} elements, bounds x {}..{} y {}..{}",
        entries.len(),
        bounds.min.x,
        bounds.max.x,
        bounds.min.y,
        bounds.max.y
    );
    Extents { bounds, entries }
}
