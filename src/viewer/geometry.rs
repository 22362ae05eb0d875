//! Page-local geometry for the selection gesture
//!
//! All coordinates are pixel offsets from the page view's top-left corner,
//! independent of viewport scroll.

use crate::annotations::Region;

/// Minimum committed selection width in pixels (strictly greater-than).
/// Together with the height gate this distinguishes an intentional drag
/// from an accidental click or jitter.
pub const MIN_SELECTION_WIDTH: f64 = 20.0;

/// Minimum committed selection height in pixels (strictly greater-than).
pub const MIN_SELECTION_HEIGHT: f64 = 10.0;

/// A point in page-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Normalize two drag endpoints into a region: top-left at the
/// component-wise minimum, extent the absolute difference. The result is
/// identical for all four drag directions.
pub fn region_from_corners(anchor: Point, current: Point) -> Region {
    Region::new(
        anchor.x.min(current.x),
        anchor.y.min(current.y),
        (current.x - anchor.x).abs(),
        (current.y - anchor.y).abs(),
    )
}

/// Whether a finished drag is large enough to keep. Failing the gate is not
/// an error; the selection is silently discarded.
pub fn passes_size_gate(region: &Region) -> bool {
    region.width > MIN_SELECTION_WIDTH && region.height > MIN_SELECTION_HEIGHT
}
