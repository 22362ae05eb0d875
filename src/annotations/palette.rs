//! Fixed color palettes
//!
//! The creation menu offers exactly these swatches; there is no custom color
//! entry and no recolor operation after creation.

use super::AnnotationKind;

/// Highlight fill colors
pub const HIGHLIGHT_COLORS: [&str; 4] = ["#FFFF00", "#FF6B6B", "#4ECDC4", "#95E1D3"];

/// Underline stroke colors
pub const UNDERLINE_COLORS: [&str; 4] = ["#FF0000", "#0000FF", "#00FF00", "#FF00FF"];

/// Palette offered for a given annotation kind.
pub fn palette_for(kind: AnnotationKind) -> &'static [&'static str; 4] {
    match kind {
        AnnotationKind::Highlight => &HIGHLIGHT_COLORS,
        AnnotationKind::Underline => &UNDERLINE_COLORS,
    }
}
