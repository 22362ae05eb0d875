//! Annotation creation menu
//!
//! Transient contextual menu opened by a qualifying selection gesture.
//! Offers the fixed palette (four highlight fills, four underline colors)
//! plus a dismiss action; choosing a swatch commits the frozen selection
//! through the store.

use crate::annotations::{AnnotationKind, HIGHLIGHT_COLORS, UNDERLINE_COLORS};

use super::geometry::Point;

/// Half the rendered menu width; the menu is centered on its anchor by
/// shifting left this much.
pub const MENU_HALF_WIDTH: f64 = 100.0;

/// One selectable style in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub kind: AnnotationKind,
    pub color: &'static str,
}

/// An open creation menu, anchored below a committed selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreationMenu {
    /// Horizontal midpoint of the selection, MENU_GAP below its bottom edge
    pub anchor: Point,
}

impl CreationMenu {
    pub fn new(anchor: Point) -> Self {
        Self { anchor }
    }

    /// Top-left corner the menu renders at
    pub fn top_left(&self) -> Point {
        Point::new(self.anchor.x - MENU_HALF_WIDTH, self.anchor.y)
    }

    /// The fixed set of offered styles: highlights first, then underlines.
    pub fn swatches() -> Vec<Swatch> {
        let highlights = HIGHLIGHT_COLORS.iter().map(|&color| Swatch {
            kind: AnnotationKind::Highlight,
            color,
        });
        let underlines = UNDERLINE_COLORS.iter().map(|&color| Swatch {
            kind: AnnotationKind::Underline,
            color,
        });
        highlights.chain(underlines).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_palette() {
        let swatches = CreationMenu::swatches();
        assert_eq!(swatches.len(), 8);
        assert!(swatches[..4]
            .iter()
            .all(|s| s.kind == AnnotationKind::Highlight));
        assert!(swatches[4..]
            .iter()
            .all(|s| s.kind == AnnotationKind::Underline));
        assert_eq!(swatches[0].color, "#FFFF00");
        assert_eq!(swatches[4].color, "#FF0000");
    }

    #[test]
    fn test_menu_centers_on_anchor() {
        let menu = CreationMenu::new(Point::new(100.0, 100.0));
        assert_eq!(menu.top_left(), Point::new(0.0, 100.0));
    }
}
