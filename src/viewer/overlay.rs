//! Annotation overlay display list
//!
//! Pure function of (current page's annotation set, live selection) to a
//! scene of absolutely-positioned layers. The scene sits in exact pixel
//! alignment above the static page view; region coordinates are taken as
//! stored and never rescaled for zoom or scroll.

use crate::annotations::{Annotation, AnnotationKind, Region};

/// Fixed opacity for persisted marks
pub const ANNOTATION_OPACITY: f32 = 0.4;

/// Underline stroke thickness in pixels
pub const UNDERLINE_THICKNESS: f64 = 3.0;

/// Side length of the hover-revealed delete button
pub const DELETE_BUTTON_SIZE: f64 = 24.0;

/// How far the delete button sticks out past the region's top-right corner
pub const DELETE_BUTTON_OVERHANG: f64 = 8.0;

/// How a persisted annotation paints its region
#[derive(Debug, Clone, PartialEq)]
pub enum RegionPaint {
    /// Translucent fill across the whole region (highlight)
    Fill { color: String },
    /// Colored line along the region's bottom edge (underline)
    BottomEdge { color: String, thickness: f64 },
}

/// One persisted annotation as drawn
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationLayer {
    pub id: String,
    pub region: Region,
    pub paint: RegionPaint,
    pub opacity: f32,
    /// Hover-revealed hit area that triggers deletion of this annotation
    pub delete_hotspot: Region,
}

/// The complete overlay for one page
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayScene {
    /// Live selection rectangle, present only while a drag is in progress.
    /// Non-interactive: it must never intercept pointer events meant for
    /// the capture surface underneath.
    pub live_selection: Option<Region>,
    pub annotations: Vec<AnnotationLayer>,
}

fn delete_hotspot(region: &Region) -> Region {
    Region::new(
        region.x + region.width + DELETE_BUTTON_OVERHANG - DELETE_BUTTON_SIZE,
        region.y - DELETE_BUTTON_OVERHANG,
        DELETE_BUTTON_SIZE,
        DELETE_BUTTON_SIZE,
    )
}

fn layer_for(annotation: &Annotation) -> AnnotationLayer {
    let paint = match annotation.kind {
        AnnotationKind::Highlight => RegionPaint::Fill {
            color: annotation.color.clone(),
        },
        AnnotationKind::Underline => RegionPaint::BottomEdge {
            color: annotation.color.clone(),
            thickness: UNDERLINE_THICKNESS,
        },
    };

    AnnotationLayer {
        id: annotation.id.clone(),
        region: annotation.position,
        paint,
        opacity: ANNOTATION_OPACITY,
        delete_hotspot: delete_hotspot(&annotation.position),
    }
}

/// Build the overlay scene for one page.
pub fn build_overlay(annotations: &[Annotation], live_selection: Option<Region>) -> OverlayScene {
    OverlayScene {
        live_selection: live_selection.filter(Region::has_positive_area),
        annotations: annotations.iter().map(layer_for).collect(),
    }
}
