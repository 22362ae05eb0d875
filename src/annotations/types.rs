//! Core annotation types
//!
//! An annotation is a rectangular mark (highlight or underline) tied to a
//! specific page of a specific document. Geometry, kind and color are fixed
//! at creation; the only mutation an annotation ever sees is deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rectangular region in page-local pixel coordinates.
///
/// Origin is the page view's top-left corner, independent of viewport
/// scroll. Coordinates are fixed-scale: they are never recomputed for zoom
/// or responsive resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A persisted region must have positive extent in both axes.
    pub fn has_positive_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Kind of mark an annotation renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// Translucent fill over the region
    Highlight,
    /// Colored line along the region's bottom edge
    Underline,
}

impl AnnotationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationKind::Highlight => "highlight",
            AnnotationKind::Underline => "underline",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "highlight" => Some(AnnotationKind::Highlight),
            "underline" => Some(AnnotationKind::Underline),
            _ => None,
        }
    }

    /// Label stored when the caller provides none. No free-text entry is
    /// captured in the creation flow.
    pub fn default_label(&self) -> String {
        format!("{} annotation", self.as_str())
    }
}

/// A persisted annotation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    /// Store-assigned UUID
    pub id: String,
    /// Creating user, attribution only
    pub user_id: String,
    /// Owning document
    pub pdf_id: String,
    /// 1-indexed page within the document
    pub page_number: i64,
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    /// Hex color chosen from the fixed palette at creation time
    pub color: String,
    /// Kind-derived descriptive label
    pub text_content: String,
    pub position: Region,
    pub created_at: DateTime<Utc>,
}

/// Everything the caller supplies to create an annotation. The store assigns
/// `id` and `created_at`; the identity boundary supplies the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationDraft {
    pub pdf_id: String,
    pub page_number: i64,
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    pub position: Region,
}

impl AnnotationDraft {
    pub fn new(pdf_id: &str, page_number: i64, kind: AnnotationKind, color: &str, position: Region) -> Self {
        Self {
            pdf_id: pdf_id.to_string(),
            page_number,
            kind,
            color: color.to_string(),
            text_content: None,
            position,
        }
    }

    /// Label to persist: the explicit one if given, otherwise the kind's
    /// default.
    pub fn label(&self) -> String {
        self.text_content
            .clone()
            .unwrap_or_else(|| self.kind.default_label())
    }
}
