//! Annotation domain model
//!
//! Shared between the persistence layer, the REST surface, and the viewer
//! session engine.

mod palette;
mod types;

pub use palette::*;
pub use types::*;
