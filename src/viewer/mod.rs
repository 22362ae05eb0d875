//! Viewer session engine
//!
//! The client-side core of the annotation subsystem: a drag-selection state
//! machine over the page surface, a pure display-list overlay, the creation
//! menu, clamped page navigation, and the store-client capability the whole
//! thing persists through. Single-threaded and event-driven; store calls
//! suspend the triggering operation but the in-memory state is only touched
//! once a call resolves, and only if it still targets the active page.

pub mod controller;
pub mod geometry;
pub mod menu;
pub mod navigator;
pub mod overlay;
pub mod selection;
pub mod store;

pub use controller::{DocumentContext, Notification, NotificationLevel, ViewerSession};
pub use geometry::{Point, MIN_SELECTION_HEIGHT, MIN_SELECTION_WIDTH};
pub use menu::{CreationMenu, Swatch};
pub use navigator::PageNavigator;
pub use overlay::{build_overlay, OverlayScene};
pub use selection::{SelectionEngine, SelectionState};
pub use store::{AnnotationStore, HttpAnnotationStore, SessionProvider, StoreError};
