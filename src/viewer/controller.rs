//! Viewer session controller
//!
//! Owns the working copy of the active page's annotation set and drives the
//! whole interaction loop: pointer gestures through the selection engine,
//! the creation menu lifecycle, store calls, and page navigation. Store
//! failures never propagate; they become user-visible notifications and the
//! in-memory state is left in a consistent shape (no partial mutation, no
//! optimistic removal).

use std::sync::Arc;

use crate::annotations::{Annotation, AnnotationDraft, AnnotationKind};

use super::geometry::Point;
use super::menu::CreationMenu;
use super::navigator::PageNavigator;
use super::overlay::{build_overlay, OverlayScene};
use super::selection::SelectionEngine;
use super::store::{AnnotationStore, SessionProvider, StoreError};

/// Document context handed down by the parent view. Page content itself is
/// opaque; only `pdf_id` and the page number scope the annotation set.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    pub pdf_id: String,
    pub pdf_name: String,
    pub pdf_url: String,
    pub page_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Transient user-visible message (the toast equivalent)
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Token for one in-flight page load. A response is applied only if its
/// ticket is still the latest load, so a slow fetch for a page the user has
/// already left cannot clobber the active page's view.
#[derive(Debug, Clone, Copy)]
pub struct PageLoadTicket {
    page: i64,
    epoch: u64,
}

impl PageLoadTicket {
    pub fn page(&self) -> i64 {
        self.page
    }
}

pub struct ViewerSession<S> {
    doc: DocumentContext,
    store: Arc<S>,
    session: Arc<dyn SessionProvider>,
    navigator: PageNavigator,
    selection: SelectionEngine,
    menu: Option<CreationMenu>,
    annotations: Vec<Annotation>,
    annotation_mode: bool,
    load_epoch: u64,
    notifications: Vec<Notification>,
}

impl<S: AnnotationStore> ViewerSession<S> {
    pub fn new(doc: DocumentContext, store: Arc<S>, session: Arc<dyn SessionProvider>) -> Self {
        let navigator = PageNavigator::new(doc.page_count);
        Self {
            doc,
            store,
            session,
            navigator,
            selection: SelectionEngine::new(),
            menu: None,
            annotations: Vec::new(),
            annotation_mode: false,
            load_epoch: 0,
            notifications: Vec::new(),
        }
    }

    pub fn document(&self) -> &DocumentContext {
        &self.doc
    }

    pub fn current_page(&self) -> i64 {
        self.navigator.current()
    }

    pub fn page_count(&self) -> i64 {
        self.navigator.page_count()
    }

    /// Working copy of the active page's annotation set
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn menu(&self) -> Option<&CreationMenu> {
        self.menu.as_ref()
    }

    pub fn annotation_mode(&self) -> bool {
        self.annotation_mode
    }

    pub fn set_annotation_mode(&mut self, enabled: bool) {
        self.annotation_mode = enabled;
        if !enabled {
            // A half-finished gesture is meaningless once the mode is off
            self.selection.reset();
            self.menu = None;
        }
    }

    /// Render state for the overlay layer
    pub fn overlay(&self) -> OverlayScene {
        build_overlay(&self.annotations, self.selection.live_region())
    }

    /// Messages accumulated since the last drain
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify_info(&mut self, message: &str) {
        self.notifications.push(Notification {
            level: NotificationLevel::Info,
            message: message.to_string(),
        });
    }

    fn notify_error(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.notifications.push(Notification {
            level: NotificationLevel::Error,
            message,
        });
    }

    // ---- pointer gesture ----

    /// Pointer-down on the page surface, in page-local coordinates.
    /// Ignored unless annotation mode is on. An open menu is dismissed
    /// first, dropping its frozen selection.
    pub fn pointer_down(&mut self, at: Point) {
        if !self.annotation_mode {
            return;
        }
        if self.menu.is_some() {
            self.dismiss_menu();
        }
        self.selection.begin(at);
    }

    pub fn pointer_move(&mut self, to: Point) {
        if !self.annotation_mode {
            return;
        }
        self.selection.update(to);
    }

    /// Pointer-up. Opens the creation menu when the drag passes the
    /// minimum-size gate; otherwise the gesture evaporates silently.
    pub fn pointer_up(&mut self) {
        if let Some(committed) = self.selection.finish() {
            self.menu = Some(CreationMenu::new(committed.menu_anchor));
        }
    }

    /// Close the menu and discard the frozen selection.
    pub fn dismiss_menu(&mut self) {
        self.menu = None;
        self.selection.reset();
    }

    // ---- annotation lifecycle ----

    /// Commit the frozen selection as an annotation of the chosen style.
    /// On failure the menu and selection stay put so the user can retry.
    pub async fn choose_style(&mut self, kind: AnnotationKind, color: &str) {
        let Some(region) = self.selection.committed_region() else {
            return;
        };

        // AuthRequired: aborted before any store call
        let Some(user_id) = self.session.current_user() else {
            self.notify_error("Sign in to save annotations".to_string());
            return;
        };

        let target_page = self.navigator.current();
        let draft = AnnotationDraft::new(&self.doc.pdf_id, target_page, kind, color, region);

        match self.store.create(&user_id, &draft).await {
            Ok(annotation) => {
                if self.navigator.current() == target_page {
                    self.annotations.push(annotation);
                }
                self.menu = None;
                self.selection.reset();
                self.notify_info("Annotation added");
            }
            Err(e) => {
                self.notify_error(format!("Failed to save annotation: {}", e));
            }
        }
    }

    /// Commit via one of the menu's offered swatches.
    pub async fn choose_swatch(&mut self, swatch: super::menu::Swatch) {
        self.choose_style(swatch.kind, swatch.color).await;
    }

    /// Delete a persisted annotation. The item is removed from the working
    /// set only after the store confirms; there is no optimistic removal.
    pub async fn delete_annotation(&mut self, id: &str) {
        let target_page = self.navigator.current();

        match self.store.delete(id).await {
            Ok(()) => {
                if self.navigator.current() == target_page {
                    self.annotations.retain(|a| a.id != id);
                }
                self.notify_info("Annotation deleted");
            }
            Err(e) => {
                self.notify_error(format!("Failed to delete annotation: {}", e));
            }
        }
    }

    // ---- page loads ----

    /// Start a load of the current page's annotation set. Bumps the load
    /// epoch (superseding any still-flying response) and clears gesture
    /// state, which is page-relative and stale across navigation.
    pub fn begin_page_load(&mut self) -> PageLoadTicket {
        self.load_epoch += 1;
        self.selection.reset();
        self.menu = None;
        PageLoadTicket {
            page: self.navigator.current(),
            epoch: self.load_epoch,
        }
    }

    /// Apply the outcome of a page load. A stale ticket is discarded; a
    /// failed load keeps the previous set (stale-but-present beats empty).
    pub fn apply_page_load(
        &mut self,
        ticket: PageLoadTicket,
        result: Result<Vec<Annotation>, StoreError>,
    ) {
        if ticket.epoch != self.load_epoch {
            tracing::debug!(page = ticket.page, "discarding superseded page load");
            return;
        }

        match result {
            Ok(set) => self.annotations = set,
            Err(e) => {
                self.notify_error(format!("Failed to load annotations: {}", e));
            }
        }
    }

    /// Fetch and display the current page's annotation set.
    pub async fn load_current_page(&mut self) {
        let ticket = self.begin_page_load();
        let result = self.store.list(&self.doc.pdf_id, ticket.page).await;
        self.apply_page_load(ticket, result);
    }

    pub async fn next_page(&mut self) {
        if self.navigator.next() {
            self.load_current_page().await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.navigator.prev() {
            self.load_current_page().await;
        }
    }

    pub async fn goto_page(&mut self, page: i64) {
        if self.navigator.goto(page) {
            self.load_current_page().await;
        }
    }
}
