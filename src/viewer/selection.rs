//! Drag-selection state machine
//!
//! Tracks one pointer gesture over the page surface: Idle until a
//! pointer-down, Dragging while the button is held, Committed once a
//! release passes the minimum-size gate. The committed rectangle is frozen
//! until an annotation is created from it or the menu is dismissed.

use crate::annotations::Region;

use super::geometry::{passes_size_gate, region_from_corners, Point};

/// Vertical gap between a committed selection and the menu it opens.
pub const MENU_GAP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionState {
    Idle,
    Dragging { anchor: Point, current: Point },
    Committed { region: Region },
}

/// Result of finishing a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedSelection {
    /// The frozen, normalized rectangle
    pub region: Region,
    /// Where the creation menu anchors: horizontal midpoint of the
    /// rectangle, just below its bottom edge.
    pub menu_anchor: Point,
}

#[derive(Debug, Default)]
pub struct SelectionEngine {
    state: SelectionState,
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState::Idle
    }
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Idle,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    /// The live rectangle while a drag is in progress, already normalized.
    pub fn live_region(&self) -> Option<Region> {
        match self.state {
            SelectionState::Dragging { anchor, current } => {
                Some(region_from_corners(anchor, current))
            }
            _ => None,
        }
    }

    /// The frozen rectangle of a committed selection, if any.
    pub fn committed_region(&self) -> Option<Region> {
        match self.state {
            SelectionState::Committed { region } => Some(region),
            _ => None,
        }
    }

    /// Pointer-down on the page surface. Only starts a gesture from Idle;
    /// a stray press during a committed selection is ignored.
    pub fn begin(&mut self, at: Point) {
        if matches!(self.state, SelectionState::Idle) {
            self.state = SelectionState::Dragging {
                anchor: at,
                current: at,
            };
        }
    }

    /// Pointer-move while the button is down. Pure visual feedback; nothing
    /// is persisted.
    pub fn update(&mut self, to: Point) {
        if let SelectionState::Dragging { anchor, .. } = self.state {
            self.state = SelectionState::Dragging {
                anchor,
                current: to,
            };
        }
    }

    /// Pointer-up. Freezes the rectangle and reports where to open the
    /// creation menu if the gate passes; otherwise the gesture is silently
    /// discarded and the engine returns to Idle.
    pub fn finish(&mut self) -> Option<CommittedSelection> {
        let SelectionState::Dragging { anchor, current } = self.state else {
            return None;
        };

        let region = region_from_corners(anchor, current);
        if passes_size_gate(&region) {
            self.state = SelectionState::Committed { region };
            Some(CommittedSelection {
                region,
                menu_anchor: Point::new(
                    region.x + region.width / 2.0,
                    region.y + region.height + MENU_GAP,
                ),
            })
        } else {
            self.state = SelectionState::Idle;
            None
        }
    }

    /// Drop whatever gesture state exists. Used after annotation creation,
    /// menu dismissal, and on every page change, since coordinates are
    /// page-relative and stale across navigation.
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }
}
