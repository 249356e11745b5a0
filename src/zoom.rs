//! The interactive zoom gesture.  The user either draws a selection
//! rectangle on the canvas or drags an existing one around by its
//! toolbar, and the two gestures are mutually exclusive: an explicit
//! state value enforces that only one can be in progress, and pointer
//! moves that arrive outside their gesture are dropped.  Overlapping
//! pointer streams (multi-touch, a second mouse) therefore cannot
//! tear the current selection.
//!
//! Committing hands the selection's two corners to the viewport once
//! and produces the zoomed view state; the selection itself never
//! leaves this module.

use bounds::{Bounds, Point};
use viewport::{ConfigError, ViewState, Viewport};

/// Which button a pointer-down arrived with.  Only the primary
/// button starts a gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerButton {
    /// The primary button (or a touch contact).
    Primary,
    /// Any other button.
    Secondary,
}

/// The gesture in progress, if any.  `Moving` remembers where the
/// drag started and the selection as it stood then, so each move
/// event re-derives the current selection from a fixed anchor instead
/// of accumulating deltas.
#[derive(Copy, Clone, Debug, PartialEq)]
enum GestureState {
    Idle,
    Selecting,
    Moving { origin: Point, anchor: Bounds },
}

/// Tracks the drag-select rectangle across pointer events and turns a
/// committed selection into a zoomed view state.
#[derive(Clone, Debug)]
pub struct ZoomGesture {
    state: GestureState,
    selection: Option<Bounds>,
}

impl ZoomGesture {
    /// A fresh tracker with no selection and no gesture in progress.
    pub fn new() -> ZoomGesture {
        ZoomGesture {
            state: GestureState::Idle,
            selection: None,
        }
    }

    /// The current selection rectangle, if one has been drawn.
    pub fn selection(&self) -> Option<Bounds> {
        self.selection
    }

    /// True while either gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.state != GestureState::Idle
    }

    /// Pointer-down on the canvas: starts drawing a new selection at
    /// `at`, replacing any previous one.  Ignored for non-primary
    /// buttons and while a move gesture holds the state.
    pub fn selection_start(&mut self, button: PointerButton, at: Point) {
        if button != PointerButton::Primary || self.state != GestureState::Idle {
            return;
        }
        self.state = GestureState::Selecting;
        self.selection = Some(Bounds::new(at, at));
    }

    /// Pointer-move on the canvas: drags the selection's free corner.
    /// A no-op unless a draw gesture is in progress.
    pub fn selection_drag(&mut self, at: Point) {
        if self.state != GestureState::Selecting {
            return;
        }
        if let Some(selection) = self.selection {
            self.selection = Some(selection.with_end(at));
        }
    }

    /// Pointer-up on the canvas: ends the draw gesture, leaving the
    /// selection normalized so its corners are ordered from here on.
    pub fn selection_end(&mut self) {
        if self.state == GestureState::Selecting {
            if let Some(selection) = self.selection {
                self.selection = Some(selection.as_normalized());
            }
            self.state = GestureState::Idle;
        }
    }

    /// Pointer-down on the selection's toolbar: starts dragging the
    /// whole selection.  Ignored for non-primary buttons, while a
    /// draw gesture holds the state, and when there is nothing to
    /// move.
    pub fn move_start(&mut self, button: PointerButton, at: Point) {
        if button != PointerButton::Primary || self.state != GestureState::Idle {
            return;
        }
        if let Some(anchor) = self.selection {
            self.state = GestureState::Moving { origin: at, anchor };
        }
    }

    /// Pointer-move during a move gesture: translates the anchored
    /// selection by the pointer's total offset from the drag origin.
    /// A no-op outside a move gesture.
    pub fn move_drag(&mut self, at: Point) {
        if let GestureState::Moving { origin, anchor } = self.state {
            let offset = Point::new(at.x - origin.x, at.y - origin.y);
            self.selection = Some(anchor.move_by(offset));
        }
    }

    /// Pointer-up ending a move gesture.
    pub fn move_end(&mut self) {
        if let GestureState::Moving { .. } = self.state {
            self.state = GestureState::Idle;
        }
    }

    /// Discards the selection and any gesture in progress.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
        self.selection = None;
    }

    /// Commits the selection: maps its corners through the given
    /// viewport and yields the zoomed view state, consuming the
    /// selection.  `Ok(None)` when nothing is selected; a degenerate
    /// zero-size selection surfaces as a configuration error from the
    /// view-state boundary.
    pub fn commit(&mut self, viewport: &Viewport) -> Result<Option<ViewState>, ConfigError> {
        let selection = match self.selection {
            Some(selection) => selection,
            None => return Ok(None),
        };
        let zoomed = viewport.zoom_to(&selection)?;
        self.state = GestureState::Idle;
        self.selection = None;
        Ok(Some(zoomed))
    }
}

impl Default for ZoomGesture {
    fn default() -> ZoomGesture {
        ZoomGesture::new()
    }
}
