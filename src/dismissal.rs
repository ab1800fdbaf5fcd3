//! Pointer-containment dismissal.
//!
//! While armed, every pointer move is tested against the selection rectangle
//! (converted to document space with the scroll at test time, grown by a
//! small buffer). Leaving it tears the tooltips down.

use crate::config::constants::DISMISS_BUFFER_PX;
use crate::coordinator::Surface;
use crate::models::{Point, Rect, ScrollOffset};

/// True when `pointer` (document coordinates) is outside the buffered rect
pub fn pointer_left(rect: Rect, pointer: Point, scroll: ScrollOffset, buffer: f64) -> bool {
    !rect.to_document(scroll).expanded(buffer).contains(pointer)
}

#[derive(Debug, Clone)]
pub struct DismissalMonitor {
    buffer: f64,
    armed: bool,
}

impl Default for DismissalMonitor {
    fn default() -> Self {
        Self::new(DISMISS_BUFFER_PX)
    }
}

impl DismissalMonitor {
    pub fn new(buffer: f64) -> Self {
        Self {
            buffer,
            armed: false,
        }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns `true` if this move dismissed the tooltips
    pub fn on_pointer_move(
        &mut self,
        surface: &mut Surface,
        pointer: Point,
        scroll: ScrollOffset,
    ) -> bool {
        if !self.armed {
            return false;
        }

        let Some(rect) = surface.active().map(|a| a.event.rect()) else {
            self.armed = false;
            return false;
        };

        if !pointer_left(rect, pointer, scroll, self.buffer) {
            return false;
        }

        tracing::debug!(x = pointer.x, y = pointer.y, "Pointer left selection, dismissing");
        self.dismiss(surface)
    }

    /// Tear down unconditionally; a second call does nothing
    pub fn dismiss(&mut self, surface: &mut Surface) -> bool {
        self.armed = false;
        surface.teardown()
    }
}
