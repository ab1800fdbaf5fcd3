//! Floating translation panels anchored below the selection.
//!
//! The host page implements [`TooltipRenderer`] and [`SelectionHighlight`];
//! [`TooltipBoard`] is an in-memory implementation of both.

pub mod board;

use serde::Serialize;

use crate::config::constants::TOOLTIP_GAP_PX;
use crate::models::{Rect, ScrollOffset};

pub use board::{Panel, TooltipBoard};

/// Top-left corner of a panel in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Draws and removes tooltip panels, one per slot
pub trait TooltipRenderer: Send {
    /// Insert (or replace) the panel for `slot`
    fn show(&mut self, slot: usize, text: &str, position: Position);

    fn reposition(&mut self, slot: usize, position: Position);

    /// Height after layout, `None` if the slot is empty or not laid out yet
    fn rendered_height(&self, slot: usize) -> Option<f64>;

    /// Removing an empty slot is a no-op
    fn remove(&mut self, slot: usize);
}

/// The page's text-selection highlight
pub trait SelectionHighlight: Send {
    fn clear(&mut self);
}

/// Where a panel goes: below the anchor, pushed down by every open panel
/// above it.
pub fn stack_position(anchor: Rect, scroll: ScrollOffset, heights_above: &[f64]) -> Position {
    let top = heights_above
        .iter()
        .fold(anchor.bottom + scroll.y + TOOLTIP_GAP_PX, |top, height| {
            top + height + TOOLTIP_GAP_PX
        });

    Position {
        left: anchor.left + scroll.x,
        top,
    }
}
