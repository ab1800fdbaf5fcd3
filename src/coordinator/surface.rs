use std::collections::BTreeSet;
use std::fmt;

use crate::models::{LookupResult, ScrollOffset, SelectionEvent, SourceId};
use crate::tooltip::{stack_position, SelectionHighlight, TooltipRenderer};

/// Generation token of a selection. Renders carrying an older token are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ActiveSelection {
    pub session: SessionId,
    pub event: SelectionEvent,
}

/// Page-side state of the current selection: the captured event, its
/// token, the open tooltip slots and the host's renderer and highlight.
pub struct Surface {
    active: Option<ActiveSelection>,
    scroll: ScrollOffset,
    open_slots: BTreeSet<usize>,
    tooltips: Box<dyn TooltipRenderer>,
    highlight: Box<dyn SelectionHighlight>,
}

impl Surface {
    pub fn new(tooltips: Box<dyn TooltipRenderer>, highlight: Box<dyn SelectionHighlight>) -> Self {
        Self {
            active: None,
            scroll: ScrollOffset::default(),
            open_slots: BTreeSet::new(),
            tooltips,
            highlight,
        }
    }

    /// Replace whatever was shown with a fresh selection
    pub fn begin(&mut self, session: SessionId, event: SelectionEvent) {
        self.remove_all();
        self.active = Some(ActiveSelection { session, event });
    }

    pub fn active(&self) -> Option<&ActiveSelection> {
        self.active.as_ref()
    }

    pub fn is_current(&self, session: SessionId) -> bool {
        self.active.as_ref().is_some_and(|a| a.session == session)
    }

    pub fn set_scroll(&mut self, scroll: ScrollOffset) {
        self.scroll = scroll;
    }

    /// Show `result` in its source's slot. Returns `false` (and draws
    /// nothing) when `session` is no longer current.
    pub fn render(&mut self, session: SessionId, result: &LookupResult) -> bool {
        let Some(active) = self.active.as_ref().filter(|a| a.session == session) else {
            return false;
        };

        let slot = result.source.slot();
        let anchor = active.event.rect();
        let heights = self.heights_above(slot);
        let position = stack_position(anchor, self.scroll, &heights);

        self.tooltips.show(slot, &result.rendered_text, position);
        self.open_slots.insert(slot);
        true
    }

    /// Re-lay out the open panels using their measured heights
    pub fn restack(&mut self, session: SessionId) -> bool {
        let Some(anchor) = self
            .active
            .as_ref()
            .filter(|a| a.session == session)
            .map(|a| a.event.rect())
        else {
            return false;
        };

        let mut heights = Vec::new();
        for slot in self.open_slots.iter().copied() {
            let position = stack_position(anchor, self.scroll, &heights);
            self.tooltips.reposition(slot, position);
            if let Some(height) = self.tooltips.rendered_height(slot) {
                heights.push(height);
            }
        }
        true
    }

    /// Remove every panel, forget the selection and clear the page
    /// highlight. Returns `false` when there was nothing to tear down.
    pub fn teardown(&mut self) -> bool {
        if self.active.is_none() && self.open_slots.is_empty() {
            return false;
        }

        self.remove_all();
        self.active = None;
        self.highlight.clear();
        true
    }

    fn heights_above(&self, slot: usize) -> Vec<f64> {
        self.open_slots
            .range(..slot)
            .filter_map(|s| self.tooltips.rendered_height(*s))
            .collect()
    }

    fn remove_all(&mut self) {
        for source in SourceId::ALL {
            self.tooltips.remove(source.slot());
        }
        self.open_slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LookupStatus, Rect};
    use crate::tooltip::TooltipBoard;

    fn surface() -> (Surface, TooltipBoard) {
        let board = TooltipBoard::new();
        let surface = Surface::new(Box::new(board.clone()), Box::new(board.clone()));
        (surface, board)
    }

    fn event() -> SelectionEvent {
        SelectionEvent::capture("hello", Rect::new(100.0, 100.0, 150.0, 120.0), 200).unwrap()
    }

    fn result(source: SourceId, text: &str) -> LookupResult {
        LookupResult {
            source,
            status: LookupStatus::Ok,
            rendered_text: text.to_string(),
        }
    }

    #[test]
    fn test_render_requires_current_session() {
        let (mut surface, board) = surface();
        surface.begin(SessionId(1), event());
        surface.begin(SessionId(2), event());

        assert!(!surface.render(SessionId(1), &result(SourceId::Primary, "stale")));
        assert!(board.is_empty());

        assert!(surface.render(SessionId(2), &result(SourceId::Primary, "fresh")));
        assert_eq!(board.panel(0).unwrap().text, "fresh");
    }

    #[test]
    fn test_restack_places_secondary_under_primary() {
        let (mut surface, board) = surface();
        let session = SessionId(1);
        surface.begin(session, event());

        surface.render(session, &result(SourceId::Secondary, "second"));
        surface.render(session, &result(SourceId::Primary, "first"));
        surface.restack(session);

        let primary = board.panel(0).unwrap();
        let secondary = board.panel(1).unwrap();
        assert_eq!(primary.position.top, 130.0);
        assert_eq!(
            secondary.position.top,
            130.0 + primary.height + 10.0
        );
    }

    #[test]
    fn test_lone_secondary_takes_top_position() {
        let (mut surface, board) = surface();
        let session = SessionId(1);
        surface.begin(session, event());

        surface.render(session, &result(SourceId::Secondary, "only"));
        surface.restack(session);
        assert_eq!(board.panel(1).unwrap().position.top, 130.0);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let (mut surface, board) = surface();
        let session = SessionId(1);
        surface.begin(session, event());
        surface.render(session, &result(SourceId::Primary, "x"));

        assert!(surface.teardown());
        assert!(!surface.teardown());
        assert!(board.is_empty());
        assert!(surface.active().is_none());
        assert_eq!(board.highlight_clears(), 1);
        assert!(!surface.render(session, &result(SourceId::Primary, "late")));
    }
}
