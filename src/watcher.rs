use crate::config::constants::MAX_SELECTION_CHARS;
use crate::models::{Rect, SelectionEvent};

/// Turns pointer-up selections into [`SelectionEvent`]s
#[derive(Debug, Clone)]
pub struct SelectionWatcher {
    max_chars: usize,
}

impl Default for SelectionWatcher {
    fn default() -> Self {
        Self::new(MAX_SELECTION_CHARS)
    }
}

impl SelectionWatcher {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// `None` for empty or over-long selections; those are not errors
    pub fn on_pointer_up(&self, selected_text: &str, rect: Rect) -> Option<SelectionEvent> {
        let event = SelectionEvent::capture(selected_text, rect, self.max_chars);
        if event.is_none() && !selected_text.trim().is_empty() {
            tracing::debug!(
                chars = selected_text.trim().chars().count(),
                max = self.max_chars,
                "Ignoring over-long selection"
            );
        }
        event
    }
}
