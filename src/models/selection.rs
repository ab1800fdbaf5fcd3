use super::geometry::Rect;

/// A completed text selection, captured on pointer-up.
///
/// Immutable once captured: the text is trimmed and non-empty, the
/// rectangle is in viewport coordinates at capture time.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    text: String,
    rect: Rect,
}

impl SelectionEvent {
    /// Trim `raw` and accept it when it holds between 1 and `max_chars`
    /// characters.
    pub fn capture(raw: &str, rect: Rect, max_chars: usize) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() || text.chars().count() > max_chars {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            rect,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}
