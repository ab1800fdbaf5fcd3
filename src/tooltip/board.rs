use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Position, SelectionHighlight, TooltipRenderer};

const LINE_HEIGHT_PX: f64 = 20.0;
const VERTICAL_PADDING_PX: f64 = 20.0;
const CHARS_PER_LINE: usize = 40;

/// One panel currently on the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub slot: usize,
    pub text: String,
    pub position: Position,
    pub height: f64,
}

#[derive(Debug, Default)]
struct BoardState {
    panels: Vec<Panel>,
    highlight_clears: usize,
}

/// In-memory tooltip surface.
///
/// Cloning yields another handle onto the same board, so a host can keep one
/// handle for inspection while the coordinator owns another.
#[derive(Debug, Clone, Default)]
pub struct TooltipBoard {
    state: Arc<Mutex<BoardState>>,
}

/// Approximate laid-out height: wrapped lines plus padding
pub fn estimate_height(text: &str) -> f64 {
    let lines: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(CHARS_PER_LINE).max(1))
        .sum();
    lines.max(1) as f64 * LINE_HEIGHT_PX + VERTICAL_PADDING_PX
}

impl TooltipBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Panels ordered by slot
    pub fn panels(&self) -> Vec<Panel> {
        let mut panels = self.lock().panels.clone();
        panels.sort_by_key(|p| p.slot);
        panels
    }

    pub fn panel(&self, slot: usize) -> Option<Panel> {
        self.lock().panels.iter().find(|p| p.slot == slot).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().panels.is_empty()
    }

    /// How many times the selection highlight was cleared
    pub fn highlight_clears(&self) -> usize {
        self.lock().highlight_clears
    }
}

impl TooltipRenderer for TooltipBoard {
    fn show(&mut self, slot: usize, text: &str, position: Position) {
        let mut state = self.lock();
        state.panels.retain(|p| p.slot != slot);
        state.panels.push(Panel {
            slot,
            text: text.to_string(),
            position,
            height: estimate_height(text),
        });
    }

    fn reposition(&mut self, slot: usize, position: Position) {
        if let Some(panel) = self.lock().panels.iter_mut().find(|p| p.slot == slot) {
            panel.position = position;
        }
    }

    fn rendered_height(&self, slot: usize) -> Option<f64> {
        self.panel(slot).map(|p| p.height)
    }

    fn remove(&mut self, slot: usize) {
        self.lock().panels.retain(|p| p.slot != slot);
    }
}

impl SelectionHighlight for TooltipBoard {
    fn clear(&mut self) {
        self.lock().highlight_clears += 1;
    }
}

impl fmt::Display for TooltipBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let panels = self.panels();
        if panels.is_empty() {
            return writeln!(f, "(no tooltips)");
        }

        for panel in panels {
            writeln!(
                f,
                "[slot {} @ {:.0},{:.0}]",
                panel.slot, panel.position.left, panel.position.top
            )?;
            for line in panel.text.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}
