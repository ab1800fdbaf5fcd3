//! Scripted host events.
//!
//! A replay script is JSON lines, one event per line, tagged by `type`:
//!
//! ```text
//! {"type":"select","text":"hello","rect":{"left":10,"top":20,"right":60,"bottom":36}}
//! {"type":"settle"}
//! {"type":"scroll","x":0,"y":100}
//! {"type":"move","x":200,"y":400}
//! {"type":"wait","ms":250}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use serde::Deserialize;
use std::io::Write;
use std::time::Duration;

use crate::coordinator::LookupCoordinator;
use crate::error::{GlossError, Result};
use crate::models::{Point, Rect, ScrollOffset};
use crate::tooltip::TooltipBoard;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Pointer-up after selecting `text` inside `rect` (viewport coordinates)
    Select { text: String, rect: Rect },
    /// Pointer move in document coordinates
    Move { x: f64, y: f64 },
    Scroll { x: f64, y: f64 },
    Wait { ms: u64 },
    /// Wait for the current lookups and print the board
    Settle,
}

/// Parse a whole script, reporting the first bad line
pub fn parse_script(script: &str) -> Result<Vec<ReplayEvent>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| GlossError::Replay {
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// What a replay did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub selections: usize,
    pub ignored_selections: usize,
    pub dismissals: usize,
}

/// Feed `events` to `coordinator`, printing `board` to `out` at every
/// `settle` and once more at the end.
pub async fn run_replay<W: Write>(
    coordinator: &mut LookupCoordinator,
    events: Vec<ReplayEvent>,
    board: &TooltipBoard,
    out: &mut W,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    let mut scroll = ScrollOffset::default();

    for event in events {
        tracing::trace!(?event, "Replaying event");
        match event {
            ReplayEvent::Select { text, rect } => {
                match coordinator.on_pointer_up(&text, rect).await {
                    Some(_) => summary.selections += 1,
                    None => summary.ignored_selections += 1,
                }
            }
            ReplayEvent::Move { x, y } => {
                if coordinator.on_pointer_move(Point::new(x, y), scroll).await {
                    summary.dismissals += 1;
                    writeln!(out, "-- dismissed at {:.0},{:.0}", x, y)?;
                }
            }
            ReplayEvent::Scroll { x, y } => {
                scroll = ScrollOffset::new(x, y);
                coordinator.on_scroll(scroll).await;
            }
            ReplayEvent::Wait { ms } => {
                tokio::time::sleep(Duration::from_millis(ms)).await;
            }
            ReplayEvent::Settle => {
                coordinator.settle().await;
                write!(out, "{}", board)?;
            }
        }
    }

    coordinator.settle().await;
    write!(out, "{}", board)?;
    Ok(summary)
}
