//! Selection-triggered lookups.
//!
//! [`LookupCoordinator`] receives host events (pointer up, pointer move,
//! scroll), starts one lookup task per selection and keeps the tooltips of
//! the current selection on screen until the pointer leaves it.

pub mod plan;
pub mod session;
pub mod surface;

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::dismissal::DismissalMonitor;
use crate::models::{Point, Rect, ScrollOffset};
use crate::speech::Speaker;
use crate::tooltip::{SelectionHighlight, TooltipRenderer};
use crate::watcher::SelectionWatcher;

pub use plan::{LookupPlan, Strategy};
pub use session::{run_session, SharedSurface};
pub use surface::{ActiveSelection, SessionId, Surface};

pub struct LookupCoordinator {
    plan: Arc<LookupPlan>,
    speaker: Speaker,
    watcher: SelectionWatcher,
    monitor: DismissalMonitor,
    surface: SharedSurface,
    last_session: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl LookupCoordinator {
    pub fn new(
        plan: LookupPlan,
        speaker: Speaker,
        tooltips: Box<dyn TooltipRenderer>,
        highlight: Box<dyn SelectionHighlight>,
    ) -> Self {
        Self {
            plan: Arc::new(plan),
            speaker,
            watcher: SelectionWatcher::default(),
            monitor: DismissalMonitor::default(),
            surface: Arc::new(Mutex::new(Surface::new(tooltips, highlight))),
            last_session: 0,
            in_flight: None,
        }
    }

    pub fn with_max_selection_chars(mut self, max_chars: usize) -> Self {
        self.watcher = SelectionWatcher::new(max_chars);
        self
    }

    pub fn surface(&self) -> SharedSurface {
        Arc::clone(&self.surface)
    }

    pub fn is_armed(&self) -> bool {
        self.monitor.is_armed()
    }

    /// Handle the end of a text selection.
    ///
    /// Returns the new session, or `None` when the selection was ignored
    /// (empty or too long), in which case nothing changes.
    pub async fn on_pointer_up(&mut self, selected_text: &str, rect: Rect) -> Option<SessionId> {
        let event = self.watcher.on_pointer_up(selected_text, rect)?;

        self.abort_in_flight();
        self.last_session += 1;
        let session = SessionId(self.last_session);
        let query = event.text().to_string();

        self.surface.lock().await.begin(session, event);
        info!(session = %session, chars = query.chars().count(), "Selection captured");

        self.speaker.say(&query);

        self.in_flight = Some(tokio::spawn(run_session(
            Arc::clone(&self.plan),
            Arc::clone(&self.surface),
            session,
            query,
        )));
        self.monitor.arm();

        Some(session)
    }

    /// Returns `true` if the move dismissed the tooltips
    pub async fn on_pointer_move(&mut self, pointer: Point, scroll: ScrollOffset) -> bool {
        let surface = Arc::clone(&self.surface);
        let mut surface = surface.lock().await;
        surface.set_scroll(scroll);

        let dismissed = self.monitor.on_pointer_move(&mut surface, pointer, scroll);
        drop(surface);

        if dismissed {
            self.abort_in_flight();
        }
        dismissed
    }

    pub async fn on_scroll(&mut self, scroll: ScrollOffset) {
        self.surface.lock().await.set_scroll(scroll);
    }

    /// Remove all tooltips and forget the selection. A no-op when nothing
    /// is shown.
    pub async fn dismiss(&mut self) -> bool {
        let surface = Arc::clone(&self.surface);
        let dismissed = self.monitor.dismiss(&mut *surface.lock().await);
        self.abort_in_flight();
        dismissed
    }

    /// Wait for the current lookup task, if any, to finish
    pub async fn settle(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    tracing::error!("Lookup task failed: {}", e);
                }
            }
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                debug!("Aborting superseded lookup");
                task.abort();
            }
        }
    }
}

impl Drop for LookupCoordinator {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
