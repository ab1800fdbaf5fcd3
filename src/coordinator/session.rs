//! The lookup task spawned for one selection.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use super::plan::{LookupPlan, Strategy};
use super::surface::{SessionId, Surface};
use crate::models::{LookupRequest, LookupResult, SourceId};
use crate::sources::LookupError;

pub type SharedSurface = Arc<Mutex<Surface>>;

/// Query the sources of `plan` for `query` and render each outcome on
/// `surface`, as long as `session` is still the current one.
pub async fn run_session(
    plan: Arc<LookupPlan>,
    surface: SharedSurface,
    session: SessionId,
    query: String,
) {
    match plan.strategy() {
        Strategy::Single => {
            let result = if plan.primary_permits(&query) {
                resolve(&plan, request(&query, SourceId::Primary, 0)).await
            } else {
                gated_out(&plan)
            };
            present(&plan, &surface, session, &result).await;
        }
        Strategy::Chained => {
            let mut order = 0;
            if plan.primary_permits(&query) {
                let result = resolve(&plan, request(&query, SourceId::Primary, order)).await;
                if !present(&plan, &surface, session, &result).await {
                    return;
                }
                order += 1;
            } else {
                debug!(session = %session, "Query rejected by domain gate, skipping primary");
            }

            if !surface.lock().await.is_current(session) {
                return;
            }

            let result = resolve(&plan, request(&query, SourceId::Secondary, order)).await;
            present(&plan, &surface, session, &result).await;
        }
        Strategy::Parallel => {
            let primary = async {
                if plan.primary_permits(&query) {
                    let result = resolve(&plan, request(&query, SourceId::Primary, 0)).await;
                    present(&plan, &surface, session, &result).await;
                }
            };
            let secondary = async {
                let result = resolve(&plan, request(&query, SourceId::Secondary, 1)).await;
                present(&plan, &surface, session, &result).await;
            };
            tokio::join!(primary, secondary);
        }
    }

    debug!(session = %session, "Lookup session finished");
}

fn request(query: &str, source: SourceId, order: usize) -> LookupRequest {
    LookupRequest {
        query: query.to_string(),
        source,
        order,
    }
}

fn gated_out(plan: &LookupPlan) -> LookupResult {
    let label = plan
        .adapter(SourceId::Primary)
        .map(|adapter| adapter.label().to_string())
        .unwrap_or_default();
    LookupResult::settled(SourceId::Primary, &label, Err(LookupError::Empty))
}

/// Run one request to completion, racing it against the source's timeout
/// if it has one. The losing future is dropped.
async fn resolve(plan: &LookupPlan, request: LookupRequest) -> LookupResult {
    let Some(adapter) = plan.adapter(request.source) else {
        return LookupResult::settled(request.source, "", Err(LookupError::Empty));
    };
    let label = adapter.label();

    debug!(source = %request.source, order = request.order, label, "Issuing lookup");
    let lookup = adapter.lookup(&request.query);

    let result = match plan.race_limit(request.source) {
        None => LookupResult::settled(request.source, label, lookup.await),
        Some(limit) => match tokio::time::timeout(limit, lookup).await {
            Ok(outcome) => LookupResult::settled(request.source, label, outcome),
            Err(_) => {
                info!(
                    source = %request.source,
                    label,
                    timeout_ms = limit.as_millis() as u64,
                    "Lookup timed out"
                );
                LookupResult::timed_out(request.source, label)
            }
        },
    };

    debug!(source = %request.source, status = ?result.status, "Lookup settled");
    result
}

/// Render, wait for layout to settle, then restack. `false` means the
/// session went stale and nothing more should be drawn.
async fn present(
    plan: &LookupPlan,
    surface: &SharedSurface,
    session: SessionId,
    result: &LookupResult,
) -> bool {
    if !surface.lock().await.render(session, result) {
        debug!(session = %session, source = %result.source, "Dropping stale lookup result");
        return false;
    }

    settle(plan.settle_delay()).await;
    surface.lock().await.restack(session)
}

async fn settle(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
