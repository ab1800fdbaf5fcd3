//! Selection-triggered dictionary lookups.
//!
//! A host reports text selections, pointer moves and scrolls to a
//! [`coordinator::LookupCoordinator`], which reads the selection aloud,
//! queries one or two translation sources and keeps stacked tooltips on the
//! host's [`tooltip::TooltipRenderer`] until the pointer leaves the
//! selection.

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod dismissal;
pub mod error;
pub mod logging;
pub mod models;
pub mod replay;
pub mod sources;
pub mod speech;
pub mod tooltip;
pub mod watcher;
