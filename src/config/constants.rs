/// Maximum selection length (in characters) that triggers a lookup
///
/// Longer selections are ignored silently: no lookup, no tooltip, no speech.
pub const MAX_SELECTION_CHARS: usize = 200;

/// Extra margin around the captured selection rectangle, in pixels
///
/// The pointer may wander this far outside the selection before the
/// tooltips are dismissed.
pub const DISMISS_BUFFER_PX: f64 = 5.0;

/// Vertical gap between the selection and the first tooltip, and between
/// stacked tooltips
pub const TOOLTIP_GAP_PX: f64 = 10.0;

/// Delay before a freshly inserted tooltip is measured and the stack re-laid out
pub const TOOLTIP_SETTLE_MS: u64 = 10;

/// Secondary-source race timeout used by the fast profile
pub const FAST_SECONDARY_TIMEOUT_MS: u64 = 1_500;

/// Secondary-source race timeout used by the patient profile
pub const PATIENT_SECONDARY_TIMEOUT_MS: u64 = 5_000;

/// Default HTTP request timeout for every source
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
