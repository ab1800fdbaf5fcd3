pub mod geometry;
pub mod lookup;
pub mod selection;

pub use geometry::{Point, Rect, ScrollOffset};
pub use lookup::{LookupRequest, LookupResult, LookupStatus, SourceId};
pub use selection::SelectionEvent;
