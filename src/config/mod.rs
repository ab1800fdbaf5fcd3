pub mod constants;
pub mod lookup;

pub use lookup::{Endpoints, LookupConfig, Profile};
