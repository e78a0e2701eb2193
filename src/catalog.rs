//! Catalog index cache and suggestion filtering
//!
//! The catalog is the full list of names used for autocomplete. It is fetched
//! once per session and never refreshed.

mod catalog_state;
mod filter;

pub use catalog_state::{CatalogState, CatalogStatus};
pub use filter::{MAX_SUGGESTIONS, filter_suggestions};
