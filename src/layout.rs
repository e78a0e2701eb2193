//! Layout module for tracking UI component regions
//!
//! Records where each component was drawn during the last frame so mouse
//! events can be routed to the component under the pointer.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
