mod detail_lines;
pub mod results_events;
pub mod results_render;
mod results_scroll;

pub use detail_lines::{MAX_MOVES, detail_lines, wrap_text};
pub use results_render::{ERROR_MESSAGE, LOADING_MESSAGE, NOT_FOUND_MESSAGE};
pub use results_scroll::ResultsScroll;
