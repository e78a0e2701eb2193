//! Detail lookup
//!
//! The sequential fetch pipeline, the records it assembles, the request
//! generation bookkeeping that discards stale results, and the background
//! worker that runs network calls off the UI thread.

pub mod description;
pub mod detail;
pub mod evolution;
mod lookup_state;
pub mod pipeline;
pub mod worker;

pub use detail::{BaseStat, EvolutionStage, PokemonDetail, TypeMatchups};
pub use lookup_state::{LookupState, ResultView};
pub use pipeline::{LookupOutcome, run_lookup};
