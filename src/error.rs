use thiserror::Error;

use crate::api::ApiError;

/// Errors that can stop pokedex from starting
#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("Failed to create PokeAPI client: {0}")]
    Client(#[from] ApiError),

    #[error("Failed to start lookup worker: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
