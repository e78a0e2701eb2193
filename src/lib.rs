//! Terminal Pokédex
//!
//! Interactive lookup against PokeAPI with live autocomplete over the full
//! name catalog.

pub mod api;
pub mod app;
pub mod autocomplete;
pub mod catalog;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod logging;
pub mod lookup;
pub mod results;
pub mod widgets;
