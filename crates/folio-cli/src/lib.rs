// folio: a personal portfolio rendered in the terminal.
//
// Layering:
// - folio-types: closed Section set and content shapes
// - folio-engine: content store, view controller, pure renderer
// - this crate: CLI, config, logging and the ratatui front end
//
// The interactive TUI and `folio show` both draw from the same
// PageViewModel, so what the terminal shows and what the snapshot
// tests check cannot drift apart.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
