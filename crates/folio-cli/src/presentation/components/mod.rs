//! TUI Components
//!
//! Components encapsulate UI State + Input Logic + Render Logic.
//! Input handlers return an action instead of mutating the view state,
//! so the renderer stays the only place where the controller changes.

pub mod portfolio;

pub use portfolio::{PortfolioAction, PortfolioComponent};
