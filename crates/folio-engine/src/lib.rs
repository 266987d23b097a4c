// Engine module - Content, state and rendering for the portfolio page
// This layer sits between the fixed content types and the CLI presentation

pub mod controller;
pub mod render;
pub mod store;

pub use controller::{Action, ViewController, ViewState};
pub use render::{
    ContactLineViewModel, EntryViewModel, ModalViewModel, NavItemViewModel, PageViewModel,
    PanelViewModel, ProjectLinkViewModel, SkillGroupViewModel, render,
};
pub use store::ContentStore;

// Façade API - Stable public interface for CLI layer

/// Render the page for a controller's current state
pub fn render_page(store: &ContentStore, controller: &ViewController) -> PageViewModel {
    render::render(store, controller.state())
}
