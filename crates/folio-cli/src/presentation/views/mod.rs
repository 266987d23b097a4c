//! TUI View Components
//!
//! Ratatui widgets over the engine's page view models.
//!
//! ## Design Principles:
//! - Views take a reference to a ViewModel (no ownership)
//! - NO state changes; layout helpers are shared with hit-testing
//! - Only map ViewModel data to Ratatui widgets

pub mod modal;
pub mod nav;
pub mod panel;
pub mod status_bar;

pub use modal::ModalView;
pub use nav::NavView;
pub use panel::PanelView;
pub use status_bar::{StatusBarModel, StatusBarView};

use folio_types::Section;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Something on screen that reacts to a mouse click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Section(Section),
    Project(String),
    Link(String),
    Dismiss,
}

pub fn title_view(title: &str) -> Paragraph<'_> {
    Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )
}
