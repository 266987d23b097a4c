//! Status Bar View Component
//!
//! Renders the bottom status bar with the last status message and the
//! keyboard shortcuts valid in the current view.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar contents for the current frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBarModel {
    pub message: Option<String>,
    /// (key, description) pairs, e.g. ("q", "quit")
    pub hints: Vec<(&'static str, &'static str)>,
}

pub struct StatusBarView<'a> {
    model: &'a StatusBarModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        if let Some(message) = &self.model.message {
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Cyan),
            ))
            .render(chunks[0], buf);
        }

        let mut spans = Vec::new();
        for (key, description) in &self.model.hints {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(*description));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
