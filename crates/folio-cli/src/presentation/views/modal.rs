//! Project Detail Modal View
//!
//! Drawn last, over a cleared area in the middle of the screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use folio_engine::ModalViewModel;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 8;
const DISMISS_BG: Color = Color::Rgb(0xEF, 0x44, 0x44);

pub struct ModalView<'a> {
    model: &'a ModalViewModel,
}

impl<'a> ModalView<'a> {
    pub fn new(model: &'a ModalViewModel) -> Self {
        Self { model }
    }
}

/// Fixed-size rectangle centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Where the modal card is placed on a screen of `screen` size
pub fn modal_area(screen: Rect) -> Rect {
    centered_rect(MODAL_WIDTH, MODAL_HEIGHT, screen.inner(ratatui::layout::Margin::new(2, 1)))
}

fn dismiss_label(model: &ModalViewModel) -> String {
    format!("[ {} ]", model.dismiss_label)
}

/// Cells covered by the dismiss button inside a modal drawn at `area`
pub fn dismiss_rect(model: &ModalViewModel, area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if inner.height == 0 {
        return Rect::new(inner.x, inner.y, 0, 0);
    }
    let width = (dismiss_label(model).chars().count() as u16).min(inner.width);
    Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.bottom() - 1,
        width,
        1,
    )
}

impl<'a> Widget for ModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(Span::styled(
                format!(" {} ", self.model.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let body_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(2));
        Paragraph::new(self.model.body.as_str())
            .wrap(Wrap { trim: true })
            .render(body_area, buf);

        let button = dismiss_rect(self.model, area);
        Paragraph::new(dismiss_label(self.model))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(DISMISS_BG)
                    .add_modifier(Modifier::BOLD),
            )
            .render(button, buf);
    }
}
