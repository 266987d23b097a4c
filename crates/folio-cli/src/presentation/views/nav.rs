//! Navigation Row View
//!
//! One tab per section, centered, with the active tab highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use folio_engine::NavItemViewModel;

const TAB_GAP: u16 = 1;
const ACTIVE_BG: Color = Color::Rgb(0x5D, 0x9E, 0xCC);
const INACTIVE_BG: Color = Color::Rgb(0x7F, 0xB3, 0xD5);

pub struct NavView<'a> {
    items: &'a [NavItemViewModel],
}

impl<'a> NavView<'a> {
    pub fn new(items: &'a [NavItemViewModel]) -> Self {
        Self { items }
    }
}

fn tab_label(item: &NavItemViewModel) -> String {
    format!(" {} {} ", item.shortcut, item.label)
}

/// Screen cells occupied by each tab, in item order.
///
/// Shared by drawing and mouse hit-testing so both agree on positions.
pub fn tab_rects(items: &[NavItemViewModel], area: Rect) -> Vec<Rect> {
    let widths: Vec<u16> = items
        .iter()
        .map(|item| tab_label(item).chars().count() as u16)
        .collect();
    let gaps = TAB_GAP * (widths.len().saturating_sub(1) as u16);
    let total = widths.iter().sum::<u16>() + gaps;

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    widths
        .into_iter()
        .map(|width| {
            let rect = Rect::new(x, area.y, width, 1).intersection(area);
            x = x.saturating_add(width + TAB_GAP);
            rect
        })
        .collect()
}

impl<'a> Widget for NavView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for (item, rect) in self.items.iter().zip(tab_rects(self.items, area)) {
            if rect.width == 0 {
                continue;
            }
            let style = if item.active {
                Style::default()
                    .fg(Color::White)
                    .bg(ACTIVE_BG)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
                    .fg(Color::White)
                    .bg(INACTIVE_BG)
                    .add_modifier(Modifier::BOLD)
            };
            buf.set_stringn(rect.x, rect.y, tab_label(item), rect.width as usize, style);
        }
    }
}
