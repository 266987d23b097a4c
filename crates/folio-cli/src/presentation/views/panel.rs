//! Content Panel View
//!
//! Maps the active section's PanelViewModel to styled lines inside a
//! bordered card. Clickable rows (project names, contact links) are
//! exposed through `panel_targets` for mouse hit-testing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use folio_engine::PanelViewModel;

use super::Target;

const BADGE_BG: Color = Color::Rgb(0xBF, 0xDB, 0xFE);
const BADGE_FG: Color = Color::Rgb(0x1E, 0x40, 0xAF);
const LINK_FG: Color = Color::Rgb(0x25, 0x63, 0xEB);

pub struct PanelView<'a> {
    title: &'a str,
    model: &'a PanelViewModel,
    project_cursor: usize,
}

impl<'a> PanelView<'a> {
    pub fn new(title: &'a str, model: &'a PanelViewModel) -> Self {
        Self {
            title,
            model,
            project_cursor: 0,
        }
    }

    /// Highlighted row in the project list
    pub fn with_project_cursor(mut self, cursor: usize) -> Self {
        self.project_cursor = cursor;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.model {
            PanelViewModel::Paragraph { text } => vec![Line::from(text.as_str())],
            PanelViewModel::Bullets { items } => items
                .iter()
                .map(|item| Line::from(vec![Span::raw(" • "), Span::raw(item.as_str())]))
                .collect(),
            PanelViewModel::SkillGroups { groups } => {
                let mut lines = Vec::new();
                for (idx, group) in groups.iter().enumerate() {
                    if idx > 0 {
                        lines.push(Line::default());
                    }
                    lines.push(Line::from(Span::styled(
                        group.category.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                    let mut badges = Vec::new();
                    for badge in &group.badges {
                        if !badges.is_empty() {
                            badges.push(Span::raw(" "));
                        }
                        badges.push(Span::styled(
                            format!(" {} ", badge),
                            Style::default()
                                .fg(BADGE_FG)
                                .bg(BADGE_BG)
                                .add_modifier(Modifier::BOLD),
                        ));
                    }
                    lines.push(Line::from(badges));
                }
                lines
            }
            PanelViewModel::ProjectLinks { projects } => projects
                .iter()
                .enumerate()
                .map(|(idx, project)| {
                    let selected = idx == self.project_cursor;
                    let marker = if selected { "▸ " } else { "  " };
                    let mut style = Style::default()
                        .fg(LINK_FG)
                        .add_modifier(Modifier::BOLD);
                    if selected {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(project.name.as_str(), style),
                    ])
                })
                .collect(),
            PanelViewModel::ContactCard { lines } => lines
                .iter()
                .map(|line| {
                    let mut spans = vec![Span::raw(format!("{} ", line.glyph))];
                    match &line.href {
                        Some(href) => {
                            spans.push(Span::styled(
                                line.text.as_str(),
                                Style::default()
                                    .fg(LINK_FG)
                                    .add_modifier(Modifier::UNDERLINED),
                            ));
                            spans.push(Span::styled(
                                format!("  {}", href),
                                Style::default().fg(Color::DarkGray),
                            ));
                        }
                        None => spans.push(Span::raw(line.text.as_str())),
                    }
                    Line::from(spans)
                })
                .collect(),
            PanelViewModel::Entries { entries } => entries
                .iter()
                .map(|entry| {
                    Line::from(vec![
                        Span::styled(
                            format!("{}: ", entry.name),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(entry.value.as_str()),
                    ])
                })
                .collect(),
        }
    }
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
}

/// Area inside the card border where lines are drawn
pub fn panel_inner(area: Rect) -> Rect {
    card_block("").inner(area)
}

/// Panels with clickable rows keep one model line per screen row
fn wraps(model: &PanelViewModel) -> bool {
    !matches!(
        model,
        PanelViewModel::ProjectLinks { .. } | PanelViewModel::ContactCard { .. }
    )
}

/// Clickable rows of the panel, one per project or contact link.
///
/// These panels are drawn unwrapped, so line `idx` sits on row `idx`.
pub fn panel_targets(model: &PanelViewModel, area: Rect) -> Vec<(Rect, Target)> {
    let inner = panel_inner(area);
    let row = |idx: usize| {
        Rect::new(inner.x, inner.y.saturating_add(idx as u16), inner.width, 1).intersection(inner)
    };

    match model {
        PanelViewModel::ProjectLinks { projects } => projects
            .iter()
            .enumerate()
            .map(|(idx, project)| (row(idx), Target::Project(project.name.clone())))
            .filter(|(rect, _)| rect.height > 0)
            .collect(),
        PanelViewModel::ContactCard { lines } => lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                line.href
                    .as_ref()
                    .map(|href| (row(idx), Target::Link(href.clone())))
            })
            .filter(|(rect, _)| rect.height > 0)
            .collect(),
        _ => Vec::new(),
    }
}

impl<'a> Widget for PanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let paragraph = Paragraph::new(lines).block(card_block(self.title));
        if wraps(self.model) {
            paragraph.wrap(Wrap { trim: false }).render(area, buf);
        } else {
            paragraph.render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::{ContentStore, ViewController, render_page};
    use folio_types::Section;

    fn panel_at(section: Section) -> PanelViewModel {
        render_page(
            &ContentStore::portfolio(),
            &ViewController::starting_at(section),
        )
        .panel
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_link_targets_match_drawn_rows_when_narrow() {
        let model = panel_at(Section::Contact);
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        PanelView::new("Contact", &model).render(area, &mut buf);

        let targets = panel_targets(&model, area);
        assert_eq!(targets.len(), 2);
        for (rect, target) in targets {
            let text = row_text(&buf, rect.y);
            match target {
                Target::Link(url) if url.contains("github") => {
                    assert!(text.contains("GitHub"), "row {}: {}", rect.y, text)
                }
                Target::Link(url) if url.contains("linkedin") => {
                    assert!(text.contains("LinkedIn"), "row {}: {}", rect.y, text)
                }
                other => panic!("unexpected target {:?}", other),
            }
        }
    }

    #[test]
    fn test_project_targets_match_drawn_rows_when_narrow() {
        let model = panel_at(Section::Projects);
        let area = Rect::new(0, 0, 16, 10);
        let mut buf = Buffer::empty(area);
        PanelView::new("Projects", &model).render(area, &mut buf);

        let targets = panel_targets(&model, area);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].0.y, 1);
        assert_eq!(targets[1].0.y, 2);
        assert!(row_text(&buf, 1).contains("DevOps"));
        assert!(row_text(&buf, 2).contains("AWS"));
    }

    #[test]
    fn test_text_panels_still_wrap() {
        let model = panel_at(Section::About);
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        PanelView::new("About", &model).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("I am"));
        assert!(!row_text(&buf, 2).trim_matches(|c| c == '│' || c == ' ').is_empty());
    }
}
