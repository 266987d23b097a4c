//! Portfolio Component (Page-level)
//!
//! Owns UI-only state (project cursor, status message, click targets),
//! maps terminal input to actions and draws the page.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
};

use folio_engine::{Action, PageViewModel, PanelViewModel};
use folio_types::{ContactField, Section};

use crate::presentation::views::{
    ModalView, NavView, PanelView, StatusBarModel, StatusBarView, Target,
    modal::{dismiss_rect, modal_area},
    nav::tab_rects,
    panel::panel_targets,
    title_view,
};

/// Actions the component emits to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioAction {
    /// Mutate the view state
    Dispatch(Action),
    /// Open an external URL
    OpenLink(String),
    Quit,
}

pub struct PortfolioComponent {
    project_cursor: usize,
    status: Option<String>,
    last_section: Option<Section>,
    hits: Vec<(Rect, Target)>,
}

impl PortfolioComponent {
    pub fn new() -> Self {
        Self {
            project_cursor: 0,
            status: None,
            last_section: None,
            hits: Vec::new(),
        }
    }

    pub fn project_cursor(&self) -> usize {
        self.project_cursor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Handle keyboard input
    ///
    /// While the modal is open it captures everything except quit.
    pub fn handle_key(&mut self, key: KeyEvent, page: &PageViewModel) -> Option<PortfolioAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(PortfolioAction::Quit);
        }

        if page.modal.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') => {
                    Some(PortfolioAction::Dispatch(Action::ClearProject))
                }
                KeyCode::Char('q') => Some(PortfolioAction::Quit),
                _ => None,
            };
        }

        let active = page.active_section().unwrap_or_default();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(PortfolioAction::Quit),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(PortfolioAction::Dispatch(
                Action::SelectSection(active.next()),
            )),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(
                PortfolioAction::Dispatch(Action::SelectSection(active.previous())),
            ),
            KeyCode::Char(c) if c.is_ascii_digit() => Section::from_shortcut(c)
                .map(|section| PortfolioAction::Dispatch(Action::SelectSection(section))),
            code => self.handle_panel_key(code, &page.panel),
        }
    }

    fn handle_panel_key(&mut self, code: KeyCode, panel: &PanelViewModel) -> Option<PortfolioAction> {
        match panel {
            PanelViewModel::ProjectLinks { projects } => match code {
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.project_cursor + 1 < projects.len() {
                        self.project_cursor += 1;
                    }
                    None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.project_cursor = self.project_cursor.saturating_sub(1);
                    None
                }
                KeyCode::Enter => projects.get(self.project_cursor).map(|project| {
                    PortfolioAction::Dispatch(Action::SelectProject(project.name.clone()))
                }),
                _ => None,
            },
            PanelViewModel::ContactCard { lines } => {
                let field = match code {
                    KeyCode::Char('g') => ContactField::GitHub,
                    KeyCode::Char('i') => ContactField::LinkedIn,
                    _ => return None,
                };
                lines
                    .iter()
                    .find(|line| line.field == field)
                    .and_then(|line| line.href.clone())
                    .map(PortfolioAction::OpenLink)
            }
            _ => None,
        }
    }

    /// Handle a mouse event using the click targets of the last frame
    pub fn handle_mouse(&mut self, mouse: MouseEvent, page: &PageViewModel) -> Option<PortfolioAction> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let position = Position::new(mouse.column, mouse.row);
        let target = self
            .hits
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, target)| target.clone())?;

        match target {
            Target::Section(section) => {
                Some(PortfolioAction::Dispatch(Action::SelectSection(section)))
            }
            Target::Project(name) => {
                if let PanelViewModel::ProjectLinks { projects } = &page.panel
                    && let Some(idx) = projects.iter().position(|p| p.name == name)
                {
                    self.project_cursor = idx;
                }
                Some(PortfolioAction::Dispatch(Action::SelectProject(name)))
            }
            Target::Link(url) => Some(PortfolioAction::OpenLink(url)),
            Target::Dismiss => Some(PortfolioAction::Dispatch(Action::ClearProject)),
        }
    }

    /// Render the page
    ///
    /// Layout: [Title | gap | Nav | Panel | Status Bar], modal on top.
    pub fn render(&mut self, f: &mut Frame, page: &PageViewModel) {
        let active = page.active_section().unwrap_or_default();
        if self.last_section != Some(active) {
            self.last_section = Some(active);
            self.project_cursor = 0;
        }
        // Keep the cursor on an existing project
        if let PanelViewModel::ProjectLinks { projects } = &page.panel {
            self.project_cursor = self.project_cursor.min(projects.len().saturating_sub(1));
        }

        let area = f.area();
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

        f.render_widget(title_view(&page.title), chunks[0]);
        f.render_widget(NavView::new(&page.nav), chunks[2]);
        f.render_widget(
            PanelView::new(active.label(), &page.panel).with_project_cursor(self.project_cursor),
            chunks[3],
        );
        let status = self.status_model(page);
        f.render_widget(StatusBarView::new(&status), chunks[4]);

        self.hits.clear();
        match &page.modal {
            Some(modal) => {
                f.buffer_mut()
                    .set_style(area, Style::default().add_modifier(Modifier::DIM));
                let modal_rect = modal_area(area);
                f.render_widget(ModalView::new(modal), modal_rect);
                self.hits
                    .push((dismiss_rect(modal, modal_rect), Target::Dismiss));
            }
            None => {
                for (item, rect) in page.nav.iter().zip(tab_rects(&page.nav, chunks[2])) {
                    self.hits.push((rect, Target::Section(item.section)));
                }
                self.hits.extend(panel_targets(&page.panel, chunks[3]));
            }
        }
    }

    fn status_model(&self, page: &PageViewModel) -> StatusBarModel {
        let hints = if page.modal.is_some() {
            vec![("Esc", "close"), ("q", "quit")]
        } else {
            let mut hints = vec![("1-6", "section"), ("Tab", "next")];
            match &page.panel {
                PanelViewModel::ProjectLinks { .. } => {
                    hints.push(("j/k", "move"));
                    hints.push(("Enter", "details"));
                }
                PanelViewModel::ContactCard { .. } => {
                    hints.push(("g", "GitHub"));
                    hints.push(("i", "LinkedIn"));
                }
                _ => {}
            }
            hints.push(("q", "quit"));
            hints
        };

        StatusBarModel {
            message: self.status.clone(),
            hints,
        }
    }
}

impl Default for PortfolioComponent {
    fn default() -> Self {
        Self::new()
    }
}
