use folio_types::Section;
use serde::Serialize;

/// Transient state needed to render the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub active_section: Section,
    /// Only meaningful while `active_section` is Projects
    pub active_project: Option<String>,
}

/// User intents that mutate the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectSection(Section),
    SelectProject(String),
    ClearProject,
}

/// Sole writer of `ViewState`.
///
/// One controller per running session; dropping it discards the state.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
    clear_project_on_switch: bool,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a given section instead of About
    pub fn starting_at(section: Section) -> Self {
        Self {
            state: ViewState {
                active_section: section,
                active_project: None,
            },
            clear_project_on_switch: false,
        }
    }

    /// Drop the selected project whenever the section changes
    pub fn with_clear_project_on_switch(mut self, enabled: bool) -> Self {
        self.clear_project_on_switch = enabled;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn active_section(&self) -> Section {
        self.state.active_section
    }

    pub fn modal_open(&self) -> bool {
        self.state.active_project.is_some()
    }

    pub fn select_section(&mut self, section: Section) {
        tracing::debug!(from = %self.state.active_section, to = %section, "select section");
        self.state.active_section = section;
        if self.clear_project_on_switch {
            self.state.active_project = None;
        }
    }

    /// No check that Projects is active or that the name exists; the
    /// project list is the only caller in practice.
    pub fn select_project(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(project = %name, "select project");
        self.state.active_project = Some(name);
    }

    pub fn clear_project(&mut self) {
        if let Some(name) = self.state.active_project.take() {
            tracing::debug!(project = %name, "clear project");
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SelectSection(section) => self.select_section(section),
            Action::SelectProject(name) => self.select_project(name),
            Action::ClearProject => self.clear_project(),
        }
    }
}
