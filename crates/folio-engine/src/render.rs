//! Renderer
//!
//! Pure mapping from (ContentStore, ViewState) to a page view model.
//! Views (TUI widgets, console text, JSON) only read these models.

use folio_types::{ContactField, NamedEntry, Section, SectionContent, TagGroup};
use serde::Serialize;
use std::fmt;

use crate::controller::ViewState;
use crate::store::ContentStore;

const DISMISS_LABEL: &str = "Close";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageViewModel {
    pub title: String,
    pub nav: Vec<NavItemViewModel>,
    pub panel: PanelViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ModalViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItemViewModel {
    pub section: Section,
    pub label: String,
    pub shortcut: char,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelViewModel {
    Paragraph { text: String },
    Bullets { items: Vec<String> },
    SkillGroups { groups: Vec<SkillGroupViewModel> },
    ProjectLinks { projects: Vec<ProjectLinkViewModel> },
    ContactCard { lines: Vec<ContactLineViewModel> },
    Entries { entries: Vec<EntryViewModel> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroupViewModel {
    pub category: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLinkViewModel {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLineViewModel {
    pub field: ContactField,
    pub glyph: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryViewModel {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalViewModel {
    pub title: String,
    pub body: String,
    pub dismiss_label: String,
}

impl PanelViewModel {
    pub fn kind(&self) -> &'static str {
        match self {
            PanelViewModel::Paragraph { .. } => "paragraph",
            PanelViewModel::Bullets { .. } => "bullets",
            PanelViewModel::SkillGroups { .. } => "skill_groups",
            PanelViewModel::ProjectLinks { .. } => "project_links",
            PanelViewModel::ContactCard { .. } => "contact_card",
            PanelViewModel::Entries { .. } => "entries",
        }
    }
}

impl PageViewModel {
    pub fn active_section(&self) -> Option<Section> {
        self.nav.iter().find(|item| item.active).map(|item| item.section)
    }
}

pub fn render(store: &ContentStore, state: &ViewState) -> PageViewModel {
    let active = state.active_section;

    let nav = store
        .sections()
        .map(|section| NavItemViewModel {
            section,
            label: section.label().to_string(),
            shortcut: section.shortcut(),
            active: section == active,
        })
        .collect();

    let modal = state.active_project.as_ref().map(|name| ModalViewModel {
        title: name.clone(),
        body: store.project(name).unwrap_or_default().to_string(),
        dismiss_label: DISMISS_LABEL.to_string(),
    });

    PageViewModel {
        title: store.title().to_string(),
        nav,
        panel: render_panel(active, store.get(active)),
        modal,
    }
}

fn render_panel(section: Section, content: &SectionContent) -> PanelViewModel {
    match (section, content) {
        (_, SectionContent::Text(text)) => PanelViewModel::Paragraph { text: text.clone() },
        (_, SectionContent::List(items)) => PanelViewModel::Bullets {
            items: items.clone(),
        },
        (_, SectionContent::GroupedTags(groups)) => PanelViewModel::SkillGroups {
            groups: groups.iter().map(skill_group).collect(),
        },
        (Section::Projects, SectionContent::NamedEntries(entries)) => {
            PanelViewModel::ProjectLinks {
                projects: entries
                    .iter()
                    .map(|entry| ProjectLinkViewModel {
                        name: entry.name.clone(),
                    })
                    .collect(),
            }
        }
        (Section::Contact, SectionContent::NamedEntries(entries)) => PanelViewModel::ContactCard {
            lines: contact_lines(entries),
        },
        (_, SectionContent::NamedEntries(entries)) => PanelViewModel::Entries {
            entries: entries
                .iter()
                .map(|entry| EntryViewModel {
                    name: entry.name.clone(),
                    value: entry.value.clone(),
                })
                .collect(),
        },
    }
}

fn skill_group(group: &TagGroup) -> SkillGroupViewModel {
    SkillGroupViewModel {
        category: group.category.clone(),
        badges: group.tags.clone(),
    }
}

fn contact_lines(entries: &[NamedEntry]) -> Vec<ContactLineViewModel> {
    ContactField::ALL
        .into_iter()
        .filter_map(|field| {
            let value = entries.iter().find(|entry| entry.name == field.key())?;
            let (text, href) = if field.is_link() {
                (field.key().to_string(), Some(value.value.clone()))
            } else {
                (value.value.clone(), None)
            };
            Some(ContactLineViewModel {
                field,
                glyph: field.glyph().to_string(),
                text,
                href,
            })
        })
        .collect()
}

impl fmt::Display for PageViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f)?;

        let nav: Vec<String> = self
            .nav
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label)
                } else {
                    item.label.clone()
                }
            })
            .collect();
        writeln!(f, "{}", nav.join("  "))?;
        writeln!(f)?;

        write!(f, "{}", self.panel)?;

        if let Some(modal) = &self.modal {
            writeln!(f)?;
            write!(f, "{}", modal)?;
        }

        Ok(())
    }
}

impl fmt::Display for PanelViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PanelViewModel::Paragraph { text } => writeln!(f, "{}", text),
            PanelViewModel::Bullets { items } => {
                for item in items {
                    writeln!(f, "  • {}", item)?;
                }
                Ok(())
            }
            PanelViewModel::SkillGroups { groups } => {
                for (idx, group) in groups.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}", group.category)?;
                    let badges: Vec<String> =
                        group.badges.iter().map(|b| format!("[{}]", b)).collect();
                    writeln!(f, "  {}", badges.join(" "))?;
                }
                Ok(())
            }
            PanelViewModel::ProjectLinks { projects } => {
                for project in projects {
                    writeln!(f, "  ▸ {}", project.name)?;
                }
                Ok(())
            }
            PanelViewModel::ContactCard { lines } => {
                for line in lines {
                    match &line.href {
                        Some(href) => writeln!(f, "  {} {} <{}>", line.glyph, line.text, href)?,
                        None => writeln!(f, "  {} {}", line.glyph, line.text)?,
                    }
                }
                Ok(())
            }
            PanelViewModel::Entries { entries } => {
                for entry in entries {
                    writeln!(f, "  {}: {}", entry.name, entry.value)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ModalViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "┌─ {}", self.title)?;
        if self.body.is_empty() {
            writeln!(f, "│")?;
        } else {
            writeln!(f, "│ {}", self.body)?;
        }
        writeln!(f, "└─ [ {} ]", self.dismiss_label)
    }
}
