use crate::types::OutputFormat;
use anyhow::{Result, bail};
use folio_engine::{ContentStore, PageViewModel, ViewController, render_page};
use folio_types::{Error, Section};

pub fn handle(section: Section, project: Option<String>, format: OutputFormat) -> Result<()> {
    let page = build_page(section, project)?;

    match format {
        OutputFormat::Plain => print!("{}", page),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
    }

    Ok(())
}

/// Render one page, validating the user-typed project name first
pub(crate) fn build_page(section: Section, project: Option<String>) -> Result<PageViewModel> {
    let store = ContentStore::portfolio();
    let mut controller = ViewController::starting_at(section);

    if let Some(name) = project {
        if section != Section::Projects {
            bail!(
                "--project requires the {} section (got {})",
                Section::Projects,
                section
            );
        }
        if store.project(&name).is_none() {
            return Err(Error::UnknownProject(name).into());
        }
        controller.select_project(name);
    }

    tracing::debug!(%section, modal = controller.modal_open(), "rendering page");
    Ok(render_page(&store, &controller))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_page_with_project() {
        let page = build_page(
            Section::Projects,
            Some("DevOps Workflow Optimization".to_string()),
        )
        .unwrap();
        let modal = page.modal.unwrap();
        assert_eq!(
            modal.body,
            "CI/CD pipeline with GitHub Actions, ArgoCD, Kubernetes, and Helm."
        );
    }

    #[test]
    fn test_unknown_project_is_rejected() {
        let err = build_page(Section::Projects, Some("Nope".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "Unknown project: Nope");
    }

    #[test]
    fn test_project_outside_projects_section_is_rejected() {
        let err = build_page(
            Section::About,
            Some("DevOps Workflow Optimization".to_string()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("requires the Projects section"));
    }
}
