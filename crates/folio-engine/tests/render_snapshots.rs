use folio_engine::{Action, ContentStore, PanelViewModel, ViewController, render_page};
use folio_types::{Section, SectionContent};

fn page_for(actions: &[Action]) -> folio_engine::PageViewModel {
    let store = ContentStore::portfolio();
    let mut controller = ViewController::new();
    for action in actions {
        controller.dispatch(action.clone());
    }
    render_page(&store, &controller)
}

#[test]
fn test_initial_render_shows_about_without_modal() {
    let page = page_for(&[]);

    assert_eq!(page.active_section(), Some(Section::About));
    assert_eq!(
        page.panel,
        PanelViewModel::Paragraph {
            text: "I am Ankitha V, a DevOps Engineer passionate about automation, CI/CD, and cloud technologies."
                .to_string()
        }
    );
    assert!(page.modal.is_none());
}

#[test]
fn test_nav_lists_all_sections_with_one_active() {
    for section in Section::ALL {
        let page = page_for(&[Action::SelectSection(section)]);
        let labels: Vec<&str> = page.nav.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(
            labels,
            ["About", "Education", "Skills", "Projects", "Experience", "Contact"]
        );
        assert_eq!(page.nav.iter().filter(|item| item.active).count(), 1);
        assert_eq!(page.active_section(), Some(section));
    }
}

#[test]
fn test_panel_shape_matches_content_shape() {
    let store = ContentStore::portfolio();
    for section in Section::ALL {
        let page = page_for(&[Action::SelectSection(section)]);
        let expected = match (section, store.get(section)) {
            (_, SectionContent::Text(_)) => "paragraph",
            (_, SectionContent::List(_)) => "bullets",
            (_, SectionContent::GroupedTags(_)) => "skill_groups",
            (Section::Projects, SectionContent::NamedEntries(_)) => "project_links",
            (Section::Contact, SectionContent::NamedEntries(_)) => "contact_card",
            (_, SectionContent::NamedEntries(_)) => "entries",
        };
        assert_eq!(page.panel.kind(), expected, "section {}", section);
    }
}

#[test]
fn test_skills_render_three_groups_in_order() {
    let page = page_for(&[Action::SelectSection(Section::Skills)]);
    let PanelViewModel::SkillGroups { groups } = &page.panel else {
        panic!("expected skill groups, got {:?}", page.panel);
    };

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].category, "Version Control - Git, GitHub");
    assert_eq!(
        groups[0].badges,
        ["Repositories", "Branching", "Merging", "Pull Requests"]
    );
    assert_eq!(groups[1].category, "Cloud Technologies - AWS");
    assert_eq!(
        groups[1].badges,
        ["IAM", "VPC", "EC2", "S3", "AWS CLI", "CloudWatch"]
    );
    assert_eq!(groups[2].category, "Containerization - Docker");
    assert_eq!(
        groups[2].badges,
        ["Dockerfile", "Docker Compose", "Image Management"]
    );
}

#[test]
fn test_project_modal_open_and_close() {
    let store = ContentStore::portfolio();
    let mut controller = ViewController::new();
    controller.dispatch(Action::SelectSection(Section::Projects));
    controller.dispatch(Action::SelectProject(
        "AWS Cloud Cost Optimization".to_string(),
    ));

    let page = render_page(&store, &controller);
    let modal = page.modal.expect("modal should be open");
    assert_eq!(modal.title, "AWS Cloud Cost Optimization");
    assert_eq!(
        modal.body,
        "Automated Lambda function for managing stale EBS snapshots."
    );
    assert_eq!(modal.dismiss_label, "Close");

    controller.dispatch(Action::ClearProject);
    let page = render_page(&store, &controller);
    assert!(page.modal.is_none());
    assert_eq!(page.active_section(), Some(Section::Projects));
}

#[test]
fn test_contact_card_has_four_fixed_lines() {
    let page = page_for(&[Action::SelectSection(Section::Contact)]);
    let PanelViewModel::ContactCard { lines } = &page.panel else {
        panic!("expected contact card, got {:?}", page.panel);
    };

    let texts: Vec<&str> = lines.iter().map(|line| line.text.as_str()).collect();
    assert_eq!(
        texts,
        ["jobsforankithav@gmail.com", "8971488385", "GitHub", "LinkedIn"]
    );

    let hrefs: Vec<Option<&str>> = lines.iter().map(|line| line.href.as_deref()).collect();
    assert_eq!(
        hrefs,
        [
            None,
            None,
            Some("https://github.com/ankithaV"),
            Some("https://linkedin.com/in/ankithaV"),
        ]
    );
    assert!(lines.iter().all(|line| !line.glyph.is_empty()));
}

#[test]
fn test_repeated_switching_keeps_at_most_one_modal() {
    let store = ContentStore::portfolio();
    let mut controller = ViewController::new();
    for round in 0..50 {
        let section = Section::ALL[round % Section::ALL.len()];
        controller.dispatch(Action::SelectSection(section));
        if section == Section::Projects {
            controller.dispatch(Action::SelectProject(
                "DevOps Workflow Optimization".to_string(),
            ));
        }
        let page = render_page(&store, &controller);
        assert!(page.modal.iter().count() <= 1);
        assert_eq!(page.active_section(), Some(section));
    }
}

#[test]
fn test_skills_page_text() {
    let page = page_for(&[Action::SelectSection(Section::Skills)]);
    insta::assert_snapshot!("skills_page", page.to_string());
}

#[test]
fn test_contact_page_json() {
    let page = page_for(&[Action::SelectSection(Section::Contact)]);
    let json = serde_json::to_value(&page).unwrap();

    assert_eq!(json["panel"]["kind"], "contact_card");
    assert_eq!(json["panel"]["lines"][2]["field"], "GitHub");
    assert_eq!(
        json["panel"]["lines"][3]["href"],
        "https://linkedin.com/in/ankithaV"
    );
    assert!(json.get("modal").is_none());
}
