use folio_types::*;

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("skills".parse::<Section>().unwrap(), Section::Skills);
    assert_eq!("PROJECTS".parse::<Section>().unwrap(), Section::Projects);
    assert_eq!(" Contact ".parse::<Section>().unwrap(), Section::Contact);
}

#[test]
fn test_parse_unknown_section() {
    let err = "Blog".parse::<Section>().unwrap_err();
    assert!(matches!(err, Error::UnknownSection(ref name) if name == "Blog"));
    assert_eq!(err.to_string(), "Unknown section: Blog");
}

#[test]
fn test_section_serializes_as_label() {
    let json = serde_json::to_string(&Section::Experience).unwrap();
    assert_eq!(json, "\"Experience\"");

    let parsed: Section = serde_json::from_str("\"education\"").unwrap();
    assert_eq!(parsed, Section::Education);

    assert!(serde_json::from_str::<Section>("\"nope\"").is_err());
}

#[test]
fn test_contact_fields_order_and_links() {
    let keys: Vec<&str> = ContactField::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(keys, ["Email", "Phone", "GitHub", "LinkedIn"]);

    let links: Vec<ContactField> = ContactField::ALL
        .into_iter()
        .filter(|f| f.is_link())
        .collect();
    assert_eq!(links, [ContactField::GitHub, ContactField::LinkedIn]);
}

#[test]
fn test_toml_error_converts_to_config_error() {
    let err: Error = toml::from_str::<toml::Table>("not = [valid").unwrap_err().into();
    assert!(matches!(err, Error::Config(_)));
}
