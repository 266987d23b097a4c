use serde::Serialize;

/// Payload attached to a section.
///
/// Each section maps to exactly one shape. Sequences keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum SectionContent {
    Text(String),
    List(Vec<String>),
    GroupedTags(Vec<TagGroup>),
    NamedEntries(Vec<NamedEntry>),
}

impl SectionContent {
    /// Short name of the shape, used in listings
    pub fn shape_name(&self) -> &'static str {
        match self {
            SectionContent::Text(_) => "text",
            SectionContent::List(_) => "list",
            SectionContent::GroupedTags(_) => "grouped-tags",
            SectionContent::NamedEntries(_) => "named-entries",
        }
    }

    /// Number of top-level items (1 for text)
    pub fn len(&self) -> usize {
        match self {
            SectionContent::Text(_) => 1,
            SectionContent::List(items) => items.len(),
            SectionContent::GroupedTags(groups) => groups.len(),
            SectionContent::NamedEntries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of a named entry, if this is a `NamedEntries` payload
    pub fn entry(&self, name: &str) -> Option<&str> {
        match self {
            SectionContent::NamedEntries(entries) => entries
                .iter()
                .find(|entry| entry.name == name)
                .map(|entry| entry.value.as_str()),
            _ => None,
        }
    }
}

/// A category label and its tags, e.g. one skill group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    pub category: String,
    pub tags: Vec<String>,
}

impl TagGroup {
    pub fn new<I, S>(category: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// A name/value pair, e.g. a project and its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedEntry {
    pub name: String,
    pub value: String,
}

impl NamedEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_lookup_only_on_named_entries() {
        let entries = SectionContent::NamedEntries(vec![
            NamedEntry::new("a", "first"),
            NamedEntry::new("b", "second"),
        ]);
        assert_eq!(entries.entry("b"), Some("second"));
        assert_eq!(entries.entry("c"), None);

        let text = SectionContent::Text("a".to_string());
        assert_eq!(text.entry("a"), None);
    }

    #[test]
    fn test_len_counts_top_level_items() {
        assert_eq!(SectionContent::Text(String::new()).len(), 1);
        assert!(SectionContent::List(Vec::new()).is_empty());
        let groups = SectionContent::GroupedTags(vec![TagGroup::new("x", ["1", "2"])]);
        assert_eq!(groups.len(), 1);
    }
}
