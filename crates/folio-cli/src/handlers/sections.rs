use anyhow::Result;
use folio_engine::ContentStore;

pub fn handle() -> Result<()> {
    print!("{}", format_sections(&ContentStore::portfolio()));
    Ok(())
}

pub(crate) fn format_sections(store: &ContentStore) -> String {
    let width = store
        .sections()
        .map(|section| section.label().len())
        .max()
        .unwrap_or(0);

    store
        .sections()
        .map(|section| {
            format!(
                "{}  {:<width$}  {}\n",
                section.shortcut(),
                section.label(),
                store.get(section).shape_name(),
                width = width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sections() {
        let output = format_sections(&ContentStore::portfolio());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1  About       text");
        assert_eq!(lines[2], "3  Skills      grouped-tags");
        assert_eq!(lines[5], "6  Contact     named-entries");
    }
}
