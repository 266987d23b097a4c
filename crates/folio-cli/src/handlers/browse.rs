use crate::config::Config;
use crate::presentation::renderers::TuiRenderer;
use anyhow::Result;
use folio_engine::{ContentStore, ViewController};
use folio_types::Section;

pub fn handle(config: &Config, section: Option<Section>) -> Result<()> {
    let start = section.unwrap_or(config.ui.initial_section);
    let controller = ViewController::starting_at(start)
        .with_clear_project_on_switch(config.ui.clear_project_on_switch);

    tracing::info!(section = %start, "opening portfolio");

    TuiRenderer::new(ContentStore::portfolio(), controller, config.tick_rate()).run()
}
