//! `linkseal list` — show the links in the manifest.

use crate::cli::output;
use crate::cli::{links_path, load_settings, Cli};
use crate::errors::{LinkSealError, Result};
use crate::links::LinkStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli, format: &str) -> Result<()> {
    let settings = load_settings()?;
    let store = LinkStore::load(&links_path(cli, &settings)?)?;
    let links = store.list();

    match format {
        "table" => output::print_links_table(&links),
        "json" => {
            let json = serde_json::to_string_pretty(&links)
                .map_err(|e| LinkSealError::SerializationError(format!("JSON list: {e}")))?;
            println!("{json}");
        }
        other => {
            return Err(LinkSealError::CommandFailed(format!(
                "unknown list format '{other}' — use 'table' or 'json'"
            )));
        }
    }

    Ok(())
}
