//! `linkseal remove` — delete a link from the manifest.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{links_path, load_settings, Cli};
use crate::errors::{LinkSealError, Result};
use crate::links::LinkStore;

/// Execute the `remove` command.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    let settings = load_settings()?;
    let mut store = LinkStore::load(&links_path(cli, &settings)?)?;
    store.get(name)?;

    // Unless --force is set, ask for confirmation before removing.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove link '{name}'?"))
            .default(false)
            .interact()
            .map_err(|e| LinkSealError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.remove(name)?;
    store.save()?;

    output::success(&format!("Removed link '{name}' from {}", store.path().display()));
    Ok(())
}
