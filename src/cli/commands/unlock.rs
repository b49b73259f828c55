//! `linkseal unlock` — open a named link and launch it in the browser.

use crate::cli::output;
use crate::cli::{links_path, load_settings, opener, prompt_password, Cli};
use crate::errors::Result;
use crate::links::LinkStore;

/// Execute the `unlock` command.
pub fn execute(cli: &Cli, name: &str, print: bool) -> Result<()> {
    let settings = load_settings()?;
    let store = LinkStore::load(&links_path(cli, &settings)?)?;
    store.get(name)?;

    let password = prompt_password()?;
    let url = store.unlock(name, &password)?;

    if print {
        println!("{url}");
        return Ok(());
    }

    opener::launch(&url, settings.opener.as_deref())?;
    output::success(&format!("Opened link '{name}'"));
    Ok(())
}
