//! `linkseal open` — open a blob and print the plaintext.

use crate::cli::{links_path, load_settings, prompt_password, Cli};
use crate::codec;
use crate::errors::{LinkSealError, Result};
use crate::links::LinkStore;

/// Execute the `open` command.
pub fn execute(cli: &Cli, blob: Option<&str>, name: Option<&str>) -> Result<()> {
    let plaintext = match (blob, name) {
        (_, Some(name)) => {
            let settings = load_settings()?;
            let store = LinkStore::load(&links_path(cli, &settings)?)?;
            // Look the link up before prompting so a typo fails fast.
            store.get(name)?;
            let password = prompt_password()?;
            store.unlock(name, &password)?
        }
        (Some(blob), None) => {
            let password = prompt_password()?;
            codec::open(blob, &password)?
        }
        (None, None) => {
            return Err(LinkSealError::CommandFailed(
                "nothing to open — pass a blob or --name".into(),
            ));
        }
    };

    println!("{plaintext}");
    Ok(())
}
