//! `linkseal seal` — seal a URL with a password.
//!
//! Without `--name` the blob is printed on stdout, ready to paste into a
//! page.  With `--name` it is stored in the link manifest.

use crate::cli::output;
use crate::cli::opener::is_launchable;
use crate::cli::{links_path, load_settings, prompt_new_password, Cli};
use crate::codec::SymmetricLinkCodec;
use crate::errors::{LinkSealError, Result};
use crate::links::{validate_link_name, LinkStore};

/// Execute the `seal` command.
pub fn execute(
    cli: &Cli,
    plaintext: &str,
    name: Option<&str>,
    note: Option<&str>,
    force: bool,
) -> Result<()> {
    let settings = load_settings()?;

    if !is_launchable(plaintext) {
        output::warning(
            "This does not look like a web link; `unlock` will need `--print` to show it.",
        );
    }

    let Some(name) = name else {
        let password = prompt_new_password(settings.min_password_len)?;
        let blob = SymmetricLinkCodec.seal(plaintext, &password)?;
        println!("{blob}");
        return Ok(());
    };

    // Fail on a bad or taken name before asking for a password.
    validate_link_name(name)?;
    let mut store = LinkStore::load(&links_path(cli, &settings)?)?;
    if store.contains(name) && !force {
        return Err(LinkSealError::LinkAlreadyExists(name.to_string()));
    }

    let password = prompt_new_password(settings.min_password_len)?;
    store.seal(name, plaintext, &password, note.map(str::to_string), force)?;
    store.save()?;

    output::success(&format!("Sealed link '{name}' into {}", store.path().display()));
    Ok(())
}
