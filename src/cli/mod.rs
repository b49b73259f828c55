//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod opener;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{LinkSealError, Result};

/// Environment variable checked for the password before prompting.
pub const PASSWORD_ENV: &str = "LINKSEAL_PASSWORD";

/// linkseal CLI: password-gated links.
#[derive(Parser)]
#[command(
    name = "linkseal",
    about = "Password-gated links: seal a URL into a blob, open it with the password",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Link manifest file (default: `links_file` from .linkseal.toml, else links.toml)
    #[arg(long, global = true)]
    pub links: Option<String>,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Seal a URL (or any text) with a password
    Seal {
        /// Text to protect, usually a URL
        plaintext: String,

        /// Store the blob in the manifest under this name instead of printing it
        #[arg(short, long)]
        name: Option<String>,

        /// Note shown by `list` (stored unencrypted)
        #[arg(long, requires = "name")]
        note: Option<String>,

        /// Replace an existing link with the same name
        #[arg(short, long, requires = "name")]
        force: bool,
    },

    /// Open a blob and print the plaintext
    Open {
        /// Base64 blob to open
        #[arg(required_unless_present = "name")]
        blob: Option<String>,

        /// Open the named link from the manifest instead
        #[arg(short, long, conflicts_with = "blob")]
        name: Option<String>,
    },

    /// Open a named link and launch it in the browser
    Unlock {
        /// Link name
        name: String,

        /// Print the URL instead of launching the browser
        #[arg(long)]
        print: bool,
    },

    /// List links in the manifest (never decrypts)
    List {
        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Remove a link from the manifest
    Remove {
        /// Link name
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load `.linkseal.toml` from the current directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Resolve the manifest path: `--links` wins over the config file.
pub fn links_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    match &cli.links {
        Some(path) => Ok(PathBuf::from(path)),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(settings.links_path(&cwd))
        }
    }
}

/// Get the password for opening a blob.
///
/// Checks `LINKSEAL_PASSWORD` first, then prompts on the terminal.
/// Any length is accepted: the blob decides whether it is right.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| LinkSealError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used by `seal`).
///
/// Also respects `LINKSEAL_PASSWORD` for scripted usage.
/// Enforces `min_len` characters.
pub fn prompt_new_password(min_len: usize) -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        if pw.chars().count() < min_len {
            return Err(LinkSealError::CommandFailed(format!(
                "password must be at least {min_len} characters"
            )));
        }
        return Ok(pw);
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose link password")
            .with_confirmation("Confirm link password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| LinkSealError::CommandFailed(format!("password prompt: {e}")))?;

        if password.chars().count() < min_len {
            output::warning(&format!(
                "Password must be at least {min_len} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => {
            log::debug!("using password from {PASSWORD_ENV}");
            Some(Zeroizing::new(pw))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn open_accepts_blob_or_name() {
        assert!(Cli::try_parse_from(["linkseal", "open", "AAAA"]).is_ok());
        assert!(Cli::try_parse_from(["linkseal", "open", "--name", "demo"]).is_ok());
        assert!(Cli::try_parse_from(["linkseal", "open"]).is_err());
        assert!(Cli::try_parse_from(["linkseal", "open", "AAAA", "--name", "demo"]).is_err());
    }

    #[test]
    fn seal_note_requires_name() {
        assert!(Cli::try_parse_from(["linkseal", "seal", "https://x", "--note", "n"]).is_err());
        assert!(Cli::try_parse_from([
            "linkseal", "seal", "https://x", "--name", "x", "--note", "n"
        ])
        .is_ok());
    }

    #[test]
    fn verbose_is_counted() {
        let cli = Cli::try_parse_from(["linkseal", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn links_flag_overrides_settings() {
        let cli = Cli::try_parse_from(["linkseal", "list", "--links", "/tmp/x.toml"]).unwrap();
        let path = links_path(&cli, &Settings::default()).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x.toml"));
    }
}
