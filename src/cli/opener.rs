//! Launching unlocked links in a browser.
//!
//! The opener is chosen from, in order: the `opener` setting in
//! `.linkseal.toml`, `$BROWSER`, then the platform default
//! (`xdg-open`, `open`, or `rundll32 url.dll,FileProtocolHandler`).
//!
//! The URL is always passed as a single argument, never through a shell.

use std::process::Command;

use crate::errors::{LinkSealError, Result};

/// Schemes we are willing to hand to a browser.
const ALLOWED_SCHEMES: &[&str] = &["https://", "http://", "mailto:"];

/// Characters `cmd.exe` interprets even inside an argument.
const CMD_METACHARS: &[char] = &['&', '|', '^', '<', '>', '"', '%', '\r', '\n'];

/// Open `url` in a browser.
pub fn launch(url: &str, configured: Option<&str>) -> Result<()> {
    let url = url.trim();
    if !is_launchable(url) {
        return Err(LinkSealError::CommandFailed(
            "unlocked text is not a web link — use `--print` to see it".into(),
        ));
    }

    let opener = find_opener(configured);
    let (program, args) = opener
        .split_first()
        .ok_or_else(|| LinkSealError::OpenerFailed(String::new(), "empty command".into()))?;

    if is_cmd_shell(program) && url.contains(CMD_METACHARS) {
        return Err(LinkSealError::CommandFailed(
            "refusing to pass a link with shell characters to cmd — use `--print` to see it"
                .into(),
        ));
    }

    log::debug!("launching {program}");
    let status = Command::new(program)
        .args(args)
        .arg(url)
        .status()
        .map_err(|e| LinkSealError::OpenerFailed(program.clone(), e.to_string()))?;

    if !status.success() {
        return Err(LinkSealError::OpenerFailed(
            program.clone(),
            format!("exited with code {}", status.code().unwrap_or(-1)),
        ));
    }

    Ok(())
}

/// Whether `url` starts with a scheme a browser should handle.
pub fn is_launchable(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    ALLOWED_SCHEMES.iter().any(|s| lower.starts_with(s))
}

/// Whether `program` is `cmd` / `cmd.exe`, which re-parses its arguments.
///
/// Splits on both separators so Windows paths are recognised everywhere.
fn is_cmd_shell(program: &str) -> bool {
    let name = program.rsplit(['/', '\\']).next().unwrap_or(program);
    name.eq_ignore_ascii_case("cmd") || name.eq_ignore_ascii_case("cmd.exe")
}

/// Resolve the opener command line, split on whitespace.
fn find_opener(configured: Option<&str>) -> Vec<String> {
    let chosen = configured
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
        .or_else(|| std::env::var("BROWSER").ok().filter(|s| !s.trim().is_empty()));

    match chosen {
        Some(cmd) => cmd.split_whitespace().map(str::to_string).collect(),
        None => platform_default(),
    }
}

fn platform_default() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["open".into()]
    } else if cfg!(windows) {
        vec!["rundll32".into(), "url.dll,FileProtocolHandler".into()]
    } else {
        vec!["xdg-open".into()]
    }
}
