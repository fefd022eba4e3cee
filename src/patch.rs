// src/patch.rs
//
// Rewrites the single `--extractor-args "youtube:player-client=..."` line
// in the yt-dlp config file, preserving every other line byte-for-byte and
// leaving a backup copy of the previous state next to it.

use anyhow::{Context, Result};
use regex::bytes::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::output::Output;

const APP_DATA_ENV: &str = "APPDATA";
const CONFIG_DIR_NAME: &str = "yt-dlp";
const CONFIG_FILE_NAME: &str = "config.txt";

/// Matches any previously written extractor-args directive. Deliberately
/// not escape-aware: the shortest match runs up to the next literal quote.
fn directive_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"--extractor-args "youtube:player-client=.+?""#)
            .expect("directive pattern is valid")
    })
}

/// `%APPDATA%\yt-dlp\config.txt`. No fallback when APPDATA is unset.
fn config_file_path() -> Result<PathBuf> {
    let app_data =
        env::var(APP_DATA_ENV).with_context(|| format!("{APP_DATA_ENV} is not set"))?;
    Ok(PathBuf::from(app_data)
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

/// The exact directive line yt-dlp will read, with the token inserted verbatim.
pub fn extractor_args_directive(token: &str) -> String {
    format!(r#"--extractor-args "youtube:player-client=default,mweb;po_token=mweb.gvs+{token}""#)
}

/// Sibling backup file: `backup_<stem>.txt` in the same directory.
fn backup_path(config_path: &Path) -> PathBuf {
    let stem = config_path.file_stem().unwrap_or_default().to_string_lossy();
    config_path.with_file_name(format!("backup_{stem}.txt"))
}

/// Strip every previous directive, then append the refreshed one on its own
/// line. Operates on raw bytes so unrelated non-UTF-8 content survives
/// verbatim.
fn apply_directive(existing: &[u8], directive: &str) -> Vec<u8> {
    let stripped = directive_pattern().replace_all(existing, &b""[..]);
    let mut patched = stripped.trim_ascii().to_vec();
    patched.push(b'\n');
    patched.extend_from_slice(directive.as_bytes());
    patched.push(b'\n');
    patched.trim_ascii().to_vec()
}

/// Copy the current config aside before mutating it. A missing source is
/// silently skipped; the caller treats a copy failure as a warning only.
fn back_up(out: &Output, config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Ok(());
    }
    let backup = backup_path(config_path);
    fs::copy(config_path, &backup).with_context(|| {
        format!(
            "failed to copy {} to {}",
            config_path.display(),
            backup.display()
        )
    })?;
    out.info(format!("Backed up config to {}", backup.display()));
    Ok(())
}

/// Patch the yt-dlp config with a refreshed token. Any filesystem failure
/// apart from the backup copy is fatal for the run.
pub fn patch_config(out: &Output, token: &str) -> Result<()> {
    let config_path = config_file_path()?;
    patch_config_at(out, &config_path, token)
}

fn patch_config_at(out: &Output, config_path: &Path, token: &str) -> Result<()> {
    let directive = extractor_args_directive(token);
    out.info(format!("Config file: {}", config_path.display()));

    if let Some(dir) = config_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    if let Err(err) = back_up(out, config_path) {
        out.warn(format!("could not back up config: {err:#}"));
    }

    let existing = if config_path.exists() {
        fs::read(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?
    } else {
        Vec::new()
    };

    let patched = apply_directive(&existing, &directive);
    fs::write(config_path, &patched)
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    out.success("Updated yt-dlp config");
    Ok(())
}
