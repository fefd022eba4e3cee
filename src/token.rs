// src/token.rs

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::process::Command;

use crate::output::Output;

/// External command expected to print `{"poToken": "..."}` on stdout.
pub const GENERATOR_COMMAND: &str = "youtube-po-token-generator";

#[derive(Debug, Deserialize)]
struct GeneratorOutput {
    #[serde(rename = "poToken", default)]
    po_token: Option<String>,
}

/// Run the generator once, synchronously, and return the extracted PO Token.
/// No retries: the command is attempted exactly once per run.
pub fn acquire_token(out: &Output) -> Result<String> {
    out.forced("Fetching PO Token...");

    let output = Command::new(GENERATOR_COMMAND)
        .output()
        .with_context(|| format!("failed to run `{GENERATOR_COMMAND}`"))?;

    if !output.status.success() {
        bail!("`{GENERATOR_COMMAND}` exited unsuccessfully ({})", output.status);
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    out.info(format!("Raw generator output: {}", raw.trim()));

    let token = extract_token(&raw)?;
    out.forced("PO Token acquired");
    Ok(token)
}

/// Parse the generator's stdout and pull out a non-empty `poToken`.
/// A missing or empty field is reported distinctly from malformed JSON.
fn extract_token(raw: &str) -> Result<String> {
    let parsed: GeneratorOutput =
        serde_json::from_str(raw.trim()).context("generator output is not valid JSON")?;

    match parsed.po_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => bail!("invalid PO Token format: `poToken` is missing or empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_valid_output() {
        let raw = r#"{"poToken": "abc123", "visitorData": "xyz"}"#;
        assert_eq!(extract_token(raw).unwrap(), "abc123");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let raw = "\n  {\"poToken\": \"tok\"}  \n";
        assert_eq!(extract_token(raw).unwrap(), "tok");
    }

    #[test]
    fn rejects_non_json_output() {
        let err = extract_token("not json").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn rejects_missing_token_field() {
        let err = extract_token("{}").unwrap_err();
        assert!(err.to_string().contains("invalid PO Token format"));
    }

    #[test]
    fn rejects_empty_token() {
        let err = extract_token(r#"{"poToken": ""}"#).unwrap_err();
        assert!(err.to_string().contains("invalid PO Token format"));
    }

    #[test]
    fn null_token_is_invalid_not_a_parse_error() {
        let err = extract_token(r#"{"poToken": null}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid PO Token format"));
        assert!(!msg.contains("not valid JSON"));
    }
}
