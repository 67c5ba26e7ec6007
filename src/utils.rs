use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use regex::Regex;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapses runs of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Percent-encodes a keyword string for use as a query parameter value.
pub fn encode_keywords(keywords: &str) -> String {
    urlencoding::encode(&collapse_whitespace(keywords)).into_owned()
}

/// Builds the value of a `Basic` authorization header.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

/// Shortens a token to something safe to print or log.
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(10).collect();
    format!("{prefix}… ({} chars)", token.chars().count())
}

/// Sets `key=value` in the contents of a `.env` file.
///
/// Replaces the first existing `key=` line, otherwise appends a new line.
pub fn upsert_env_line(contents: &str, key: &str, value: &str) -> String {
    let line = format!("{key}={value}");
    let prefix = format!("{key}=");

    let mut replaced = false;
    let mut lines: Vec<String> = contents
        .lines()
        .map(|l| {
            if !replaced && l.starts_with(&prefix) {
                replaced = true;
                line.clone()
            } else {
                l.to_string()
            }
        })
        .collect();

    if !replaced {
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
