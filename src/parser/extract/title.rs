use std::sync::LazyLock;

use regex::Regex;

static AT_SIGN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)\s+@\s+(.+)$").unwrap());
static AT_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)\s+at\s+(.+)$").unwrap());
static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+(?:@|at)\s+").unwrap());

pub const DEFAULT_TITLE: &str = "Partner";
pub const DEFAULT_FIRM: &str = "Venture Capital Firm";

/// Split a "Title @ Firm" / "Title at Firm" line into `(title, firm)`.
///
/// Listing markup is inconsistent, so three forms are tried in turn before
/// giving up and treating the whole line as the firm.
pub fn split_title_firm(line: &str) -> (String, String) {
    if let Some(caps) = AT_SIGN_RE.captures(line) {
        return (caps[1].trim().to_string(), caps[2].trim().to_string());
    }
    if let Some(caps) = AT_WORD_RE.captures(line) {
        return (caps[1].trim().to_string(), caps[2].trim().to_string());
    }

    let parts: Vec<&str> = SPLIT_RE.split(line).collect();
    if parts.len() >= 2 {
        return (parts[0].trim().to_string(), parts[1..].join(" ").trim().to_string());
    }

    let firm = if line.is_empty() { DEFAULT_FIRM } else { line };
    (DEFAULT_TITLE.to_string(), firm.to_string())
}
