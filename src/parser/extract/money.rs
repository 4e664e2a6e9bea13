use std::sync::LazyLock;

use regex::Regex;

static CHECK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d,]+[KMB]?\s*-?\s*\$?[\d,]*[KMB]?").unwrap());

pub const DEFAULT_MIN: &str = "$100K";
pub const DEFAULT_MAX: &str = "$5M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSize {
    pub min: String,
    pub max: String,
}

/// First dollar amount or range in the text. A bare amount is used for both
/// ends; no amount at all yields the $100K-$5M default.
pub fn check_size(text: &str) -> CheckSize {
    let Some(m) = CHECK_RE.find(text) else {
        return CheckSize {
            min: DEFAULT_MIN.to_string(),
            max: DEFAULT_MAX.to_string(),
        };
    };

    let range = m.as_str().trim();
    match range.split_once('-') {
        Some((min, max)) => {
            let min = min.trim().to_string();
            let max = match max.trim() {
                "" => min.clone(),
                max => max.to_string(),
            };
            CheckSize { min, max }
        }
        None => CheckSize {
            min: range.to_string(),
            max: range.to_string(),
        },
    }
}
