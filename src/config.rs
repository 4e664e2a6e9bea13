use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_LISTING_URL: &str = "https://www.vcsheet.com/investors";
const DEFAULT_DB_PATH: &str = "data/vc.sqlite";
const DEFAULT_CACHE_TTL_HOURS: i64 = 24;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listing_url: String,
    pub db_path: PathBuf,
    pub freshness: chrono::Duration,
    pub curated_augmentation: bool,
    /// `None` when `VC_FETCH_TIMEOUT_SECS=0`.
    pub fetch_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listing_url = lookup("VC_LISTING_URL").unwrap_or_else(|| DEFAULT_LISTING_URL.to_string());
        if !listing_url.starts_with("http://") && !listing_url.starts_with("https://") {
            bail!("VC_LISTING_URL must be an http(s) URL, got {:?}", listing_url);
        }

        let db_path = lookup("VC_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let ttl_hours = match lookup("VC_CACHE_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("VC_CACHE_TTL_HOURS must be a whole number, got {:?}", raw))?,
            None => DEFAULT_CACHE_TTL_HOURS,
        };
        if ttl_hours < 0 {
            bail!("VC_CACHE_TTL_HOURS must not be negative, got {}", ttl_hours);
        }
        let freshness = chrono::Duration::try_hours(ttl_hours)
            .with_context(|| format!("VC_CACHE_TTL_HOURS out of range: {}", ttl_hours))?;

        let curated_augmentation = match lookup("VC_CURATED_AUGMENTATION") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("VC_CURATED_AUGMENTATION must be true/false, got {:?}", raw))?,
            None => true,
        };

        let timeout_secs = match lookup("VC_FETCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("VC_FETCH_TIMEOUT_SECS must be a whole number, got {:?}", raw))?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };
        let fetch_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Ok(Config {
            listing_url,
            db_path,
            freshness,
            curated_augmentation,
            fetch_timeout,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
