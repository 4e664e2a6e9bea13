//! Cache/staleness gate in front of the fetch + parse pipeline.
//!
//! A fresh cache entry short-circuits everything. Otherwise the listing is
//! fetched and parsed; on failure the previous entry is served whatever its
//! age, and with no entry at all the static fallback catalog is returned.

use std::fmt;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog;
use crate::fetch::{DocumentSource, FetchError};
use crate::parser::{self, ParseOutcome, Strategy};
use crate::profile::InvestorProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub records: Vec<InvestorProfile>,
    pub fetched_at_epoch_millis: i64,
}

impl CacheEntry {
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        Duration::milliseconds(now.timestamp_millis() - self.fetched_at_epoch_millis)
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.age(now) < window
    }
}

/// The single cache slot. Records and timestamp are always replaced together.
#[derive(Debug, Default)]
pub struct ProfileCache {
    slot: RwLock<Option<CacheEntry>>,
}

impl ProfileCache {
    pub fn with_entry(entry: Option<CacheEntry>) -> Self {
        ProfileCache {
            slot: RwLock::new(entry),
        }
    }

    pub fn get(&self) -> Option<CacheEntry> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn store(&self, entry: CacheEntry) {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(entry);
    }
}

#[derive(Debug, Error)]
enum HarvestError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no strategy produced any profiles")]
    Empty,
}

/// Where a harvest's profiles came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Extracted(Strategy),
    Cached,
    StaleCache,
    Fallback,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Extracted(strategy) => write!(f, "extracted ({})", strategy),
            Origin::Cached => f.write_str("cache"),
            Origin::StaleCache => f.write_str("stale cache"),
            Origin::Fallback => f.write_str("fallback catalog"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Harvest {
    pub profiles: Vec<InvestorProfile>,
    pub origin: Origin,
}

impl Harvest {
    pub fn from_cache(&self) -> bool {
        matches!(self.origin, Origin::Cached | Origin::StaleCache)
    }
}

pub struct Harvester {
    source: Arc<dyn DocumentSource>,
    cache: Arc<ProfileCache>,
    freshness: Duration,
    augment: bool,
    force: bool,
}

impl Harvester {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        cache: Arc<ProfileCache>,
        freshness: Duration,
        augment: bool,
    ) -> Self {
        Harvester {
            source,
            cache,
            freshness,
            augment,
            force: false,
        }
    }

    /// Refetch even when the cached entry is fresh. The entry is still
    /// served if the refetch fails.
    pub fn forced(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub async fn obtain(&self) -> Harvest {
        self.obtain_at(Utc::now()).await
    }

    /// Never fails: the worst case is the static fallback catalog.
    pub async fn obtain_at(&self, now: DateTime<Utc>) -> Harvest {
        if let Some(entry) = self.cache.get().filter(|_| !self.force) {
            if entry.is_fresh(now, self.freshness) {
                info!(
                    "Using cached profiles ({} records, {}m old)",
                    entry.records.len(),
                    entry.age(now).num_minutes()
                );
                return Harvest {
                    profiles: entry.records,
                    origin: Origin::Cached,
                };
            }
        }

        match self.extract().await {
            Ok(outcome) => {
                self.cache.store(CacheEntry {
                    records: outcome.profiles.clone(),
                    fetched_at_epoch_millis: now.timestamp_millis(),
                });
                Harvest {
                    profiles: outcome.profiles,
                    origin: Origin::Extracted(outcome.strategy),
                }
            }
            Err(e) => {
                warn!("Harvest failed: {}", e);
                if let Some(entry) = self.cache.get() {
                    warn!("Returning {} cached profiles despite failure", entry.records.len());
                    return Harvest {
                        profiles: entry.records,
                        origin: Origin::StaleCache,
                    };
                }
                warn!("No cached profiles, returning fallback catalog");
                Harvest {
                    profiles: catalog::fallback(),
                    origin: Origin::Fallback,
                }
            }
        }
    }

    async fn extract(&self) -> Result<ParseOutcome, HarvestError> {
        let html = self.source.fetch().await?;
        let outcome = parser::parse_document(&html, self.augment);
        if outcome.profiles.is_empty() {
            return Err(HarvestError::Empty);
        }
        Ok(outcome)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct FakeSource {
        html: Option<String>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn serving(fixture: &str) -> Arc<Self> {
            let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
            Arc::new(FakeSource {
                html: Some(html),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(FakeSource {
                html: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentSource for FakeSource {
        async fn fetch(&self) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.html
                .clone()
                .ok_or_else(|| FetchError::Network("connection refused".into()))
        }
    }

    fn harvester(source: Arc<FakeSource>, cache: Arc<ProfileCache>, augment: bool) -> Harvester {
        Harvester::new(source, cache, Duration::hours(24), augment)
    }

    fn entry(records: Vec<InvestorProfile>, at: DateTime<Utc>) -> CacheEntry {
        CacheEntry {
            records,
            fetched_at_epoch_millis: at.timestamp_millis(),
        }
    }

    #[tokio::test]
    async fn extracts_then_serves_from_cache() {
        let source = FakeSource::serving("cards");
        let cache = Arc::new(ProfileCache::default());
        let h = harvester(source.clone(), cache.clone(), true);
        let now = Utc::now();

        let first = h.obtain_at(now).await;
        assert_eq!(first.origin, Origin::Extracted(Strategy::Cards));
        assert!(!first.from_cache());
        assert_eq!(first.profiles.len(), 3);

        let second = h.obtain_at(now + Duration::hours(1)).await;
        assert!(second.from_cache());
        assert_eq!(second.origin, Origin::Cached);
        assert_eq!(second.profiles, first.profiles);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn stale_entry_is_refreshed() {
        let source = FakeSource::serving("text_profiles");
        let now = Utc::now();
        let cache = Arc::new(ProfileCache::with_entry(Some(entry(
            catalog::fallback(),
            now - Duration::hours(25),
        ))));
        let h = harvester(source.clone(), cache.clone(), true);

        let got = h.obtain_at(now).await;
        assert_eq!(got.origin, Origin::Extracted(Strategy::Patterns));
        assert_eq!(got.profiles.len(), 2);
        assert_eq!(source.calls(), 1);

        let stored = cache.get().unwrap();
        assert_eq!(stored.records, got.profiles);
        assert_eq!(stored.fetched_at_epoch_millis, now.timestamp_millis());
    }

    #[tokio::test]
    async fn exactly_at_window_is_stale() {
        let source = FakeSource::serving("names");
        let now = Utc::now();
        let cache = Arc::new(ProfileCache::with_entry(Some(entry(
            catalog::fallback(),
            now - Duration::hours(24),
        ))));
        let got = harvester(source.clone(), cache, true).obtain_at(now).await;
        assert_eq!(got.origin, Origin::Extracted(Strategy::Scan));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn failure_without_cache_returns_fallback() {
        let source = FakeSource::failing();
        let cache = Arc::new(ProfileCache::default());
        let got = harvester(source, cache.clone(), true).obtain().await;

        assert_eq!(got.origin, Origin::Fallback);
        assert!(!got.from_cache());
        let names: Vec<&str> = got.profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Reid Hoffman", "Marc Andreessen"]);
        assert!(cache.get().is_none());
    }

    #[tokio::test]
    async fn failure_serves_stale_cache() {
        let source = FakeSource::failing();
        let now = Utc::now();
        let old = entry(catalog::curated(), now - Duration::days(30));
        let cache = Arc::new(ProfileCache::with_entry(Some(old.clone())));

        let got = harvester(source.clone(), cache.clone(), true).obtain_at(now).await;
        assert_eq!(got.origin, Origin::StaleCache);
        assert!(got.from_cache());
        assert_eq!(got.profiles, old.records);
        assert_eq!(cache.get(), Some(old));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn forced_refetches_fresh_entry() {
        let source = FakeSource::serving("cards");
        let now = Utc::now();
        let cache = Arc::new(ProfileCache::with_entry(Some(entry(
            catalog::fallback(),
            now - Duration::minutes(5),
        ))));
        let got = harvester(source.clone(), cache.clone(), true)
            .forced(true)
            .obtain_at(now)
            .await;
        assert_eq!(got.origin, Origin::Extracted(Strategy::Cards));
        assert_eq!(source.calls(), 1);
        assert_eq!(cache.get().unwrap().records, got.profiles);
    }

    #[tokio::test]
    async fn forced_failure_keeps_cached_entry() {
        let source = FakeSource::failing();
        let now = Utc::now();
        let fresh = entry(catalog::curated(), now - Duration::minutes(5));
        let cache = Arc::new(ProfileCache::with_entry(Some(fresh.clone())));

        let got = harvester(source.clone(), cache.clone(), true)
            .forced(true)
            .obtain_at(now)
            .await;
        assert_eq!(got.origin, Origin::StaleCache);
        assert_eq!(got.profiles.len(), 13);
        assert_eq!(source.calls(), 1);
        assert_eq!(cache.get(), Some(fresh));
    }

    #[tokio::test]
    async fn blank_page_yields_curated_list() {
        let got = harvester(FakeSource::serving("blank"), Arc::new(ProfileCache::default()), true)
            .obtain()
            .await;
        assert_eq!(got.origin, Origin::Extracted(Strategy::Scan));
        assert_eq!(got.profiles.len(), 13);
    }

    #[tokio::test]
    async fn empty_yield_without_augmentation_falls_back() {
        let cache = Arc::new(ProfileCache::default());
        let got = harvester(FakeSource::serving("blank"), cache.clone(), false)
            .obtain()
            .await;
        assert_eq!(got.origin, Origin::Fallback);
        assert_eq!(got.profiles.len(), 2);
        assert!(cache.get().is_none());
    }

    #[test]
    fn origin_labels() {
        assert_eq!(Origin::Extracted(Strategy::Patterns).to_string(), "extracted (patterns)");
        assert_eq!(Origin::StaleCache.to_string(), "stale cache");
    }

    #[test]
    fn entry_age() {
        let now = Utc::now();
        let e = entry(Vec::new(), now - Duration::minutes(90));
        assert_eq!(e.age(now).num_minutes(), 90);
        assert!(e.is_fresh(now, Duration::hours(24)));
        assert!(!e.is_fresh(now, Duration::hours(1)));
    }
}
