mod catalog;
mod config;
mod db;
mod fetch;
mod harvest;
mod parser;
mod profile;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::bail;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::Connection;
use tracing::{error, info, warn};

use config::Config;
use fetch::{DocumentSource, HttpSource};
use harvest::{Harvester, ProfileCache};
use profile::{ContactCard, RefreshOutcome, SearchQuery, StoredProfile};

#[derive(Parser)]
#[command(name = "vc_directory", about = "Venture capital investor directory")]
struct Cli {
    /// SQLite database path (overrides VC_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema and seed the starter investor list
    Init,
    /// Harvest the investor listing and replace stored profiles
    Refresh {
        /// Ignore a fresh cached harvest
        #[arg(long)]
        force: bool,
    },
    /// List every stored profile
    List {
        #[arg(long)]
        json: bool,
    },
    /// Filter stored profiles
    Search {
        /// Case-insensitive substring of any sector (e.g. "fintech")
        #[arg(short, long)]
        industry: Option<String>,
        /// Investment stage; repeat for any-of
        #[arg(short, long = "stage", value_parser = PossibleValuesParser::new(profile::INVESTMENT_STAGES.iter().copied()))]
        stages: Vec<String>,
        /// Geographic region; repeat for any-of
        #[arg(short, long = "geo", value_parser = PossibleValuesParser::new(profile::GEOGRAPHIC_REGIONS.iter().copied()))]
        geo: Vec<String>,
        /// Page size (default 20)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        #[arg(long)]
        offset: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Full profile for one investor
    Show { id: i64 },
    /// Contact details for one investor (JSON)
    Contact { id: i64 },
    /// Storage and cache statistics
    Stats,
    /// Print the filter vocabularies
    Filters,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut cfg = Config::from_env()?;
    if let Some(db) = cli.db {
        cfg.db_path = db;
    }

    let result = match cli.command {
        Commands::Init => {
            let conn = open(&cfg)?;
            match seed_store(&conn)? {
                Some(n) => println!("Seeded {} investor profiles into {}", n, cfg.db_path.display()),
                None => println!("Database already holds {} profiles; not seeding.", db::count_profiles(&conn)?),
            }
            Ok(())
        }
        Commands::Refresh { force } => {
            let conn = open(&cfg)?;
            let outcome = refresh(&conn, &cfg, force).await;
            println!("{}", serde_json::to_string(&outcome)?);
            Ok(())
        }
        Commands::List { json } => {
            let conn = open(&cfg)?;
            let all = db::all_profiles(&conn)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else if all.is_empty() {
                println!("No profiles stored. Run 'init' or 'refresh' first.");
            } else {
                print_table(&all);
                println!("\n{} profiles", all.len());
            }
            Ok(())
        }
        Commands::Search { industry, stages, geo, limit, offset, json } => {
            let conn = open(&cfg)?;
            let query = SearchQuery {
                industry,
                stages,
                geographic_focus: geo,
                limit,
                offset,
            };
            let page = db::search_profiles(&conn, &query)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }
            if page.vcs.is_empty() {
                println!("No investors match ({} total).", page.total);
                return Ok(());
            }
            print_table(&page.vcs);
            println!(
                "\nShowing {}-{} of {} matches",
                query.offset() + 1,
                query.offset() + page.vcs.len(),
                page.total
            );
            Ok(())
        }
        Commands::Show { id } => {
            let conn = open(&cfg)?;
            let stored = find(&conn, id)?;
            print_profile(&stored);
            Ok(())
        }
        Commands::Contact { id } => {
            let conn = open(&cfg)?;
            let stored = find(&conn, id)?;
            println!("{}", serde_json::to_string_pretty(&ContactCard::from(&stored))?);
            Ok(())
        }
        Commands::Stats => {
            let conn = open(&cfg)?;
            let s = db::get_stats(&conn)?;
            println!("Profiles:       {}", s.profiles);
            println!("Verified:       {}", s.verified);
            println!("Firms:          {}", s.firms);
            println!("With portfolio: {}", s.with_portfolio);
            match (s.cached_records, s.cached_at_ms) {
                (Some(n), Some(at)) => {
                    let age_ms = (chrono::Utc::now().timestamp_millis() - at).max(0) as u64;
                    let age = Duration::from_millis(age_ms);
                    let state = if age_ms < cfg.freshness.num_milliseconds().max(0) as u64 {
                        "fresh"
                    } else {
                        "stale"
                    };
                    println!("Cache:          {} records, {} old ({})", n, format_duration(age), state);
                }
                _ => println!("Cache:          empty"),
            }
            Ok(())
        }
        Commands::Filters => {
            print_vocabulary("Industries", profile::INDUSTRIES);
            print_vocabulary("Stages", profile::INVESTMENT_STAGES);
            print_vocabulary("Check sizes", profile::CHECK_SIZES);
            print_vocabulary("Regions", profile::GEOGRAPHIC_REGIONS);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn open(cfg: &Config) -> anyhow::Result<Connection> {
    let conn = db::connect(&cfg.db_path)?;
    db::init_schema(&conn)?;
    Ok(conn)
}

fn find(conn: &Connection, id: i64) -> anyhow::Result<StoredProfile> {
    match db::get_profile(conn, id)? {
        Some(stored) => Ok(stored),
        None => bail!("Investor {} not found", id),
    }
}

/// Seed an empty store. Returns `None` when profiles already exist.
fn seed_store(conn: &Connection) -> anyhow::Result<Option<usize>> {
    if db::count_profiles(conn)? > 0 {
        return Ok(None);
    }
    let seed = catalog::seed();
    for p in &seed {
        db::insert_profile(conn, p)?;
    }
    Ok(Some(seed.len()))
}

/// Run the harvest gate against the configured listing and swap the
/// stored profile set. Never fails: problems are reported in the outcome.
async fn refresh(conn: &Connection, cfg: &Config, force: bool) -> RefreshOutcome {
    match HttpSource::new(cfg.listing_url.clone(), cfg.fetch_timeout) {
        Ok(source) => refresh_from(conn, Arc::new(source), cfg, force).await,
        Err(e) => {
            error!("Cannot build HTTP client: {}", e);
            RefreshOutcome::failed()
        }
    }
}

async fn refresh_from(
    conn: &Connection,
    source: Arc<dyn DocumentSource>,
    cfg: &Config,
    force: bool,
) -> RefreshOutcome {
    let snapshot = db::load_cache_entry(conn).unwrap_or_else(|e| {
        warn!("Ignoring unreadable cache snapshot: {:#}", e);
        None
    });
    let cache = Arc::new(ProfileCache::with_entry(snapshot));
    if force {
        info!("Forced refresh, ignoring cache freshness");
    }
    let harvester = Harvester::new(source, cache.clone(), cfg.freshness, cfg.curated_augmentation)
        .forced(force);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Harvesting {}", cfg.listing_url));
    pb.enable_steady_tick(Duration::from_millis(120));
    let harvest = harvester.obtain().await;
    pb.finish_and_clear();

    info!(
        "Harvested {} profiles from {} (from cache: {})",
        harvest.profiles.len(),
        harvest.origin,
        harvest.from_cache()
    );

    let stored = db::replace_profiles(conn, &harvest.profiles)
        .and_then(|count| db::save_cache_entry(conn, cache.get().as_ref()).map(|_| count));
    match stored {
        Ok(count) => RefreshOutcome { success: true, count },
        Err(e) => {
            error!("Storing refreshed profiles failed: {:#}", e);
            RefreshOutcome::failed()
        }
    }
}

fn print_table(rows: &[StoredProfile]) {
    println!(
        "{:>4} | {:<22} | {:<22} | {:<20} | {:<24} | {:<15} | {:<20}",
        "id", "Name", "Firm", "Title", "Stages", "Check", "Regions"
    );
    println!("{}", "-".repeat(145));

    for r in rows {
        let p = &r.profile;
        let check = match (&p.check_size_min, &p.check_size_max) {
            (Some(min), Some(max)) => format!("{}-{}", min, max),
            (Some(one), None) | (None, Some(one)) => one.clone(),
            (None, None) => "-".into(),
        };
        println!(
            "{:>4} | {:<22} | {:<22} | {:<20} | {:<24} | {:<15} | {:<20}",
            r.id,
            truncate(&p.name, 22),
            truncate(&p.firm, 22),
            truncate(&p.title, 20),
            truncate(&p.investment_stages.join(", "), 24),
            truncate(&check, 15),
            truncate(&p.geographic_focus.join(", "), 20),
        );
    }
}

fn print_profile(stored: &StoredProfile) {
    let p = &stored.profile;
    let verified = if p.is_verified { " (verified)" } else { "" };
    println!("#{} {}{}", stored.id, p.name, verified);
    println!("{} at {}", p.title, p.firm);
    println!();
    println!("Email:      {}", p.email);
    println!("Website:    {}", p.website.as_deref().unwrap_or("-"));
    println!("Twitter:    {}", p.twitter_handle.as_deref().unwrap_or("-"));
    println!("Stages:     {}", p.investment_stages.join(", "));
    println!("Sectors:    {}", p.sectors.join(", "));
    println!(
        "Check size: {} - {}",
        p.check_size_min.as_deref().unwrap_or("?"),
        p.check_size_max.as_deref().unwrap_or("?")
    );
    println!("Regions:    {}", p.geographic_focus.join(", "));
    if !p.portfolio_companies.is_empty() {
        println!("Portfolio:  {}", p.portfolio_companies.join(", "));
    }
    println!();
    println!("{}", p.bio);
}

fn print_vocabulary(label: &str, values: &[&str]) {
    println!("{}:", label);
    for v in values {
        println!("  {}", v);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86_400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86_400, (secs % 86_400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::fetch::FetchError;
    use crate::harvest::CacheEntry;

    struct Offline;

    #[async_trait]
    impl DocumentSource for Offline {
        async fn fetch(&self) -> Result<String, FetchError> {
            Err(FetchError::Network("connection refused".into()))
        }
    }

    fn test_config(listing_url: &str) -> Config {
        Config {
            listing_url: listing_url.to_string(),
            db_path: PathBuf::from(":memory:"),
            freshness: chrono::Duration::hours(24),
            curated_augmentation: true,
            fetch_timeout: Some(Duration::from_secs(5)),
        }
    }

    /// Store seeded with the curated list plus a fresh snapshot of it.
    fn seeded_with_snapshot() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        db::replace_profiles(&conn, &catalog::curated()).unwrap();
        let entry = CacheEntry {
            records: catalog::curated(),
            fetched_at_epoch_millis: chrono::Utc::now().timestamp_millis(),
        };
        db::save_cache_entry(&conn, Some(&entry)).unwrap();
        conn
    }

    #[tokio::test]
    async fn forced_refresh_offline_keeps_cached_profiles() {
        let conn = seeded_with_snapshot();
        let cfg = test_config("http://127.0.0.1:9/investors");

        let outcome = refresh_from(&conn, Arc::new(Offline), &cfg, true).await;
        assert_eq!(outcome, RefreshOutcome { success: true, count: 13 });
        assert_eq!(db::count_profiles(&conn).unwrap(), 13);
        let snapshot = db::load_cache_entry(&conn).unwrap().unwrap();
        assert_eq!(snapshot.records.len(), 13);
    }

    #[tokio::test]
    async fn forced_refresh_against_unreachable_listing() {
        let conn = seeded_with_snapshot();
        let outcome = refresh(&conn, &test_config("http://127.0.0.1:9/investors"), true).await;
        assert_eq!(outcome, RefreshOutcome { success: true, count: 13 });
        assert!(db::load_cache_entry(&conn).unwrap().is_some());
    }

    #[tokio::test]
    async fn storage_failure_reported_in_outcome() {
        let conn = seeded_with_snapshot();
        conn.execute_batch("DROP TABLE profiles").unwrap();
        let outcome = refresh_from(&conn, Arc::new(Offline), &test_config("http://127.0.0.1:9/"), false).await;
        assert_eq!(outcome, RefreshOutcome::failed());
    }

    #[tokio::test]
    async fn unusable_listing_url_reported_in_outcome() {
        let conn = seeded_with_snapshot();
        let outcome = refresh(&conn, &test_config("not a url"), false).await;
        assert_eq!(outcome, RefreshOutcome::failed());
        assert_eq!(db::count_profiles(&conn).unwrap(), 13);
    }

    #[test]
    fn init_seeds_empty_store_once() {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        assert_eq!(seed_store(&conn).unwrap(), Some(12));
        let first = db::get_profile(&conn, 1).unwrap().unwrap();
        assert_eq!(first.profile.name, "Ann Miura-Ko");
        assert!(first.profile.image_url.is_some());
        assert_eq!(seed_store(&conn).unwrap(), None);
        assert_eq!(db::count_profiles(&conn).unwrap(), 12);
    }

    #[test]
    fn truncate_keeps_width() {
        assert_eq!(truncate("Floodgate", 22), "Floodgate");
        assert_eq!(truncate("Andreessen Horowitz Growth", 12), "Andreesse...");
        assert_eq!(truncate("Andreessen Horowitz Growth", 12).chars().count(), 12);
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(7_260)), "2h 1m");
        assert_eq!(format_duration(Duration::from_secs(90_000)), "1d 1h");
    }

    #[test]
    fn cli_parses_filters() {
        let cli = Cli::try_parse_from([
            "vc_directory", "search", "--stage", "Seed", "--stage", "Series A", "--geo", "Europe", "-n", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Search { stages, geo, limit, .. } => {
                assert_eq!(stages, vec!["Seed", "Series A"]);
                assert_eq!(geo, vec!["Europe"]);
                assert_eq!(limit, Some(5));
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn cli_rejects_unknown_stage() {
        assert!(Cli::try_parse_from(["vc_directory", "search", "--stage", "Series Z"]).is_err());
    }

    #[test]
    fn cli_global_db_flag() {
        let cli = Cli::try_parse_from(["vc_directory", "refresh", "--force", "--db", "/tmp/x.sqlite"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.sqlite")));
        assert!(matches!(cli.command, Commands::Refresh { force: true }));
    }
}
