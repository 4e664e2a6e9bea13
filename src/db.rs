use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::types::{ToSql, Type};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::harvest::CacheEntry;
use crate::profile::{InvestorProfile, SearchPage, SearchQuery, StoredProfile};

pub fn connect(path: &Path) -> Result<Connection> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating database directory {}", dir.display()))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("opening database {}", path.display()))?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS profiles (
            id                  INTEGER PRIMARY KEY,
            name                TEXT NOT NULL,
            title               TEXT NOT NULL,
            firm                TEXT NOT NULL,
            bio                 TEXT NOT NULL DEFAULT '',
            email               TEXT NOT NULL,
            website             TEXT,
            twitter_handle      TEXT,
            image_url           TEXT,
            is_verified         BOOLEAN NOT NULL DEFAULT 0,
            investment_stages   TEXT NOT NULL DEFAULT '[]',
            sectors             TEXT NOT NULL DEFAULT '[]',
            check_size_min      TEXT,
            check_size_max      TEXT,
            geographic_focus    TEXT NOT NULL DEFAULT '[]',
            portfolio_companies TEXT NOT NULL DEFAULT '[]',
            created_at          TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE INDEX IF NOT EXISTS idx_profiles_firm ON profiles(firm);

        -- Snapshot of the in-memory harvest cache slot
        CREATE TABLE IF NOT EXISTS harvest_cache (
            id            INTEGER PRIMARY KEY CHECK (id = 1),
            records       TEXT NOT NULL,
            fetched_at_ms INTEGER NOT NULL
        );
        ",
    )?;
    Ok(())
}

// ── Profiles ──

const PROFILE_COLUMNS: &str = "id, name, title, firm, bio, email, website, twitter_handle, image_url,
     is_verified, investment_stages, sectors, check_size_min, check_size_max,
     geographic_focus, portfolio_companies";

const INSERT_PROFILE: &str = "INSERT INTO profiles
     (name, title, firm, bio, email, website, twitter_handle, image_url, is_verified,
      investment_stages, sectors, check_size_min, check_size_max, geographic_focus,
      portfolio_companies)
     VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14,?15)";

fn execute_insert(stmt: &mut rusqlite::Statement<'_>, p: &InvestorProfile) -> Result<i64> {
    let id = stmt.insert(rusqlite::params![
        p.name,
        p.title,
        p.firm,
        p.bio,
        p.email,
        p.website,
        p.twitter_handle,
        p.image_url,
        p.is_verified,
        serde_json::to_string(&p.investment_stages)?,
        serde_json::to_string(&p.sectors)?,
        p.check_size_min,
        p.check_size_max,
        serde_json::to_string(&p.geographic_focus)?,
        serde_json::to_string(&p.portfolio_companies)?,
    ])?;
    Ok(id)
}

/// Insert one profile and return its assigned id.
pub fn insert_profile(conn: &Connection, profile: &InvestorProfile) -> Result<i64> {
    let mut stmt = conn.prepare(INSERT_PROFILE)?;
    execute_insert(&mut stmt, profile)
}

/// Swap the whole profile set in one transaction. Ids restart from 1.
pub fn replace_profiles(conn: &Connection, profiles: &[InvestorProfile]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM profiles", [])?;
    {
        let mut stmt = tx.prepare(INSERT_PROFILE)?;
        for p in profiles {
            execute_insert(&mut stmt, p)?;
        }
    }
    tx.commit()?;
    Ok(profiles.len())
}

fn tag_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn stored_from_row(row: &Row<'_>) -> rusqlite::Result<StoredProfile> {
    Ok(StoredProfile {
        id: row.get(0)?,
        profile: InvestorProfile {
            name: row.get(1)?,
            title: row.get(2)?,
            firm: row.get(3)?,
            bio: row.get(4)?,
            email: row.get(5)?,
            website: row.get(6)?,
            twitter_handle: row.get(7)?,
            image_url: row.get(8)?,
            is_verified: row.get(9)?,
            investment_stages: tag_column(row, 10)?,
            sectors: tag_column(row, 11)?,
            check_size_min: row.get(12)?,
            check_size_max: row.get(13)?,
            geographic_focus: tag_column(row, 14)?,
            portfolio_companies: tag_column(row, 15)?,
        },
    })
}

pub fn get_profile(conn: &Connection, id: i64) -> Result<Option<StoredProfile>> {
    let sql = format!("SELECT {} FROM profiles WHERE id = ?1", PROFILE_COLUMNS);
    let profile = conn
        .query_row(&sql, [id], stored_from_row)
        .optional()?;
    Ok(profile)
}

pub fn all_profiles(conn: &Connection) -> Result<Vec<StoredProfile>> {
    let sql = format!("SELECT {} FROM profiles ORDER BY id", PROFILE_COLUMNS);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], stored_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn count_profiles(conn: &Connection) -> Result<usize> {
    let n: usize = conn.query_row("SELECT COUNT(*) FROM profiles", [], |r| r.get(0))?;
    Ok(n)
}

// ── Search ──

/// Filter, count, then page. Each filter is skipped when unset or empty.
///
/// `industry` matches as a case-insensitive substring of any sector; stage
/// and region filters match when the profile shares at least one value.
pub fn search_profiles(conn: &Connection, query: &SearchQuery) -> Result<SearchPage> {
    let mut conditions = Vec::new();
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(industry) = query.industry.as_deref().filter(|s| !s.is_empty()) {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM json_each(profiles.sectors) AS sec
                     WHERE instr(lower(sec.value), lower(?{})) > 0)",
            params.len() + 1
        ));
        params.push(Box::new(industry.to_string()));
    }
    if !query.stages.is_empty() {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM json_each(profiles.investment_stages) AS st
                     WHERE st.value IN (SELECT value FROM json_each(?{})))",
            params.len() + 1
        ));
        params.push(Box::new(serde_json::to_string(&query.stages)?));
    }
    if !query.geographic_focus.is_empty() {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM json_each(profiles.geographic_focus) AS geo
                     WHERE geo.value IN (SELECT value FROM json_each(?{})))",
            params.len() + 1
        ));
        params.push(Box::new(serde_json::to_string(&query.geographic_focus)?));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };
    let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let total: usize = conn.query_row(
        &format!("SELECT COUNT(*) FROM profiles{}", where_clause),
        param_refs.as_slice(),
        |r| r.get(0),
    )?;

    let sql = format!(
        "SELECT {} FROM profiles{} ORDER BY id LIMIT {} OFFSET {}",
        PROFILE_COLUMNS,
        where_clause,
        query.limit(),
        query.offset()
    );
    let mut stmt = conn.prepare(&sql)?;
    let vcs = stmt
        .query_map(param_refs.as_slice(), stored_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchPage { vcs, total })
}

// ── Harvest cache snapshot ──

pub fn load_cache_entry(conn: &Connection) -> Result<Option<CacheEntry>> {
    let row: Option<(String, i64)> = conn
        .query_row(
            "SELECT records, fetched_at_ms FROM harvest_cache WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .optional()?;
    match row {
        Some((records, fetched_at_ms)) => {
            let records = serde_json::from_str(&records).context("decoding cached records")?;
            Ok(Some(CacheEntry {
                records,
                fetched_at_epoch_millis: fetched_at_ms,
            }))
        }
        None => Ok(None),
    }
}

/// Mirror the cache slot: `None` clears the snapshot.
pub fn save_cache_entry(conn: &Connection, entry: Option<&CacheEntry>) -> Result<()> {
    match entry {
        Some(e) => {
            conn.execute(
                "INSERT OR REPLACE INTO harvest_cache (id, records, fetched_at_ms) VALUES (1, ?1, ?2)",
                rusqlite::params![serde_json::to_string(&e.records)?, e.fetched_at_epoch_millis],
            )?;
        }
        None => {
            conn.execute("DELETE FROM harvest_cache", [])?;
        }
    }
    Ok(())
}

// ── Stats ──

pub struct Stats {
    pub profiles: usize,
    pub verified: usize,
    pub firms: usize,
    pub with_portfolio: usize,
    pub cached_records: Option<usize>,
    pub cached_at_ms: Option<i64>,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let profiles = count_profiles(conn)?;
    let verified: usize =
        conn.query_row("SELECT COUNT(*) FROM profiles WHERE is_verified = 1", [], |r| r.get(0))?;
    let firms: usize =
        conn.query_row("SELECT COUNT(DISTINCT firm) FROM profiles", [], |r| r.get(0))?;
    let with_portfolio: usize = conn.query_row(
        "SELECT COUNT(*) FROM profiles WHERE json_array_length(portfolio_companies) > 0",
        [],
        |r| r.get(0),
    )?;
    let cached: Option<(usize, i64)> = conn
        .query_row(
            "SELECT json_array_length(records), fetched_at_ms FROM harvest_cache WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .optional()?;
    Ok(Stats {
        profiles,
        verified,
        firms,
        with_portfolio,
        cached_records: cached.map(|c| c.0),
        cached_at_ms: cached.map(|c| c.1),
    })
}
