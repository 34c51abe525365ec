//! SQLite persistence for use cases, sources, keyword configs, and scrape results.
//!
//! One bundled-SQLite connection shared behind a tokio mutex; every statement
//! is short-lived, so handlers never hold the lock across other awaits.

use crate::error::Result;
use crate::server::{AiUseCase, KeywordConfig, ScrapeRecord, SearchFilters, SourceConfig, Statistics};
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::info;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS ai_use_cases (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    summary TEXT NOT NULL,
    source_url TEXT NOT NULL,
    category TEXT NOT NULL,
    industry TEXT,
    technology_keywords TEXT NOT NULL,
    publication_date TEXT,
    company TEXT,
    implementation_details TEXT,
    results TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS scraping_configs (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    url TEXT NOT NULL,
    selectors TEXT NOT NULL,
    enabled INTEGER DEFAULT 1,
    last_scraped TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS keyword_configs (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    keywords TEXT NOT NULL,
    category TEXT NOT NULL,
    enabled INTEGER DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS scraping_results (
    id TEXT PRIMARY KEY,
    url TEXT NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    extracted_data TEXT NOT NULL,
    success INTEGER NOT NULL,
    error TEXT,
    timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_use_cases_category ON ai_use_cases(category);
CREATE INDEX IF NOT EXISTS idx_use_cases_industry ON ai_use_cases(industry);
CREATE INDEX IF NOT EXISTS idx_use_cases_created_at ON ai_use_cases(created_at);
CREATE INDEX IF NOT EXISTS idx_scraping_configs_enabled ON scraping_configs(enabled);
";

const USE_CASE_COLUMNS: &str = "id, title, summary, source_url, category, industry, \
     technology_keywords, publication_date, company, implementation_details, results, \
     created_at, updated_at";

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        info!("SQLite store ready at {}", path);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    // AI use cases

    pub async fn insert_use_case(&self, use_case: &AiUseCase) -> Result<()> {
        let keywords = serde_json::to_string(&use_case.technology_keywords)?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO ai_use_cases
             (id, title, summary, source_url, category, industry, technology_keywords,
              publication_date, company, implementation_details, results, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                use_case.id,
                use_case.title,
                use_case.summary,
                use_case.source_url,
                use_case.category,
                use_case.industry,
                keywords,
                use_case.publication_date,
                use_case.company,
                use_case.implementation_details,
                use_case.results,
                use_case.created_at,
                use_case.updated_at,
            ],
        )?;
        Ok(())
    }

    pub async fn get_use_case(&self, id: &str) -> Result<Option<AiUseCase>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {USE_CASE_COLUMNS} FROM ai_use_cases WHERE id = ?1"
        ))?;
        let mut rows = stmt.query_map(params![id], row_to_use_case)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// LIKE search over title/summary/keywords with optional exact filters.
    pub async fn search_use_cases(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<AiUseCase>> {
        let mut sql = format!(
            "SELECT {USE_CASE_COLUMNS} FROM ai_use_cases \
             WHERE (title LIKE ?1 OR summary LIKE ?1 OR technology_keywords LIKE ?1)"
        );
        let pattern = format!("%{}%", query);
        let mut values: Vec<String> = vec![pattern];

        if let Some(category) = &filters.category {
            values.push(category.clone());
            sql.push_str(&format!(" AND category = ?{}", values.len()));
        }
        if let Some(industry) = &filters.industry {
            values.push(industry.clone());
            sql.push_str(&format!(" AND industry = ?{}", values.len()));
        }
        if let Some(technology) = &filters.technology {
            values.push(format!("%{}%", technology));
            sql.push_str(&format!(" AND technology_keywords LIKE ?{}", values.len()));
        }

        let limit = if filters.limit == 0 { 20 } else { filters.limit };
        sql.push_str(&format!(" ORDER BY created_at DESC LIMIT {}", limit));

        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(values.iter()), row_to_use_case)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    // Scraping configs

    pub async fn insert_scraping_config(&self, config: &SourceConfig) -> Result<()> {
        let selectors = serde_json::to_string(&config.selectors)?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO scraping_configs
             (id, name, url, selectors, enabled, last_scraped, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                config.id,
                config.name,
                config.url,
                selectors,
                config.enabled as i64,
                config.last_scraped,
                config.created_at,
                config.updated_at,
            ],
        )?;
        Ok(())
    }

    pub async fn get_scraping_configs(&self) -> Result<Vec<SourceConfig>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, name, url, selectors, enabled, last_scraped, created_at, updated_at
             FROM scraping_configs WHERE enabled = 1",
        )?;
        let rows = stmt.query_map([], |row| {
            let selectors: String = row.get(3)?;
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                selectors,
                row.get::<_, i64>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, String>(7)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, name, url, selectors, enabled, last_scraped, created_at, updated_at) = row?;
            out.push(SourceConfig {
                id,
                name,
                url,
                selectors: serde_json::from_str(&selectors)?,
                enabled: enabled != 0,
                last_scraped,
                created_at,
                updated_at,
            });
        }
        Ok(out)
    }

    pub async fn touch_scraping_config(&self, id: &str, timestamp: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "UPDATE scraping_configs SET last_scraped = ?1 WHERE id = ?2",
            params![timestamp, id],
        )?;
        Ok(())
    }

    // Keyword configs

    pub async fn insert_keyword_config(&self, config: &KeywordConfig) -> Result<()> {
        let keywords = serde_json::to_string(&config.keywords)?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT OR REPLACE INTO keyword_configs
             (id, name, keywords, category, enabled, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                config.id,
                config.name,
                keywords,
                config.category,
                config.enabled as i64,
                config.created_at,
                config.updated_at,
            ],
        )?;
        Ok(())
    }

    pub async fn get_keyword_configs(&self) -> Result<Vec<KeywordConfig>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, name, keywords, category, enabled, created_at, updated_at
             FROM keyword_configs WHERE enabled = 1",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, name, keywords, category, enabled, created_at, updated_at) = row?;
            out.push(KeywordConfig {
                id,
                name,
                keywords: serde_json::from_str(&keywords)?,
                category,
                enabled: enabled != 0,
                created_at,
                updated_at,
            });
        }
        Ok(out)
    }

    // Scraping results

    pub async fn insert_scrape_record(&self, record: &ScrapeRecord) -> Result<()> {
        let extracted = serde_json::to_string(&record.extracted_data)?;
        let conn = self.conn.lock().await;
        // The URL doubles as the record id so re-scrapes overwrite in place.
        conn.execute(
            "INSERT OR REPLACE INTO scraping_results
             (id, url, title, content, extracted_data, success, error, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.url,
                record.url,
                record.title,
                record.content,
                extracted,
                record.success as i64,
                record.error,
                record.timestamp,
            ],
        )?;
        Ok(())
    }

    pub async fn get_scrape_records(&self, limit: usize) -> Result<Vec<ScrapeRecord>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT url, title, content, extracted_data, success, error, timestamp
             FROM scraping_results ORDER BY timestamp DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (url, title, content, extracted, success, error, timestamp) = row?;
            out.push(ScrapeRecord {
                url,
                title,
                content,
                extracted_data: serde_json::from_str(&extracted)?,
                success: success != 0,
                error,
                timestamp,
            });
        }
        Ok(out)
    }

    // Statistics

    pub async fn get_statistics(&self) -> Result<Statistics> {
        let conn = self.conn.lock().await;
        let total_use_cases: i64 =
            conn.query_row("SELECT COUNT(*) FROM ai_use_cases", [], |row| row.get(0))?;
        let total_sources: i64 = conn.query_row(
            "SELECT COUNT(*) FROM scraping_configs WHERE enabled = 1",
            [],
            |row| row.get(0),
        )?;

        let mut categories = BTreeMap::new();
        let mut stmt =
            conn.prepare("SELECT category, COUNT(*) FROM ai_use_cases GROUP BY category")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;
        for row in rows {
            let (category, count) = row?;
            categories.insert(category, count);
        }

        let mut industries = BTreeMap::new();
        let mut stmt = conn.prepare(
            "SELECT industry, COUNT(*) FROM ai_use_cases
             WHERE industry IS NOT NULL GROUP BY industry",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;
        for row in rows {
            let (industry, count) = row?;
            industries.insert(industry, count);
        }

        Ok(Statistics {
            total_use_cases,
            total_sources,
            categories,
            industries,
        })
    }
}

fn row_to_use_case(row: &rusqlite::Row<'_>) -> rusqlite::Result<AiUseCase> {
    let keywords: String = row.get(6)?;
    Ok(AiUseCase {
        id: row.get(0)?,
        title: row.get(1)?,
        summary: row.get(2)?,
        source_url: row.get(3)?,
        category: row.get(4)?,
        industry: row.get(5)?,
        technology_keywords: serde_json::from_str(&keywords).unwrap_or_default(),
        publication_date: row.get(7)?,
        company: row.get(8)?,
        implementation_details: row.get(9)?,
        results: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}
