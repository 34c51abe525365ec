//! Server module containing the UseCasesServer implementation

use crate::analysis::KeywordExtractor;
use crate::scraping::WebScraper;
use crate::search::GoogleSearchService;
use crate::store::Database;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// Submodules
pub mod db;
pub mod router;

/// Data models
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiUseCase {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source_url: String,
    pub category: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub technology_keywords: Vec<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub implementation_details: Option<String>,
    #[serde(default)]
    pub results: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// CSS selectors a source is scraped with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSelectors {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A registered information source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    pub id: String,
    pub name: String,
    pub url: String,
    pub selectors: SourceSelectors,
    pub enabled: bool,
    #[serde(default)]
    pub last_scraped: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A curated keyword list bound to a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordConfig {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub enabled: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Outcome of one scraping attempt, persisted as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRecord {
    pub url: String,
    pub title: String,
    pub content: String,
    pub extracted_data: BTreeMap<String, String>,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub timestamp: String,
}

/// Filters for use-case search
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub industry: Option<String>,
    pub technology: Option<String>,
    pub limit: usize,
}

/// Aggregate statistics over the collected corpus
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_use_cases: i64,
    pub total_sources: i64,
    pub categories: BTreeMap<String, i64>,
    pub industries: BTreeMap<String, i64>,
}

/// Main ai-use-cases server implementation
#[derive(Clone)]
pub struct UseCasesServer {
    pub db: Arc<Database>,
    pub scraper: Arc<WebScraper>,
    pub search: Arc<GoogleSearchService>,
    pub extractor: KeywordExtractor,
    pub config: Arc<crate::config::Config>,
}
