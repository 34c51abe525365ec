use crate::analysis::KeywordExtractor;
use crate::error::Result;
use crate::scraping::WebScraper;
use crate::search::GoogleSearchService;
use crate::server::UseCasesServer;
use crate::store::Database;
use std::sync::Arc;
use tracing::{info, warn};

impl UseCasesServer {
    /// Create a new ai-use-cases server instance
    pub async fn new(config: &crate::config::Config) -> Result<Self> {
        info!("Opening SQLite store at {}", config.system.database_path);
        let db = Database::open(&config.system.database_path)?;

        let scraper = WebScraper::new(&config.scraping)?;
        let search = GoogleSearchService::new(&config.search, &config.runtime);
        if !search.is_configured() {
            warn!(
                "Google search credentials not set; the google_search tool will report its configuration status"
            );
        }

        Ok(Self {
            db: Arc::new(db),
            scraper: Arc::new(scraper),
            search: Arc::new(search),
            extractor: KeywordExtractor::new(),
            config: Arc::new(config.clone()),
        })
    }

    /// Release external resources (currently just the shared browser).
    pub async fn shutdown(&self) {
        self.scraper.close_browser().await;
    }
}
