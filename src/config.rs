use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from ai_use_cases.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub scraping: ScrapingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// System-level configuration for persistence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemConfig {
    pub database_path: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            database_path: "ai_use_cases.db".to_string(),
        }
    }
}

/// Scraper behavior: timeouts, content budget, and the browser fallback
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    pub timeout_ms: u64,
    pub browser_timeout_ms: u64,
    pub max_content_length: usize,
    pub user_agent: String,
    pub browser_fallback: bool,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            browser_timeout_ms: 30_000,
            max_content_length: 5_000,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            browser_fallback: true,
        }
    }
}

/// Google Custom Search proxy settings (credentials live in RuntimeConfig)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
            // Custom Search API caps a single request at 10 results
            max_results: 10,
        }
    }
}

/// Runtime configuration loaded exclusively from the environment
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub transport: String,
    pub http_bind: std::net::SocketAddr,
    pub http_path: String,
    pub bearer_token: Option<String>,
    pub http_sse_keepalive_sec: u64,
    pub google_api_key: Option<String>,
    pub google_cx: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "ai_use_cases=info,rmcp=info".to_string(),
            transport: "stdio".to_string(),
            http_bind: std::net::SocketAddr::from(([127, 0, 0, 1], 3000)),
            http_path: "/mcp".to_string(),
            bearer_token: None,
            http_sse_keepalive_sec: 15,
            google_api_key: None,
            google_cx: None,
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("AIUC_LOG") {
            config.log_level = level;
        }
        if let Ok(transport) = std::env::var("AIUC_TRANSPORT") {
            config.transport = transport;
        }
        if let Some(bind) = std::env::var("AIUC_HTTP_BIND")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.http_bind = bind;
        }
        if let Ok(path) = std::env::var("AIUC_HTTP_PATH") {
            config.http_path = path;
        }
        config.bearer_token = std::env::var("AIUC_BEARER_TOKEN").ok().filter(|t| !t.is_empty());
        if let Some(keepalive) = std::env::var("AIUC_HTTP_SSE_KEEPALIVE_SEC")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.http_sse_keepalive_sec = keepalive;
        }
        config.google_api_key = std::env::var("GOOGLE_SEARCH_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        config.google_cx = std::env::var("GOOGLE_SEARCH_CX")
            .ok()
            .filter(|k| !k.is_empty());

        config
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses AI_USE_CASES_CONFIG environment variable or defaults to "ai_use_cases.toml"
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("AI_USE_CASES_CONFIG")
            .unwrap_or_else(|_| "ai_use_cases.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Env-first overrides for the file-backed sections
        if let Ok(db_path) = std::env::var("AIUC_DB_PATH") {
            config.system.database_path = db_path;
        }
        if let Some(timeout) = std::env::var("AIUC_SCRAPE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.scraping.timeout_ms = timeout;
        }
        if let Ok(fallback) = std::env::var("AIUC_BROWSER_FALLBACK") {
            config.scraping.browser_fallback =
                !(fallback == "0" || fallback.eq_ignore_ascii_case("false"));
        }

        config.runtime = RuntimeConfig::load_from_env();

        Ok(config)
    }
}
