//! Google Custom Search JSON API proxy.
//!
//! Credentials come from the environment; an unconfigured service degrades to
//! explanatory responses instead of failing server startup.

use crate::config::{RuntimeConfig, SearchConfig};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub limit: Option<usize>,
    /// Restrict results to one domain (rendered as a `site:` operator).
    pub site: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub total_results: u64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigurationStatus {
    pub has_api_key: bool,
    pub has_cx: bool,
}

pub struct GoogleSearchService {
    client: reqwest::Client,
    endpoint: String,
    max_results: usize,
    api_key: Option<String>,
    cx: Option<String>,
}

impl GoogleSearchService {
    pub fn new(config: &SearchConfig, runtime: &RuntimeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: config.endpoint.clone(),
            max_results: config.max_results,
            api_key: runtime.google_api_key.clone(),
            cx: runtime.google_cx.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.cx.is_some()
    }

    pub fn configuration_status(&self) -> ConfigurationStatus {
        ConfigurationStatus {
            has_api_key: self.api_key.is_some(),
            has_cx: self.cx.is_some(),
        }
    }

    /// Run one Custom Search request. All failure modes are folded into the
    /// response record (`success = false` plus a readable error message).
    pub async fn search(&self, query: &str, options: &SearchOptions) -> WebSearchResponse {
        let timestamp = Utc::now().to_rfc3339();

        let (api_key, cx) = match (&self.api_key, &self.cx) {
            (Some(key), Some(cx)) => (key, cx),
            _ => {
                return WebSearchResponse {
                    query: query.to_string(),
                    results: Vec::new(),
                    total_results: 0,
                    success: false,
                    error: Some(
                        "Google Search API key or Custom Search Engine ID is not configured. \
                         Set the GOOGLE_SEARCH_API_KEY and GOOGLE_SEARCH_CX environment variables."
                            .to_string(),
                    ),
                    timestamp,
                };
            }
        };

        let q = match &options.site {
            Some(site) => format!("{} site:{}", query, site),
            None => query.to_string(),
        };
        let num = options.limit.unwrap_or(self.max_results).min(self.max_results);

        debug!("google search: {:?} (num={})", q, num);
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", api_key.as_str()),
                ("cx", cx.as_str()),
                ("q", q.as_str()),
                ("num", &num.to_string()),
            ])
            .send()
            .await;

        let response = match request {
            Ok(response) => response,
            Err(e) => {
                return WebSearchResponse {
                    query: query.to_string(),
                    results: Vec::new(),
                    total_results: 0,
                    success: false,
                    error: Some(translate_error(&e.to_string())),
                    timestamp,
                };
            }
        };

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return WebSearchResponse {
                query: query.to_string(),
                results: Vec::new(),
                total_results: 0,
                success: false,
                error: Some(translate_error(&body)),
                timestamp,
            };
        }

        match response.json::<CseResponse>().await {
            Ok(parsed) => {
                let results = parsed
                    .items
                    .into_iter()
                    .map(|item| SearchHit {
                        title: item.title.unwrap_or_default(),
                        url: item.link.unwrap_or_default(),
                        snippet: item.snippet.unwrap_or_default(),
                    })
                    .collect();
                let total_results = parsed
                    .search_information
                    .and_then(|info| info.total_results)
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(0);
                WebSearchResponse {
                    query: query.to_string(),
                    results,
                    total_results,
                    success: true,
                    error: None,
                    timestamp,
                }
            }
            Err(e) => WebSearchResponse {
                query: query.to_string(),
                results: Vec::new(),
                total_results: 0,
                success: false,
                error: Some(format!("Unexpected search response: {}", e)),
                timestamp,
            },
        }
    }
}

/// Map well-known Custom Search failures to actionable messages.
fn translate_error(raw: &str) -> String {
    if raw.contains("quotaExceeded") {
        "Google Custom Search API quota exceeded. Try again later.".to_string()
    } else if raw.contains("keyInvalid") {
        "Google Search API key is invalid. Check GOOGLE_SEARCH_API_KEY.".to_string()
    } else if raw.contains("customsearchNotFound") {
        "Custom Search Engine ID is invalid. Check GOOGLE_SEARCH_CX.".to_string()
    } else {
        format!("Google search failed: {}", raw)
    }
}

#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
    #[serde(rename = "searchInformation")]
    search_information: Option<CseSearchInformation>,
}

#[derive(Debug, Deserialize)]
struct CseItem {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CseSearchInformation {
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}
