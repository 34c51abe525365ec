//! Web scraping: plain HTTP fetch first, headless Chromium as a fallback.
//!
//! The static path (reqwest + scraper) covers most pages and is much cheaper;
//! the browser path exists for JavaScript-heavy pages and is launched lazily
//! on first use, then kept alive for the life of the server.

use crate::config::ScrapingConfig;
use crate::error::{Result, UseCasesError};
use crate::server::ScrapeRecord;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chrono::Utc;
use futures_util::StreamExt;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Selector map used when the caller does not supply one.
pub fn default_selectors() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("title".to_string(), "h1, h2, .title, .headline".to_string()),
        (
            "summary".to_string(),
            ".summary, .description, .excerpt, p".to_string(),
        ),
        ("date".to_string(), ".date, .published, time".to_string()),
        ("author".to_string(), ".author, .byline".to_string()),
        ("category".to_string(), ".category, .tag".to_string()),
    ])
}

pub struct WebScraper {
    client: reqwest::Client,
    browser: Mutex<Option<Browser>>,
    config: ScrapingConfig,
}

impl WebScraper {
    pub fn new(config: &ScrapingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| UseCasesError::Scraping {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            browser: Mutex::new(None),
            config: config.clone(),
        })
    }

    /// Scrape a URL with the given selector map. Fetch failures never bubble
    /// up as errors; they produce a `success = false` record after both
    /// transports have been tried.
    pub async fn scrape_url(
        &self,
        url: &str,
        selectors: &BTreeMap<String, String>,
    ) -> ScrapeRecord {
        let timestamp = Utc::now().to_rfc3339();

        match self.fetch_static(url).await {
            Ok(html) => self.build_record(url, &html, selectors, timestamp),
            Err(static_err) => {
                if !self.config.browser_fallback {
                    return failure_record(url, static_err.to_string(), timestamp);
                }
                debug!("static fetch of {} failed ({}), trying browser", url, static_err);
                match self.fetch_rendered(url).await {
                    Ok(html) => self.build_record(url, &html, selectors, timestamp),
                    Err(browser_err) => {
                        warn!("browser fallback for {} failed: {}", url, browser_err);
                        failure_record(
                            url,
                            format!("{}; browser fallback: {}", static_err, browser_err),
                            timestamp,
                        )
                    }
                }
            }
        }
    }

    /// Shut down the shared Chromium instance, if one was ever launched.
    pub async fn close_browser(&self) {
        if let Some(mut browser) = self.browser.lock().await.take() {
            let _ = browser.close().await;
            let _ = browser.wait().await;
        }
    }

    async fn fetch_static(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn fetch_rendered(&self, url: &str) -> Result<String> {
        let mut guard = self.browser.lock().await;
        if guard.is_none() {
            let browser_config = BrowserConfig::builder()
                .no_sandbox()
                .build()
                .map_err(|e| UseCasesError::Scraping { message: e })?;
            let (browser, mut handler) =
                Browser::launch(browser_config)
                    .await
                    .map_err(|e| UseCasesError::Scraping {
                        message: format!("failed to launch browser: {}", e),
                    })?;
            // The handler stream must be polled for the browser to make progress.
            tokio::spawn(async move { while handler.next().await.is_some() {} });
            *guard = Some(browser);
        }
        let browser = guard.as_ref().ok_or_else(|| UseCasesError::Scraping {
            message: "browser unavailable".to_string(),
        })?;

        let navigate = async {
            let page = browser.new_page(url).await.map_err(|e| {
                UseCasesError::Scraping {
                    message: format!("failed to open page: {}", e),
                }
            })?;
            page.wait_for_navigation()
                .await
                .map_err(|e| UseCasesError::Scraping {
                    message: format!("navigation failed: {}", e),
                })?;
            let html = page.content().await.map_err(|e| UseCasesError::Scraping {
                message: format!("failed to read page content: {}", e),
            })?;
            let _ = page.close().await;
            Ok::<String, UseCasesError>(html)
        };

        tokio::time::timeout(Duration::from_millis(self.config.browser_timeout_ms), navigate)
            .await
            .map_err(|_| UseCasesError::Scraping {
                message: format!(
                    "browser navigation timed out after {}ms",
                    self.config.browser_timeout_ms
                ),
            })?
    }

    fn build_record(
        &self,
        url: &str,
        html: &str,
        selectors: &BTreeMap<String, String>,
        timestamp: String,
    ) -> ScrapeRecord {
        let (extracted_data, content) =
            extract_page(html, selectors, self.config.max_content_length);
        let title = extracted_data
            .get("title")
            .cloned()
            .unwrap_or_else(|| "Unknown Title".to_string());
        ScrapeRecord {
            url: url.to_string(),
            title,
            content,
            extracted_data,
            success: true,
            error: None,
            timestamp,
        }
    }
}

/// Run the selector map over a parsed document. Each selector contributes the
/// concatenated text of all its matches; the page body text is truncated to
/// `max_content` characters.
fn extract_page(
    html: &str,
    selectors: &BTreeMap<String, String>,
    max_content: usize,
) -> (BTreeMap<String, String>, String) {
    let document = Html::parse_document(html);
    let mut extracted = BTreeMap::new();

    for (key, raw_selector) in selectors {
        let selector = match Selector::parse(raw_selector) {
            Ok(s) => s,
            Err(e) => {
                warn!("skipping selector {:?} for {}: {}", raw_selector, key, e);
                continue;
            }
        };
        let mut matched = false;
        let mut text = String::new();
        for element in document.select(&selector) {
            matched = true;
            for chunk in element.text() {
                text.push_str(chunk);
            }
        }
        if matched {
            extracted.insert(key.clone(), text.trim().to_string());
        }
    }

    let content = match Selector::parse("body") {
        Ok(body) => document
            .select(&body)
            .flat_map(|e| e.text())
            .collect::<String>()
            .chars()
            .take(max_content)
            .collect(),
        Err(_) => String::new(),
    };

    (extracted, content)
}

fn failure_record(url: &str, error: String, timestamp: String) -> ScrapeRecord {
    ScrapeRecord {
        url: url.to_string(),
        title: "Unknown Title".to_string(),
        content: String::new(),
        extracted_data: BTreeMap::new(),
        success: false,
        error: Some(error),
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <h1>Chatbots in Retail</h1>
            <p class="summary">A transformer-based assistant.</p>
            <p>Second paragraph.</p>
            <span class="date">2025-03-01</span>
        </body></html>
    "#;

    #[test]
    fn extracts_first_class_fields_with_default_selectors() {
        let (extracted, content) = extract_page(PAGE, &default_selectors(), 5_000);
        assert_eq!(extracted.get("title").map(String::as_str), Some("Chatbots in Retail"));
        assert_eq!(extracted.get("date").map(String::as_str), Some("2025-03-01"));
        // Selector lists concatenate every match, like the summary paragraphs here.
        let summary = extracted.get("summary").expect("summary extracted");
        assert!(summary.contains("A transformer-based assistant."));
        assert!(summary.contains("Second paragraph."));
        // No .author/.byline in the page, so the key is absent.
        assert!(!extracted.contains_key("author"));
        assert!(content.contains("Chatbots in Retail"));
    }

    #[test]
    fn body_content_is_truncated() {
        let (_, content) = extract_page(PAGE, &default_selectors(), 10);
        assert_eq!(content.chars().count(), 10);
    }

    #[test]
    fn invalid_selectors_are_skipped() {
        let selectors = BTreeMap::from([
            ("bad".to_string(), ":::".to_string()),
            ("title".to_string(), "h1".to_string()),
        ]);
        let (extracted, _) = extract_page(PAGE, &selectors, 5_000);
        assert!(!extracted.contains_key("bad"));
        assert_eq!(extracted.get("title").map(String::as_str), Some("Chatbots in Retail"));
    }

    #[test]
    fn default_selector_map_covers_expected_fields() {
        let selectors = default_selectors();
        for key in ["title", "summary", "date", "author", "category"] {
            assert!(selectors.contains_key(key), "missing selector for {key}");
        }
    }
}
