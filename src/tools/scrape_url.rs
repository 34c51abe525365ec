//! scrape_url tool: fetch a page, run selector extraction, persist the result

use crate::analysis::DEFAULT_MAX_AI_KEYWORDS;
use crate::error::{Result, UseCasesError};
use crate::scraping::default_selectors;
use crate::server::UseCasesServer;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};
use serde::Deserialize;
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ScrapeUrlParams {
    pub url: String,
    #[serde(default)]
    pub selectors: Option<BTreeMap<String, String>>,
    #[serde(default = "default_true")]
    pub extract_keywords: bool,
}

impl UseCasesServer {
    /// Handle the scrape_url tool call
    pub async fn handle_scrape_url(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| UseCasesError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: ScrapeUrlParams = serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| UseCasesError::Serialization {
                message: format!("Invalid parameters: {}", e),
            })?;

        let selectors = params.selectors.unwrap_or_else(default_selectors);
        let mut record = self.scraper.scrape_url(&params.url, &selectors).await;

        if record.success && params.extract_keywords {
            let keywords = self
                .extractor
                .extract_ai_keywords(&record.content, DEFAULT_MAX_AI_KEYWORDS);
            record
                .extracted_data
                .insert("keywords".to_string(), keywords.join(", "));
        }

        self.db.insert_scrape_record(&record).await?;

        if !record.success {
            let message = record
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Error scraping URL: {}",
                message
            ))]));
        }

        let extracted = serde_json::to_string_pretty(&record.extracted_data)?;
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Successfully scraped: {}\n\nExtracted Data:\n{}",
            record.title, extracted
        ))]))
    }
}
