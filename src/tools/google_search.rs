//! google_search tool: Custom Search proxy with configuration gating

use crate::error::{Result, UseCasesError};
use crate::search::SearchOptions;
use crate::server::UseCasesServer;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GoogleSearchParams {
    pub query: String,
    #[serde(
        default,
        deserialize_with = "crate::deserializers::de_option_usize_forgiving"
    )]
    pub limit: Option<usize>,
    #[serde(default)]
    pub site: Option<String>,
}

impl UseCasesServer {
    /// Handle the google_search tool call
    pub async fn handle_google_search(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| UseCasesError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: GoogleSearchParams = serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| UseCasesError::Serialization {
                message: format!("Invalid parameters: {}", e),
            })?;

        if !self.search.is_configured() {
            let status = self.search.configuration_status();
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Google Search is not configured.\n\nStatus:\n- API key: {}\n- Custom Search Engine ID: {}\n\nSet the GOOGLE_SEARCH_API_KEY and GOOGLE_SEARCH_CX environment variables.",
                if status.has_api_key { "ok" } else { "missing" },
                if status.has_cx { "ok" } else { "missing" },
            ))]));
        }

        let options = SearchOptions {
            limit: params.limit,
            site: params.site.clone(),
        };
        let response = self.search.search(&params.query, &options).await;

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Google search failed: {}",
                message
            ))]));
        }

        if response.results.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(format!(
                "No results found for \"{}\".",
                params.query
            ))]));
        }

        let formatted: String = response
            .results
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                format!(
                    "**{}. {}**\nURL: {}\nSnippet: {}\n",
                    i + 1,
                    hit.title,
                    hit.url,
                    hit.snippet
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let heading = match &params.site {
            Some(site) => format!(
                "Results for \"{}\" on {} ({} of {} total):",
                params.query,
                site,
                response.results.len(),
                response.total_results
            ),
            None => format!(
                "Results for \"{}\" ({} of {} total):",
                params.query,
                response.results.len(),
                response.total_results
            ),
        };

        Ok(CallToolResult::success(vec![Content::text(format!(
            "{}\n\n{}\n\nTip: pass any of these URLs to the scrape_url tool to fetch the full article.",
            heading, formatted
        ))]))
    }
}
