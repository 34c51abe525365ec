//! detailed_help tool handler to provide structured help for tools

use crate::error::{Result, UseCasesError};
use crate::server::UseCasesServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::json;

impl UseCasesServer {
    /// Handle the detailed_help tool call
    pub async fn handle_detailed_help(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| UseCasesError::Mcp {
            message: "Missing parameters".into(),
        })?;

        let tool = args.get("tool").and_then(|v| v.as_str()).ok_or_else(|| {
            UseCasesError::Validation {
                message: "'tool' parameter is required".into(),
            }
        })?;
        let format = args
            .get("format")
            .and_then(|v| v.as_str())
            .unwrap_or("full");

        let help = match tool {
            "scrape_url" => json!({
                "name": "scrape_url",
                "description": "Scrape a page, extract fields via CSS selectors, and persist the result.",
                "arguments": {
                    "url": "string (required) — page to fetch",
                    "selectors": "object — CSS selector per field; defaults cover title/summary/date/author/category",
                    "extract_keywords": "boolean — also extract AI keywords from the page body (default: true)"
                },
                "returns": "text summary of the scraped title and extracted fields",
                "examples": [{
                    "request": {"name": "scrape_url", "arguments": {"url": "https://example.com/case-study"}},
                    "response": "Successfully scraped: ...\n\nExtracted Data:\n{...}"
                }]
            }),
            "add_source" => json!({
                "name": "add_source",
                "description": "Register a named information source with its scraping selectors.",
                "arguments": {
                    "name": "string (required)",
                    "url": "string (required)",
                    "selectors": "object (required) — {title, summary, date?, author?, category?}"
                },
                "returns": "confirmation text"
            }),
            "search_use_cases" => json!({
                "name": "search_use_cases",
                "description": "Search collected use cases by free text with optional exact filters.",
                "arguments": {
                    "query": "string (required) — matched against title, summary, and keywords",
                    "category": "string — exact category filter",
                    "industry": "string — exact industry filter",
                    "technology": "string — keyword substring filter",
                    "limit": "integer — max results (1-100, default 20)"
                },
                "returns": "formatted list of matching use cases, newest first"
            }),
            "extract_keywords" => json!({
                "name": "extract_keywords",
                "description": "Extract keywords from text; AI-lexicon mode by default, frequency mode when a category is supplied.",
                "arguments": {
                    "text": "string (required)",
                    "max_keywords": "integer — cap on returned keywords (1-50, default 10)",
                    "category": "string — switches to generic frequency-ranked extraction"
                },
                "returns": "comma-separated keyword list"
            }),
            "categorize_use_case" => json!({
                "name": "categorize_use_case",
                "description": "Categorize a use case and suggest an industry from its text.",
                "arguments": {
                    "title": "string (required)",
                    "summary": "string (required)",
                    "content": "string — optional body text"
                },
                "returns": "Category, Industry, and Keywords lines"
            }),
            "google_search" => json!({
                "name": "google_search",
                "description": "Search the web via the Google Custom Search API.",
                "arguments": {
                    "query": "string (required)",
                    "limit": "integer — max results (1-10, default 10)",
                    "site": "string — restrict to one domain"
                },
                "returns": "numbered result list with URLs and snippets"
            }),
            _ => {
                return Err(UseCasesError::Validation {
                    message: format!("Unknown tool: {}", tool),
                });
            }
        };

        let output = if format == "compact" {
            json!({
                "tool": tool,
                "summary": help.get("description").cloned().unwrap_or(json!("")),
                "arguments": help.get("arguments").cloned().unwrap_or(json!({}))
            })
        } else {
            help
        };

        Ok(CallToolResult::structured(output))
    }
}
