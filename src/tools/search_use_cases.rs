//! search_use_cases tool: filtered LIKE search over the collected corpus

use crate::error::{Result, UseCasesError};
use crate::server::{SearchFilters, UseCasesServer};
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchUseCasesParams {
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub technology: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::deserializers::de_option_usize_forgiving"
    )]
    pub limit: Option<usize>,
}

impl UseCasesServer {
    /// Handle the search_use_cases tool call
    pub async fn handle_search_use_cases(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| UseCasesError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: SearchUseCasesParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                UseCasesError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let filters = SearchFilters {
            category: params.category,
            industry: params.industry,
            technology: params.technology,
            limit: params.limit.unwrap_or(20).clamp(1, 100),
        };

        let use_cases = self.db.search_use_cases(&params.query, &filters).await?;

        if use_cases.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(
                "No use cases found matching your criteria.",
            )]));
        }

        let results: String = use_cases
            .iter()
            .map(|uc| {
                format!(
                    "**{}**\n{}\nCategory: {}\nIndustry: {}\nTechnologies: {}\nSource: {}\n\n",
                    uc.title,
                    uc.summary,
                    uc.category,
                    uc.industry.as_deref().unwrap_or("N/A"),
                    uc.technology_keywords.join(", "),
                    uc.source_url
                )
            })
            .collect();

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Found {} use cases:\n\n{}",
            use_cases.len(),
            results
        ))]))
    }
}
