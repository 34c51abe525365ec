//! categorize_use_case tool: the full extraction/classification pipeline

use crate::error::{Result, UseCasesError};
use crate::server::UseCasesServer;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CategorizeUseCaseParams {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl UseCasesServer {
    /// Handle the categorize_use_case tool call
    pub async fn handle_categorize_use_case(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| UseCasesError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: CategorizeUseCaseParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                UseCasesError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let analysis = self.extractor.analyze_use_case(
            &params.title,
            &params.summary,
            params.content.as_deref(),
        );

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Category: {}\nIndustry: {}\nKeywords: {}",
            analysis.category,
            analysis.industry,
            analysis.keywords.join(", ")
        ))]))
    }
}
