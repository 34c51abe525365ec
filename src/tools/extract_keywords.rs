//! extract_keywords tool: frequency-ranked or AI-lexicon extraction

use crate::error::{Result, UseCasesError};
use crate::server::UseCasesServer;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsParams {
    pub text: String,
    #[serde(
        default,
        deserialize_with = "crate::deserializers::de_option_usize_forgiving"
    )]
    pub max_keywords: Option<usize>,
    #[serde(default)]
    pub category: Option<String>,
}

impl UseCasesServer {
    /// Handle the extract_keywords tool call.
    ///
    /// A supplied `category` selects the generic frequency-ranked extractor;
    /// otherwise the AI-lexicon extractor runs.
    pub async fn handle_extract_keywords(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| UseCasesError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: ExtractKeywordsParams =
            serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                UseCasesError::Serialization {
                    message: format!("Invalid parameters: {}", e),
                }
            })?;

        let max_keywords = params.max_keywords.unwrap_or(10).clamp(1, 50);

        let keywords = match params.category.as_deref() {
            Some(category) => {
                self.extractor
                    .extract_keywords(&params.text, max_keywords, Some(category))
            }
            None => self.extractor.extract_ai_keywords(&params.text, max_keywords),
        };

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Extracted keywords: {}",
            keywords.join(", ")
        ))]))
    }
}
