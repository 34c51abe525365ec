//! add_source tool: register an information source for later collection

use crate::error::{Result, UseCasesError};
use crate::server::{SourceConfig, SourceSelectors, UseCasesServer};
use chrono::Utc;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AddSourceParams {
    pub name: String,
    pub url: String,
    pub selectors: SourceSelectors,
}

impl UseCasesServer {
    /// Handle the add_source tool call
    pub async fn handle_add_source(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        let args = request.arguments.ok_or_else(|| UseCasesError::Mcp {
            message: "Missing parameters".into(),
        })?;
        let params: AddSourceParams = serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| UseCasesError::Serialization {
                message: format!("Invalid parameters: {}", e),
            })?;

        let now = Utc::now().to_rfc3339();
        let config = SourceConfig {
            id: Uuid::new_v4().to_string(),
            name: params.name.clone(),
            url: params.url.clone(),
            selectors: params.selectors,
            enabled: true,
            last_scraped: None,
            created_at: now.clone(),
            updated_at: now,
        };

        self.db.insert_scraping_config(&config).await?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Successfully added information source: {} ({})",
            params.name, params.url
        ))]))
    }
}
