use crate::server::{SearchFilters, UseCasesServer};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        Annotated, CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult,
        Implementation, InitializeRequestParam, InitializeResult, ListPromptsResult,
        ListResourceTemplatesResult, ListResourcesResult, ListToolsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
        ProtocolVersion, RawResource, RawResourceTemplate, ReadResourceRequestParam,
        ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo, Tool,
    },
    service::{RequestContext, RoleServer},
};
use serde_json::json;
use tracing::info;

impl ServerHandler for UseCasesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "ai-use-cases-server".to_string(),
                title: Some("AI Use Cases".to_string()),
                version: "0.1.0".to_string(),
                website_url: None,
                icons: None,
            },
            ..Default::default()
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        let mut info = self.get_info();
        info.protocol_version = request.protocol_version.clone();
        Ok(info)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("tools/list requested");

        let tools = vec![
            Tool {
                name: "scrape_url".into(),
                title: Some("Web Scraping Tool".into()),
                description: Some("Scrape AI use case data from a specified URL".into()),
                input_schema: crate::schemas::scrape_url_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "add_source".into(),
                title: Some("Add Information Source".into()),
                description: Some(
                    "Add a new information source for AI use case data collection".into(),
                ),
                input_schema: crate::schemas::add_source_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "search_use_cases".into(),
                title: Some("Search AI Use Cases".into()),
                description: Some("Search for AI use cases with various filters".into()),
                input_schema: crate::schemas::search_use_cases_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "extract_keywords".into(),
                title: Some("Extract Keywords".into()),
                description: Some("Extract relevant keywords from text content".into()),
                input_schema: crate::schemas::extract_keywords_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "categorize_use_case".into(),
                title: Some("Categorize AI Use Case".into()),
                description: Some(
                    "Automatically categorize an AI use case based on its content".into(),
                ),
                input_schema: crate::schemas::categorize_use_case_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "google_search".into(),
                title: Some("Google Search".into()),
                description: Some(
                    "Search the web via the Google Custom Search API and return titles, URLs, and snippets".into(),
                ),
                input_schema: crate::schemas::google_search_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
            Tool {
                name: "detailed_help".into(),
                title: Some("Detailed Help".into()),
                description: Some("Get detailed help for a specific tool".into()),
                input_schema: crate::schemas::detailed_help_schema(),
                icons: None,
                annotations: None,
                output_schema: None,
                meta: None,
            },
        ];

        Ok(ListToolsResult {
            tools,
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match request.name.as_ref() {
            "scrape_url" => self.handle_scrape_url(request).await.map_err(|e| e.into()),
            "add_source" => self.handle_add_source(request).await.map_err(|e| e.into()),
            "search_use_cases" => self
                .handle_search_use_cases(request)
                .await
                .map_err(|e| e.into()),
            "extract_keywords" => self
                .handle_extract_keywords(request)
                .await
                .map_err(|e| e.into()),
            "categorize_use_case" => self
                .handle_categorize_use_case(request)
                .await
                .map_err(|e| e.into()),
            "google_search" => self
                .handle_google_search(request)
                .await
                .map_err(|e| e.into()),
            "detailed_help" => self
                .handle_detailed_help(request)
                .await
                .map_err(|e| e.into()),
            _ => Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        let mut statistics = RawResource::new("statistics://overview", "statistics");
        statistics.title = Some("AI Use Cases Statistics".to_string());
        statistics.description =
            Some("Overview statistics of collected AI use cases".to_string());
        statistics.mime_type = Some("application/json".to_string());

        Ok(ListResourcesResult {
            resources: vec![Annotated {
                raw: statistics,
                annotations: None,
            }],
            next_cursor: None,
            meta: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            resource_templates: vec![Annotated {
                raw: RawResourceTemplate {
                    uri_template: "ai-use-cases://{category}/{limit}".to_string(),
                    name: "ai-use-cases".to_string(),
                    title: Some("AI Use Cases Resource".to_string()),
                    description: Some("Access AI use case data by category and limit".to_string()),
                    mime_type: Some("application/json".to_string()),
                },
                annotations: None,
            }],
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        let uri = request.uri.as_str();

        if uri == "statistics://overview" {
            let stats = self.db.get_statistics().await.map_err(McpError::from)?;
            let text = serde_json::to_string_pretty(&stats)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            return Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(text, uri)],
            });
        }

        if let Some(rest) = uri.strip_prefix("ai-use-cases://") {
            let mut parts = rest.splitn(2, '/');
            let category = parts.next().unwrap_or("all");
            let limit = parts
                .next()
                .and_then(|raw| raw.parse::<usize>().ok())
                .unwrap_or(20);

            let filters = SearchFilters {
                category: (category != "all" && !category.is_empty())
                    .then(|| category.to_string()),
                limit,
                ..Default::default()
            };
            let use_cases = self
                .db
                .search_use_cases("", &filters)
                .await
                .map_err(McpError::from)?;

            let formatted: Vec<_> = use_cases
                .iter()
                .map(|uc| {
                    json!({
                        "id": uc.id,
                        "title": uc.title,
                        "summary": uc.summary,
                        "category": uc.category,
                        "industry": uc.industry,
                        "technologies": uc.technology_keywords,
                        "source": uc.source_url,
                        "created": uc.created_at,
                    })
                })
                .collect();
            let text = serde_json::to_string_pretty(&formatted)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            return Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(text, uri)],
            });
        }

        Err(McpError::resource_not_found(
            format!("Unknown resource: {}", uri),
            Some(json!({ "uri": uri })),
        ))
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: vec![
                Prompt::new(
                    "summarize-use-case",
                    Some("Create a concise summary of an AI use case"),
                    Some(vec![
                        prompt_argument("title", "Use case title", true),
                        prompt_argument("content", "Use case body text", true),
                        prompt_argument("max_length", "Maximum summary length in characters", false),
                    ]),
                ),
                Prompt::new(
                    "suggest-sources",
                    Some("Suggest new information sources for AI use case collection"),
                    Some(vec![
                        prompt_argument("industry", "Industry to focus on", false),
                        prompt_argument("technology", "Technology to focus on", false),
                        prompt_argument("category", "Category to focus on", false),
                    ]),
                ),
                Prompt::new(
                    "analyze-trends",
                    Some("Analyze trends in AI use cases over a specified timeframe"),
                    Some(vec![
                        prompt_argument("timeframe", "Time window to analyze", true),
                        prompt_argument("category", "Category filter", false),
                        prompt_argument("industry", "Industry filter", false),
                    ]),
                ),
            ],
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        let args = request.arguments.unwrap_or_default();
        let arg = |key: &str| args.get(key).and_then(|v| v.as_str()).map(String::from);

        let (description, text) = match request.name.as_ref() {
            "summarize-use-case" => {
                let title = arg("title").unwrap_or_default();
                let content = arg("content").unwrap_or_default();
                let max_length = arg("max_length").unwrap_or_else(|| "200".to_string());
                (
                    "Create a concise summary of an AI use case",
                    format!(
                        "Please provide a concise summary (maximum {} characters) of this AI use case:\n\nTitle: {}\n\nContent: {}",
                        max_length, title, content
                    ),
                )
            }
            "suggest-sources" => {
                let industry = arg("industry").unwrap_or_else(|| "Any".to_string());
                let technology = arg("technology").unwrap_or_else(|| "Any".to_string());
                let category = arg("category").unwrap_or_else(|| "Any".to_string());
                (
                    "Suggest new information sources for AI use case collection",
                    format!(
                        "Please suggest reliable information sources for collecting AI use cases with the following criteria:\n\nIndustry: {}\nTechnology: {}\nCategory: {}\n\nInclude websites, blogs, news sources, research papers, and case study repositories that would be valuable for this collection.",
                        industry, technology, category
                    ),
                )
            }
            "analyze-trends" => {
                let timeframe = arg("timeframe").unwrap_or_default();
                let category = arg("category").unwrap_or_else(|| "All categories".to_string());
                let industry = arg("industry").unwrap_or_else(|| "All industries".to_string());
                (
                    "Analyze trends in AI use cases over a specified timeframe",
                    format!(
                        "Please analyze trends in AI use cases for the following criteria:\n\nTimeframe: {}\nCategory: {}\nIndustry: {}\n\nProvide insights on:\n1. Emerging technologies and approaches\n2. Industry adoption patterns\n3. Common challenges and solutions\n4. Future trends and predictions\n5. Key success factors",
                        timeframe, category, industry
                    ),
                )
            }
            other => {
                return Err(McpError::invalid_params(
                    format!("Unknown prompt: {}", other),
                    None,
                ));
            }
        };

        Ok(GetPromptResult {
            description: Some(description.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

fn prompt_argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(required),
    }
}
