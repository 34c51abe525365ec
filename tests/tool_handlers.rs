//! Handler-level integration tests against a temporary SQLite store.
//!
//! These exercise the tool handlers directly, without a transport, which
//! keeps them hermetic: no network, no browser, no external services.

use ai_use_cases::config::Config;
use ai_use_cases::server::UseCasesServer;
use rmcp::model::CallToolRequestParam;
use serde_json::{json, Value};

async fn test_server() -> (tempfile::TempDir, UseCasesServer) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = Config::default();
    config.system.database_path = dir
        .path()
        .join("test.db")
        .to_str()
        .expect("utf8 path")
        .to_string();
    let server = UseCasesServer::new(&config).await.expect("server");
    (dir, server)
}

fn request(name: &'static str, arguments: Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: name.into(),
        arguments: arguments.as_object().cloned(),
    }
}

fn first_text(result: &rmcp::model::CallToolResult) -> String {
    let value = serde_json::to_value(result).expect("serializable result");
    value["content"][0]["text"]
        .as_str()
        .expect("text content")
        .to_string()
}

#[tokio::test]
async fn categorize_use_case_renders_category_industry_keywords() {
    let (_dir, server) = test_server().await;
    let result = server
        .handle_categorize_use_case(request(
            "categorize_use_case",
            json!({
                "title": "Clinical triage assistant",
                "summary": "Radiology imaging diagnosis support for patient care",
            }),
        ))
        .await
        .expect("handler");

    let text = first_text(&result);
    assert!(text.starts_with("Category: Healthcare & Medical"));
    assert!(text.contains("Industry: Healthcare"));
    assert!(text.contains("Keywords: "));
}

#[tokio::test]
async fn extract_keywords_dispatches_on_category_presence() {
    let (_dir, server) = test_server().await;

    // Without a category the AI lexicon applies, so the multi-word phrase
    // "machine learning" survives extraction.
    let ai = server
        .handle_extract_keywords(request(
            "extract_keywords",
            json!({"text": "machine learning in production systems"}),
        ))
        .await
        .expect("handler");
    assert!(first_text(&ai).contains("machine learning"));

    // With a category the frequency extractor runs on single tokens only.
    let generic = server
        .handle_extract_keywords(request(
            "extract_keywords",
            json!({
                "text": "machine learning in production systems",
                "category": "Machine Learning",
                "max_keywords": "3"
            }),
        ))
        .await
        .expect("handler");
    let text = first_text(&generic);
    assert!(text.contains("machine"));
    assert!(!text.contains("machine learning,"));
}

#[tokio::test]
async fn extract_keywords_requires_text() {
    let (_dir, server) = test_server().await;
    let err = server
        .handle_extract_keywords(request("extract_keywords", json!({"max_keywords": 5})))
        .await
        .expect_err("missing text should fail");
    assert!(err.to_string().contains("Invalid parameters"));
}

#[tokio::test]
async fn add_source_then_search_round_trip() {
    let (_dir, server) = test_server().await;

    let added = server
        .handle_add_source(request(
            "add_source",
            json!({
                "name": "AI case studies",
                "url": "https://example.com/cases",
                "selectors": {"title": "h1", "summary": ".summary"}
            }),
        ))
        .await
        .expect("handler");
    assert!(first_text(&added).contains("Successfully added information source: AI case studies"));

    let configs = server.db.get_scraping_configs().await.expect("configs");
    assert_eq!(configs.len(), 1);
    assert!(configs[0].enabled);

    // Nothing scraped yet, so a search over use cases comes back empty.
    let empty = server
        .handle_search_use_cases(request("search_use_cases", json!({"query": "chatbot"})))
        .await
        .expect("handler");
    assert_eq!(
        first_text(&empty),
        "No use cases found matching your criteria."
    );
}

#[tokio::test]
async fn search_use_cases_formats_stored_rows() {
    let (_dir, server) = test_server().await;
    let case = ai_use_cases::server::AiUseCase {
        id: "case-1".to_string(),
        title: "Chatbot rollout".to_string(),
        summary: "Customer service automation".to_string(),
        source_url: "https://example.com/a".to_string(),
        category: "Natural Language Processing".to_string(),
        industry: Some("Retail".to_string()),
        technology_keywords: vec!["chatbot".to_string(), "nlp".to_string()],
        publication_date: None,
        company: None,
        implementation_details: None,
        results: None,
        created_at: "2025-01-01T00:00:00Z".to_string(),
        updated_at: "2025-01-01T00:00:00Z".to_string(),
    };
    server.db.insert_use_case(&case).await.expect("insert");

    let result = server
        .handle_search_use_cases(request("search_use_cases", json!({"query": "chatbot"})))
        .await
        .expect("handler");
    let text = first_text(&result);
    assert!(text.starts_with("Found 1 use cases:"));
    assert!(text.contains("**Chatbot rollout**"));
    assert!(text.contains("Category: Natural Language Processing"));
    assert!(text.contains("Industry: Retail"));
    assert!(text.contains("Technologies: chatbot, nlp"));
}

#[tokio::test]
async fn google_search_reports_missing_configuration() {
    let (_dir, server) = test_server().await;
    // RuntimeConfig::default() carries no credentials, so the tool responds
    // with its configuration status as an error payload.
    let result = server
        .handle_google_search(request("google_search", json!({"query": "ai use cases"})))
        .await
        .expect("handler");
    let value = serde_json::to_value(&result).expect("serializable");
    assert_eq!(value["isError"], json!(true));
    let text = first_text(&result);
    assert!(text.contains("GOOGLE_SEARCH_API_KEY"));
}

#[tokio::test]
async fn detailed_help_rejects_unknown_tool() {
    let (_dir, server) = test_server().await;
    let err = server
        .handle_detailed_help(request("detailed_help", json!({"tool": "nope"})))
        .await
        .expect_err("unknown tool");
    assert!(err.to_string().contains("Unknown tool"));
}

#[tokio::test]
async fn detailed_help_compact_format_summarizes() {
    let (_dir, server) = test_server().await;
    let result = server
        .handle_detailed_help(request(
            "detailed_help",
            json!({"tool": "categorize_use_case", "format": "compact"}),
        ))
        .await
        .expect("handler");
    let value = serde_json::to_value(&result).expect("serializable");
    let structured = &value["structuredContent"];
    assert_eq!(structured["tool"], json!("categorize_use_case"));
    assert!(structured["summary"].as_str().expect("summary").len() > 10);
}
