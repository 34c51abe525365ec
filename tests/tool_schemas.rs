//! Integration tests for MCP tool schemas.
//!
//! These verify that the schemas exposed by the ai-use-cases MCP server have
//! the expected structure and parameter surfaces.

use ai_use_cases::schemas;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Helper to validate that a JSON schema contains the expected property
fn schema_has_property(schema: &Arc<Map<String, Value>>, property: &str) -> bool {
    schema
        .get("properties")
        .and_then(|p| p.get(property))
        .map(|p| p.is_object())
        .unwrap_or(false)
}

fn required_fields(schema: &Arc<Map<String, Value>>) -> Vec<String> {
    schema
        .get("required")
        .and_then(|r| r.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn scrape_url_schema_structure() {
    let schema = schemas::scrape_url_schema();
    assert!(schema_has_property(&schema, "url"));
    assert!(schema_has_property(&schema, "selectors"));
    assert!(schema_has_property(&schema, "extract_keywords"));
    assert_eq!(required_fields(&schema), vec!["url"]);
}

#[test]
fn add_source_schema_requires_selectors() {
    let schema = schemas::add_source_schema();
    assert_eq!(required_fields(&schema), vec!["name", "url", "selectors"]);
    let selector_required = schema["properties"]["selectors"]["required"]
        .as_array()
        .expect("selector required list");
    assert!(selector_required.contains(&Value::from("title")));
    assert!(selector_required.contains(&Value::from("summary")));
}

#[test]
fn search_use_cases_schema_structure() {
    let schema = schemas::search_use_cases_schema();
    for property in ["query", "category", "industry", "technology", "limit"] {
        assert!(
            schema_has_property(&schema, property),
            "missing property {property}"
        );
    }
    assert_eq!(required_fields(&schema), vec!["query"]);
    assert_eq!(schema["properties"]["limit"]["maximum"], 100);
}

#[test]
fn extract_keywords_schema_structure() {
    let schema = schemas::extract_keywords_schema();
    assert!(schema_has_property(&schema, "text"));
    assert!(schema_has_property(&schema, "max_keywords"));
    assert!(schema_has_property(&schema, "category"));
    assert_eq!(schema["properties"]["max_keywords"]["default"], 10);
    assert_eq!(schema["properties"]["max_keywords"]["maximum"], 50);
}

#[test]
fn categorize_use_case_schema_structure() {
    let schema = schemas::categorize_use_case_schema();
    assert_eq!(required_fields(&schema), vec!["title", "summary"]);
    assert!(schema_has_property(&schema, "content"));
}

#[test]
fn google_search_schema_caps_limit_at_api_maximum() {
    let schema = schemas::google_search_schema();
    assert_eq!(required_fields(&schema), vec!["query"]);
    assert_eq!(schema["properties"]["limit"]["maximum"], 10);
    assert!(schema_has_property(&schema, "site"));
}

#[test]
fn detailed_help_schema_lists_all_public_tools() {
    let schema = schemas::detailed_help_schema();
    let tools = schema["properties"]["tool"]["enum"]
        .as_array()
        .expect("tool enum");
    for tool in [
        "scrape_url",
        "add_source",
        "search_use_cases",
        "extract_keywords",
        "categorize_use_case",
        "google_search",
    ] {
        assert!(tools.contains(&Value::from(tool)), "missing {tool}");
    }
    assert_eq!(schema["properties"]["format"]["default"], "full");
}
