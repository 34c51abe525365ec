use serde_json::{json, Map, Value};
use std::sync::Arc;

pub fn scrape_url_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "url": {"type": "string", "format": "uri"},
            "selectors": {
                "type": "object",
                "additionalProperties": {"type": "string"},
                "description": "CSS selector per extracted field; defaults cover title/summary/date/author/category"
            },
            "extract_keywords": {"type": "boolean", "default": true}
        },
        "required": ["url"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn add_source_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "url": {"type": "string", "format": "uri"},
            "selectors": {
                "type": "object",
                "properties": {
                    "title": {"type": "string"},
                    "summary": {"type": "string"},
                    "date": {"type": "string"},
                    "author": {"type": "string"},
                    "category": {"type": "string"}
                },
                "required": ["title", "summary"]
            }
        },
        "required": ["name", "url", "selectors"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn search_use_cases_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "query": {"type": "string"},
            "category": {"type": "string"},
            "industry": {"type": "string"},
            "technology": {"type": "string"},
            "limit": {"type": ["integer", "string"], "minimum": 1, "maximum": 100, "default": 20}
        },
        "required": ["query"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn extract_keywords_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "text": {"type": "string"},
            "max_keywords": {"type": ["integer", "string"], "minimum": 1, "maximum": 50, "default": 10},
            "category": {"type": "string", "description": "When set, switches to generic frequency-ranked extraction"}
        },
        "required": ["text"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn categorize_use_case_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "title": {"type": "string"},
            "summary": {"type": "string"},
            "content": {"type": "string"}
        },
        "required": ["title", "summary"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn google_search_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "query": {"type": "string"},
            "limit": {"type": ["integer", "string"], "minimum": 1, "maximum": 10, "default": 10},
            "site": {"type": "string", "description": "Restrict results to a single domain (e.g. example.com)"}
        },
        "required": ["query"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

pub fn detailed_help_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "tool": {"type": "string", "enum": [
                "scrape_url", "add_source", "search_use_cases",
                "extract_keywords", "categorize_use_case", "google_search"
            ]},
            "format": {"type": "string", "enum": ["compact", "full"], "default": "full"}
        },
        "required": ["tool"]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}
