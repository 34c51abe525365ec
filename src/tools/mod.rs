//! Tool handlers for the ai-use-cases MCP server

pub mod add_source;
pub mod categorize_use_case;
pub mod detailed_help;
pub mod extract_keywords;
pub mod google_search;
pub mod scrape_url;
pub mod search_use_cases;
