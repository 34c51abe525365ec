//! Rule-based keyword extraction and use-case categorization.
//!
//! Everything in this module is a pure function of its string inputs and the
//! static tables in [`tables`]: no I/O, no shared mutable state, safe to call
//! from any number of concurrent handlers.

pub mod tables;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use tables::{
    AI_LEXICON, CATEGORY_INDUSTRIES, CATEGORY_TRIGGERS, FALLBACK_CATEGORY, FALLBACK_INDUSTRY,
    KEYWORD_INDUSTRIES, STOP_WORDS,
};

/// Default cap for frequency-ranked extraction.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;
/// Default cap for lexicon-aware extraction.
pub const DEFAULT_MAX_AI_KEYWORDS: usize = 15;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new("[a-zA-Z]+").expect("valid token pattern"));

/// Combined result of the categorization pipeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UseCaseAnalysis {
    pub category: String,
    pub industry: String,
    pub keywords: Vec<String>,
}

/// Stateless extraction/classification engine over the static tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Generic frequency-ranked keyword extraction.
    ///
    /// Tokens are maximal alphabetic runs, case-folded; tokens of length <= 2
    /// and stopwords are dropped. Ranking is by descending frequency with a
    /// stable sort, so equally frequent tokens keep their first-seen order.
    ///
    /// `category` is accepted for signature compatibility with the tool
    /// surface but does not influence ranking.
    pub fn extract_keywords(
        &self,
        text: &str,
        max_keywords: usize,
        _category: Option<&str>,
    ) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for token in tokenize(text) {
            if token.len() <= 2 || STOP_WORDS.contains(token.as_str()) {
                continue;
            }
            let count = counts.entry(token.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                order.push(token);
            }
        }

        let mut ranked: Vec<(String, usize)> = order
            .into_iter()
            .map(|t| {
                let n = counts[&t];
                (t, n)
            })
            .collect();
        // Vec::sort_by is stable, which keeps tie order deterministic.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(max_keywords)
            .map(|(t, _)| t)
            .collect()
    }

    /// Lexicon-aware extraction: AI/ML phrases matched by substring
    /// containment first (in lexicon order), then single technical terms in
    /// first-seen order, deduplicated and truncated to `max_keywords`.
    pub fn extract_ai_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        let lower = text.to_lowercase();

        let mut seen: HashSet<String> = HashSet::new();
        let mut keywords: Vec<String> = Vec::new();

        for phrase in AI_LEXICON {
            if lower.contains(phrase) && seen.insert((*phrase).to_string()) {
                keywords.push((*phrase).to_string());
            }
        }

        for token in tokenize(text) {
            if token.len() > 3 && !STOP_WORDS.contains(token.as_str()) && seen.insert(token.clone())
            {
                keywords.push(token);
            }
        }

        keywords.truncate(max_keywords);
        keywords
    }

    /// Score each category by the number of its trigger phrases contained in
    /// the concatenated text; each trigger contributes at most one point.
    /// Only a strictly greater score replaces the current best, so ties keep
    /// the earliest-declared category. No match at all yields `"Other"`.
    pub fn categorize_use_case(
        &self,
        title: &str,
        summary: &str,
        content: Option<&str>,
    ) -> String {
        let full_text =
            format!("{} {} {}", title, summary, content.unwrap_or("")).to_lowercase();

        let mut best_category = FALLBACK_CATEGORY;
        let mut max_score = 0usize;

        for (category, triggers) in CATEGORY_TRIGGERS {
            let score = triggers.iter().filter(|t| full_text.contains(*t)).count();
            if score > max_score {
                max_score = score;
                best_category = category;
            }
        }

        best_category.to_string()
    }

    /// Map a category (and, failing that, individual keywords) to an
    /// industry label. Category matching is bidirectional substring
    /// containment against the table keys; the keyword fallback returns the
    /// first industry whose key occurs inside a keyword. `"Technology"` is
    /// the terminal fallback.
    pub fn suggest_industry(&self, category: &str, keywords: &[String]) -> String {
        for (key, industries) in CATEGORY_INDUSTRIES {
            if category.contains(key) || key.contains(category) {
                return industries[0].to_string();
            }
        }

        for keyword in keywords {
            for (key, industry) in KEYWORD_INDUSTRIES {
                if keyword.contains(key) {
                    return (*industry).to_string();
                }
            }
        }

        FALLBACK_INDUSTRY.to_string()
    }

    /// Full categorization pipeline: AI keywords from the concatenated text,
    /// category from the trigger tables, industry from category + keywords.
    pub fn analyze_use_case(
        &self,
        title: &str,
        summary: &str,
        content: Option<&str>,
    ) -> UseCaseAnalysis {
        let category = self.categorize_use_case(title, summary, content);
        let full_text = format!("{} {} {}", title, summary, content.unwrap_or(""));
        let keywords = self.extract_ai_keywords(&full_text, DEFAULT_MAX_AI_KEYWORDS);
        let industry = self.suggest_industry(&category, &keywords);

        UseCaseAnalysis {
            category,
            industry,
            keywords,
        }
    }
}

/// Lower-cased maximal alphabetic runs, in document order.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_non_alphabetic() {
        assert_eq!(
            tokenize("Real-Time ETL, v2.0!"),
            vec!["real", "time", "etl", "v"]
        );
    }

    #[test]
    fn extract_keywords_ranks_by_frequency() {
        let ex = KeywordExtractor::new();
        let text = "fraud detection detects fraud, fraud models and detection pipelines";
        let keywords = ex.extract_keywords(text, 3, None);
        assert_eq!(keywords[0], "fraud");
        assert_eq!(keywords[1], "detection");
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn extract_keywords_breaks_ties_by_first_seen_order() {
        let ex = KeywordExtractor::new();
        // Every surviving token occurs exactly once.
        let keywords = ex.extract_keywords("zebra apple mango", 10, None);
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn extract_keywords_drops_short_tokens_and_stopwords() {
        let ex = KeywordExtractor::new();
        let keywords = ex.extract_keywords("the ai of an ML api", 10, None);
        // "ai", "of", "an", "ml" are too short; "the" is a stopword.
        assert_eq!(keywords, vec!["api"]);
    }

    #[test]
    fn extract_keywords_is_total_on_empty_input() {
        let ex = KeywordExtractor::new();
        assert!(ex.extract_keywords("", 10, None).is_empty());
        assert!(ex.extract_keywords("...!!!123", 10, None).is_empty());
    }

    #[test]
    fn category_parameter_does_not_change_output() {
        let ex = KeywordExtractor::new();
        let text = "predictive maintenance for wind turbines";
        assert_eq!(
            ex.extract_keywords(text, 10, None),
            ex.extract_keywords(text, 10, Some("Data Analytics"))
        );
    }

    #[test]
    fn ai_keywords_prioritize_lexicon_phrases() {
        let ex = KeywordExtractor::new();
        let keywords =
            ex.extract_ai_keywords("Our Machine Learning platform uses TensorFlow daily", 15);
        // Lexicon matches come first, in lexicon order.
        let ml = keywords.iter().position(|k| k == "machine learning");
        let platform = keywords.iter().position(|k| k == "platform");
        assert!(ml.is_some());
        assert!(ml < platform);
        assert!(keywords.contains(&"tensorflow".to_string()));
    }

    #[test]
    fn ai_keywords_respect_max_and_dedup() {
        let ex = KeywordExtractor::new();
        let keywords = ex.extract_ai_keywords("chatbot chatbot chatbot automation", 2);
        assert_eq!(keywords.len(), 2);
        let unique: HashSet<&String> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
    }

    #[test]
    fn ai_lexicon_matches_inside_compound_words() {
        let ex = KeywordExtractor::new();
        // Substring containment is deliberate: "ai" occurs inside "retail".
        let keywords = ex.extract_ai_keywords("retail", 15);
        assert!(keywords.contains(&"ai".to_string()));
    }

    #[test]
    fn categorize_empty_input_is_other() {
        let ex = KeywordExtractor::new();
        assert_eq!(ex.categorize_use_case("", "", Some("")), "Other");
        assert_eq!(ex.categorize_use_case("", "", None), "Other");
    }

    #[test]
    fn categorize_is_deterministic() {
        let ex = KeywordExtractor::new();
        let a = ex.categorize_use_case("Fraud detection", "credit risk scoring", None);
        let b = ex.categorize_use_case("Fraud detection", "credit risk scoring", None);
        assert_eq!(a, b);
    }

    #[test]
    fn categorize_prefers_highest_trigger_count() {
        let ex = KeywordExtractor::new();
        let category = ex.categorize_use_case(
            "New Chatbot Launches",
            "A retail company uses a transformer-based chatbot for customer service.",
            Some(""),
        );
        // Retail scores 3 triggers (retail, customer, customer service)
        // against NLP's 2 (chatbot, transformer).
        assert_eq!(category, "E-commerce & Retail");
    }

    #[test]
    fn categorize_tie_keeps_earliest_declared_category() {
        let ex = KeywordExtractor::new();
        // "chatbot" scores Natural Language Processing once; "surveillance"
        // scores Computer Vision once. NLP is declared first and must win.
        let category = ex.categorize_use_case("chatbot surveillance", "", None);
        assert_eq!(category, "Natural Language Processing");
    }

    #[test]
    fn suggest_industry_category_match_returns_first_label() {
        let ex = KeywordExtractor::new();
        assert_eq!(
            ex.suggest_industry("Healthcare & Medical", &[]),
            "Healthcare"
        );
        assert_eq!(ex.suggest_industry("Finance & Banking", &[]), "Banking");
    }

    #[test]
    fn suggest_industry_keyword_fallback() {
        let ex = KeywordExtractor::new();
        assert_eq!(
            ex.suggest_industry("Unknown Category", &["banking platform".to_string()]),
            "Banking"
        );
    }

    #[test]
    fn suggest_industry_final_fallback() {
        let ex = KeywordExtractor::new();
        assert_eq!(ex.suggest_industry("Unknown Category", &[]), "Technology");
    }

    #[test]
    fn analyze_use_case_is_idempotent() {
        let ex = KeywordExtractor::new();
        let a = ex.analyze_use_case("Radiology triage", "CNN models for medical imaging", None);
        let b = ex.analyze_use_case("Radiology triage", "CNN models for medical imaging", None);
        assert_eq!(a, b);
        assert_eq!(a.category, "Computer Vision");
    }

    #[test]
    fn analysis_keywords_feed_back_into_industry_deterministically() {
        let ex = KeywordExtractor::new();
        let result = ex.analyze_use_case(
            "Forecasting",
            "demand forecasting for manufacturing plants",
            None,
        );
        let again = ex.suggest_industry(&result.category, &result.keywords);
        assert_eq!(again, result.industry);
    }
}
