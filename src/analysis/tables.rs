//! Static reference tables for keyword extraction and categorization.
//!
//! All tables are process-wide constants; declaration order is load-bearing
//! for classification tie-breaks and industry lookup, so entries must not be
//! reordered.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English function words dropped during tokenization.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "can", "this", "that", "these",
        "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
        "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
        "what", "when", "where", "who", "whom", "which", "why", "how", "all", "any", "both",
        "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
        "same", "so", "than", "too", "very", "just", "now", "then", "here", "there",
    ]
    .into_iter()
    .collect()
});

/// AI/ML domain phrases recognized via substring containment, in priority
/// order. Multi-word phrases would be lost by tokenization, which is why the
/// whole lexicon is matched against the raw lower-cased text.
pub const AI_LEXICON: &[&str] = &[
    "artificial intelligence",
    "ai",
    "machine learning",
    "ml",
    "deep learning",
    "neural network",
    "natural language processing",
    "nlp",
    "computer vision",
    "cv",
    "robotics",
    "automation",
    "predictive analytics",
    "data science",
    "big data",
    "algorithm",
    "model",
    "training",
    "inference",
    "optimization",
    "classification",
    "regression",
    "clustering",
    "recommendation",
    "chatbot",
    "virtual assistant",
    "voice recognition",
    "speech synthesis",
    "image recognition",
    "object detection",
    "semantic analysis",
    "sentiment analysis",
    "text generation",
    "translation",
    "reinforcement learning",
    "supervised learning",
    "unsupervised learning",
    "transfer learning",
    "gpt",
    "bert",
    "transformer",
    "cnn",
    "rnn",
    "lstm",
    "gan",
    "autoencoder",
    "svm",
    "random forest",
    "gradient boosting",
    "xgboost",
    "tensorflow",
    "pytorch",
    "keras",
    "scikit-learn",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "jupyter",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "api",
    "rest",
    "graphql",
    "microservices",
    "serverless",
    "lambda",
    "sagemaker",
    "vertex ai",
    "databricks",
    "snowflake",
    "redshift",
    "bigquery",
    "elasticsearch",
    "redis",
    "mongodb",
    "postgresql",
    "mysql",
    "sql",
    "nosql",
    "data warehouse",
    "data lake",
    "etl",
    "elt",
    "real-time",
    "streaming",
    "batch processing",
    "online learning",
    "offline learning",
];

/// Category table: each category maps to the trigger phrases that score it.
/// Scanned in declaration order; ties keep the earlier category.
pub const CATEGORY_TRIGGERS: &[(&str, &[&str])] = &[
    (
        "Natural Language Processing",
        &[
            "nlp",
            "natural language",
            "text",
            "language",
            "translation",
            "sentiment",
            "semantic",
            "chatbot",
            "conversation",
            "dialogue",
            "speech",
            "voice",
            "transcription",
            "bert",
            "gpt",
            "transformer",
            "text generation",
            "text classification",
            "named entity recognition",
        ],
    ),
    (
        "Computer Vision",
        &[
            "computer vision",
            "cv",
            "image",
            "video",
            "recognition",
            "detection",
            "segmentation",
            "object detection",
            "face recognition",
            "optical character recognition",
            "ocr",
            "cnn",
            "convolutional",
            "image processing",
            "video analysis",
            "surveillance",
            "medical imaging",
        ],
    ),
    (
        "Machine Learning",
        &[
            "machine learning",
            "ml",
            "algorithm",
            "model",
            "training",
            "prediction",
            "classification",
            "regression",
            "clustering",
            "recommendation",
            "optimization",
            "supervised",
            "unsupervised",
            "reinforcement learning",
            "deep learning",
            "neural network",
            "random forest",
            "svm",
        ],
    ),
    (
        "Robotics & Automation",
        &[
            "robotics",
            "automation",
            "robot",
            "autonomous",
            "control",
            "sensor",
            "actuator",
            "industrial automation",
            "manufacturing",
            "warehouse",
            "logistics",
            "supply chain",
            "quality control",
            "inspection",
            "assembly",
            "pick and place",
        ],
    ),
    (
        "Data Analytics",
        &[
            "analytics",
            "data analysis",
            "business intelligence",
            "bi",
            "dashboard",
            "reporting",
            "visualization",
            "kpi",
            "metrics",
            "forecasting",
            "trend analysis",
            "data mining",
            "statistical analysis",
            "correlation",
            "regression analysis",
        ],
    ),
    (
        "Healthcare & Medical",
        &[
            "healthcare",
            "medical",
            "diagnosis",
            "treatment",
            "patient",
            "clinical",
            "drug",
            "pharmaceutical",
            "imaging",
            "radiology",
            "pathology",
            "genomics",
            "bioinformatics",
            "telemedicine",
            "health monitoring",
            "disease prediction",
        ],
    ),
    (
        "Finance & Banking",
        &[
            "finance",
            "banking",
            "financial",
            "investment",
            "trading",
            "risk",
            "fraud",
            "credit",
            "loan",
            "insurance",
            "compliance",
            "regulatory",
            "audit",
            "portfolio",
            "market analysis",
            "algorithmic trading",
        ],
    ),
    (
        "E-commerce & Retail",
        &[
            "e-commerce",
            "retail",
            "shopping",
            "product",
            "inventory",
            "pricing",
            "recommendation",
            "customer",
            "sales",
            "marketing",
            "advertising",
            "personalization",
            "supply chain",
            "logistics",
            "fulfillment",
            "customer service",
        ],
    ),
    (
        "Transportation & Logistics",
        &[
            "transportation",
            "logistics",
            "delivery",
            "route",
            "optimization",
            "fleet",
            "autonomous vehicle",
            "self-driving",
            "traffic",
            "navigation",
            "gps",
            "tracking",
            "supply chain",
            "warehouse",
            "inventory",
        ],
    ),
    (
        "Education & Training",
        &[
            "education",
            "learning",
            "training",
            "student",
            "course",
            "curriculum",
            "assessment",
            "personalized learning",
            "adaptive",
            "tutoring",
            "skill development",
            "certification",
            "online learning",
            "edtech",
            "educational technology",
        ],
    ),
];

/// Category → industries. The first industry in each list is the default for
/// that category. Keys are matched by bidirectional substring containment.
pub const CATEGORY_INDUSTRIES: &[(&str, &[&str])] = &[
    (
        "Healthcare & Medical",
        &["Healthcare", "Pharmaceuticals", "Medical Devices", "Biotechnology"],
    ),
    (
        "Finance & Banking",
        &["Banking", "Insurance", "Investment", "Fintech", "Cryptocurrency"],
    ),
    (
        "E-commerce & Retail",
        &["Retail", "E-commerce", "Fashion", "Consumer Goods", "Marketplace"],
    ),
    (
        "Transportation & Logistics",
        &["Transportation", "Logistics", "Automotive", "Delivery", "Supply Chain"],
    ),
    (
        "Education & Training",
        &["Education", "EdTech", "Corporate Training", "Online Learning"],
    ),
    (
        "Manufacturing",
        &["Manufacturing", "Industrial", "Automotive", "Aerospace", "Electronics"],
    ),
    (
        "Technology",
        &["Software", "SaaS", "Cloud Computing", "Cybersecurity", "IoT"],
    ),
    (
        "Media & Entertainment",
        &["Entertainment", "Gaming", "Media", "Publishing", "Streaming"],
    ),
    (
        "Real Estate",
        &["Real Estate", "Property Management", "Construction", "Architecture"],
    ),
    (
        "Energy & Utilities",
        &["Energy", "Utilities", "Renewable Energy", "Oil & Gas"],
    ),
];

/// Keyword substring → industry, consulted only when the category lookup
/// finds nothing.
pub const KEYWORD_INDUSTRIES: &[(&str, &str)] = &[
    ("healthcare", "Healthcare"),
    ("medical", "Healthcare"),
    ("banking", "Banking"),
    ("finance", "Finance"),
    ("retail", "Retail"),
    ("e-commerce", "E-commerce"),
    ("manufacturing", "Manufacturing"),
    ("automotive", "Automotive"),
    ("education", "Education"),
    ("software", "Technology"),
    ("saas", "Technology"),
    ("media", "Media & Entertainment"),
    ("entertainment", "Media & Entertainment"),
    ("energy", "Energy"),
    ("utilities", "Energy & Utilities"),
];

/// Category returned when no trigger phrase matches.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Industry returned when both lookup phases come up empty.
pub const FALLBACK_INDUSTRY: &str = "Technology";
