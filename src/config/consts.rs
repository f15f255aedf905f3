// src/config/consts.rs

// Segmentation
pub const MIN_REVIEW_CHARS: usize = 20;     // segments at or below this are noise
pub const PREAMBLE_MAX_CHARS: usize = 100;  // leading chunk shorter than this is a preamble
pub const FORMAT_SCAN_LINES: usize = 20;    // lines inspected to pick marker vs labeled grammar
pub const PARAGRAPH_MIN_LINES: usize = 3;   // paragraph fallback needs more lines than this
pub const ANONYMOUS: &str = "Anonymous";

// Classification
pub const FALLBACK_SCORE: f64 = 0.5;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 512;

// Input discovery
pub const REVIEW_EXT: &str = "txt";
/// Stripped from file stems to get the source label. Longest first.
pub const KNOWN_SUFFIXES: &[&str] = &[
    "_reviews_with_ratings",
    "_reviews",
    "_yelp",
    "_google",
    "_data",
];

// Export
pub const DEFAULT_IN_DIR: &str = ".";
pub const DEFAULT_OUT_DIR: &str = "multi_company_sentiment_analysis";
pub const COMPARISON_FILE: &str = "company_sentiment_comparison";
pub const REPORT_FILE: &str = "company_sentiment_ranking_report.txt";
pub const REVIEWS_FILE_SUFFIX: &str = "_sentiment_analysis";
pub const SOURCE_REPORT_SUFFIX: &str = "_sentiment_report";

// Per-source report
/// Menu items counted in POSITIVE / NEGATIVE reviews. Matched lowercase, as substrings.
pub const MENU_ITEMS: &[&str] = &[
    "harissa chicken",
    "korean bbq",
    "korean beef",
    "naga habanero",
    "habanero chicken",
    "4 cheese",
    "beef taco",
    "meat lovers",
];

/// An aspect matches when every group has at least one keyword in the text.
pub type KeywordGroups = &'static [&'static [&'static str]];

/// Looked for in POSITIVE reviews only.
pub const POSITIVE_ASPECTS: &[(&str, KeywordGroups)] = &[
    ("Great service", &[&["service"], &["great"]]),
    ("Crispy crust", &[&["crisp"]]),
    ("Good flavors", &[&["flavor"], &["good", "great"]]),
];

/// Looked for in NEGATIVE reviews only.
pub const NEGATIVE_ASPECTS: &[(&str, KeywordGroups)] = &[
    ("Small restaurant size", &[&["small"], &["place", "size"]]),
    ("Issues with sauce", &[&["sauce"], &["too much", "sweet"]]),
    ("Price concerns", &[&["price", "expensive", "pricey"]]),
];

// Config / logging
pub const CONFIG_FILE: &str = "review_sentiment.toml";
pub const CONFIG_ENV: &str = "REVIEW_SENTIMENT_CONFIG";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
