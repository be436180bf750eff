//! Built-in vocabulary.

/// Brands and flagship product lines treated as brand mentions.
pub const DEFAULT_BRANDS: &[&str] = &[
    "apple",
    "samsung",
    "google",
    "microsoft",
    "sony",
    "dell",
    "nike",
    "amazon",
    "iphone",
    "macbook",
    "galaxy",
    "pixel",
    "surface",
    "echo",
    "airpods",
];

pub const DEFAULT_POSITIVE_WORDS: &[&str] = &[
    "love",
    "amazing",
    "excellent",
    "great",
    "fantastic",
    "perfect",
    "good",
    "best",
    "awesome",
    "wonderful",
    "outstanding",
    "superb",
    "recommend",
    "satisfied",
    "happy",
    "pleased",
    "impressed",
];

pub const DEFAULT_NEGATIVE_WORDS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "bad",
    "worst",
    "horrible",
    "poor",
    "disappointed",
    "unsatisfied",
    "broken",
    "cheap",
    "overpriced",
    "slow",
    "useless",
    "defective",
    "waste",
    "regret",
];

/// Short product-line names looked for inside two-word windows
/// ("iphone 14", "galaxy s23").
pub const DEFAULT_PRODUCT_PATTERNS: &[&str] = &["iphone", "galaxy", "macbook", "airpods"];
