#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Word lists for product-review analysis.
//!
//! This crate holds the static vocabulary consumed by `layered-reviews`:
//!
//! - **Brands**: lowercase brand (and flagship line) names
//! - **Positive / negative words**: literal word forms counted by the
//!   rule-based sentiment scorer
//! - **Product patterns**: short product-line names searched for inside
//!   two-word windows
//!
//! ## Usage
//!
//! ```
//! use layered_review_lexicon::Lexicons;
//!
//! let lexicons = Lexicons::default();
//! assert!(lexicons.brands.contains("apple"));
//! assert!(lexicons.positive_words.contains("love"));
//!
//! let custom = Lexicons::from_toml_str(r#"brands = ["Fairphone"]"#).unwrap();
//! assert!(custom.brands.contains("fairphone"));
//! assert!(custom.negative_words.contains("terrible"));
//! ```
//!
//! Lexicons are plain values: construct one per pipeline (or share
//! [`Lexicons::shared`]) and pass it in. Nothing here is mutated after
//! construction.

mod defaults;
mod errors;
mod lexicons;
mod word_list;

pub use defaults::{
    DEFAULT_BRANDS, DEFAULT_NEGATIVE_WORDS, DEFAULT_POSITIVE_WORDS, DEFAULT_PRODUCT_PATTERNS,
};
pub use errors::{LexiconError, LexiconResult};
pub use lexicons::Lexicons;
pub use word_list::WordList;
