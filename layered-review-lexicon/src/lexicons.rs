//! The lexicon bundle handed to every analysis component.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_BRANDS, DEFAULT_NEGATIVE_WORDS, DEFAULT_POSITIVE_WORDS, DEFAULT_PRODUCT_PATTERNS,
};
use crate::{LexiconError, LexiconResult, WordList};

static SHARED: Lazy<Lexicons> = Lazy::new(Lexicons::default);

/// Brand, sentiment and product-pattern vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicons {
    /// Brand names, matched exactly or as substrings of entity spans.
    pub brands: WordList,
    /// Words counted toward a positive score.
    pub positive_words: WordList,
    /// Words counted toward a negative score.
    pub negative_words: WordList,
    /// Product-line names searched for in two-word windows.
    pub product_patterns: WordList,
}

/// On-disk shape: every table is optional and falls back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    brands: Option<WordList>,
    positive_words: Option<WordList>,
    negative_words: Option<WordList>,
    product_patterns: Option<WordList>,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            brands: WordList::from_static(DEFAULT_BRANDS),
            positive_words: WordList::from_static(DEFAULT_POSITIVE_WORDS),
            negative_words: WordList::from_static(DEFAULT_NEGATIVE_WORDS),
            product_patterns: WordList::from_static(DEFAULT_PRODUCT_PATTERNS),
        }
    }
}

impl Lexicons {
    /// A process-wide instance of the built-in lexicons.
    pub fn shared() -> &'static Lexicons {
        &SHARED
    }

    /// Lexicons with every list empty.
    pub fn empty() -> Self {
        Self {
            brands: WordList::default(),
            positive_words: WordList::default(),
            negative_words: WordList::default(),
            product_patterns: WordList::default(),
        }
    }

    /// Parse lexicons from a TOML document.
    ///
    /// ```toml
    /// brands = ["apple", "fairphone"]
    /// positive_words = ["love", "sturdy"]
    /// ```
    ///
    /// Omitted lists keep their built-in defaults.
    pub fn from_toml_str(content: &str) -> LexiconResult<Self> {
        let file: LexiconFile = toml::from_str(content).map_err(|e| LexiconError::Parse {
            message: e.to_string(),
        })?;
        let defaults = Self::default();
        Ok(Self {
            brands: file.brands.unwrap_or(defaults.brands),
            positive_words: file.positive_words.unwrap_or(defaults.positive_words),
            negative_words: file.negative_words.unwrap_or(defaults.negative_words),
            product_patterns: file.product_patterns.unwrap_or(defaults.product_patterns),
        })
    }

    /// Load lexicons from a TOML file.
    pub fn load(path: &Path) -> LexiconResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| LexiconError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Add a brand entry.
    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brands.insert(brand);
        self
    }

    /// Add a positive word.
    pub fn with_positive(mut self, word: &str) -> Self {
        self.positive_words.insert(word);
        self
    }

    /// Add a negative word.
    pub fn with_negative(mut self, word: &str) -> Self {
        self.negative_words.insert(word);
        self
    }

    /// Add a product-line pattern.
    pub fn with_product_pattern(mut self, pattern: &str) -> Self {
        self.product_patterns.insert(pattern);
        self
    }
}
