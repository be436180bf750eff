//! Pipeline configuration.

use std::fs;
use std::path::{Path, PathBuf};

use layered_review_lexicon::Lexicons;
use serde::{Deserialize, Serialize};

use crate::{PunctuationPolicy, ReviewError, ReviewResult};

/// Default length of the top brand/product lists.
pub const DEFAULT_TOP_N: usize = 5;

/// Default length of the most-common raw entity list.
pub const DEFAULT_ENTITY_STATS_TOP_N: usize = 10;

/// Configuration for a [`ReviewPipeline`](crate::ReviewPipeline).
///
/// ```toml
/// top_n = 3
/// entity_labels = ["ORG", "PRODUCT", "BRAND"]
/// punctuation = "strip_trailing"
/// lexicon_path = "lexicons.toml"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Length of `top_brands` / `top_products`.
    pub top_n: usize,
    /// Length of the most common raw entity texts list.
    pub entity_stats_top_n: usize,
    /// NER labels eligible for brand/product classification.
    pub entity_labels: Vec<String>,
    /// Trailing punctuation handling for token lookups.
    pub punctuation: PunctuationPolicy,
    /// Optional TOML lexicon file; built-in lexicons are used when absent.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            entity_stats_top_n: DEFAULT_ENTITY_STATS_TOP_N,
            entity_labels: vec!["ORG".into(), "PRODUCT".into()],
            punctuation: PunctuationPolicy::Literal,
            lexicon_path: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(content: &str) -> ReviewResult<Self> {
        toml::from_str(content).map_err(|e| ReviewError::Config {
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> ReviewResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ReviewError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_punctuation(mut self, punctuation: PunctuationPolicy) -> Self {
        self.punctuation = punctuation;
        self
    }

    pub fn with_entity_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve the configured lexicons.
    pub fn lexicons(&self) -> ReviewResult<Lexicons> {
        match &self.lexicon_path {
            Some(path) => Ok(Lexicons::load(path)?),
            None => Ok(Lexicons::default()),
        }
    }
}
