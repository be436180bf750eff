//! Brand / product classification.
//!
//! Two independent passes feed the output of [`EntityClassifier::classify`]:
//!
//! 1. **NER pass**: raw entities with an eligible label are classified as
//!    `Brand` when their lowercased text is, or contains, a brand entry,
//!    and as `Product` otherwise.
//! 2. **Pattern pass**: the lowercased review is split on whitespace; every
//!    token equal to a brand entry is a `Brand`, and every adjacent token
//!    pair containing a product pattern is a `Product`.
//!
//! NER mentions come first, then pattern mentions, each in scan order.
//! Duplicates are kept.

use std::sync::Arc;

use layered_review_lexicon::Lexicons;
use serde::{Deserialize, Serialize};

use crate::text::{title_case, tokenize};
use crate::{
    ClassifiedMention, MentionCategory, MentionSource, PunctuationPolicy, RawEntity, Review,
};

/// A mention found by the pattern pass, with its token position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternHit {
    /// First token index (into `text.split_whitespace()`).
    pub start: usize,
    /// Last token index, inclusive.
    pub end: usize,
    pub category: MentionCategory,
    /// Title-cased mention text.
    pub text: String,
    /// The lexicon entry that matched.
    pub pattern: String,
}

/// Classifies entity spans and review tokens into brand and product mentions.
#[derive(Debug, Clone)]
pub struct EntityClassifier {
    lexicons: Arc<Lexicons>,
    entity_labels: Vec<String>,
    punctuation: PunctuationPolicy,
}

impl Default for EntityClassifier {
    fn default() -> Self {
        Self::new(Arc::new(Lexicons::default()))
    }
}

impl EntityClassifier {
    /// Create a classifier accepting `ORG` and `PRODUCT` entities.
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self {
            lexicons,
            entity_labels: vec!["ORG".into(), "PRODUCT".into()],
            punctuation: PunctuationPolicy::Literal,
        }
    }

    /// Replace the set of NER labels eligible for classification.
    pub fn with_entity_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_punctuation(mut self, punctuation: PunctuationPolicy) -> Self {
        self.punctuation = punctuation;
        self
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Classify one review's entities and scan its text.
    ///
    /// Entities tagged with another review's id are ignored.
    pub fn classify(&self, review: &Review, raw_entities: &[RawEntity]) -> Vec<ClassifiedMention> {
        let mut mentions: Vec<ClassifiedMention> = raw_entities
            .iter()
            .filter(|entity| entity.review_id == review.id)
            .filter_map(|entity| self.classify_entity(entity))
            .collect();

        mentions.extend(self.pattern_hits(review).into_iter().map(|hit| {
            ClassifiedMention::new(hit.text, hit.category, review.id, MentionSource::PatternMatch)
        }));

        mentions
    }

    /// Classify a single NER entity, or `None` when its label is not eligible.
    pub fn classify_entity(&self, entity: &RawEntity) -> Option<ClassifiedMention> {
        if !self.entity_labels.iter().any(|label| *label == entity.label) {
            return None;
        }

        let category = if self.is_brand_span(&entity.span_text) {
            MentionCategory::Brand
        } else {
            MentionCategory::Product
        };

        Some(ClassifiedMention::new(
            entity.span_text.clone(),
            category,
            entity.review_id,
            MentionSource::Ner,
        ))
    }

    fn is_brand_span(&self, span_text: &str) -> bool {
        let lower = span_text.to_lowercase();
        let brands = &self.lexicons.brands;
        brands.contains(&lower) || brands.find_within(&lower).is_some()
    }

    /// Run the pattern pass alone.
    pub fn pattern_hits(&self, review: &Review) -> Vec<PatternHit> {
        let tokens = tokenize(&review.text, self.punctuation);
        let brands = &self.lexicons.brands;
        let patterns = &self.lexicons.product_patterns;

        let mut hits = Vec::new();
        for (idx, token) in tokens.iter().enumerate() {
            if brands.contains(token) {
                hits.push(PatternHit {
                    start: idx,
                    end: idx,
                    category: MentionCategory::Brand,
                    text: title_case(token),
                    pattern: token.clone(),
                });
            }

            let Some(next) = tokens.get(idx + 1) else {
                continue;
            };
            // Punctuation-only tokens stripped to nothing never form a window.
            if token.is_empty() || next.is_empty() {
                continue;
            }
            let phrase = format!("{} {}", token, next);
            if let Some(pattern) = patterns.find_within(&phrase) {
                hits.push(PatternHit {
                    start: idx,
                    end: idx + 1,
                    category: MentionCategory::Product,
                    text: title_case(&phrase),
                    pattern: pattern.to_string(),
                });
            }
        }
        hits
    }
}
