//! Entity extraction through a pluggable NER backend.
//!
//! The statistical model that finds entity spans is not part of this crate.
//! [`EntityExtractor`] only needs something implementing [`NerBackend`];
//! when that backend cannot be loaded or fails on a review, extraction
//! degrades to zero entities instead of failing the pipeline.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{RawEntity, Review};

/// A span reported by a [`NerBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NerSpan {
    pub span_text: String,
    pub label: String,
}

impl NerSpan {
    pub fn new(span_text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            span_text: span_text.into(),
            label: label.into(),
        }
    }
}

/// Failures raised by NER backends.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend's underlying resource (model, pattern set) could not be loaded.
    #[error("NER backend unavailable: {message}")]
    Unavailable { message: String },

    /// The backend failed while analyzing a text.
    #[error("NER analysis failed: {message}")]
    Analysis { message: String },
}

/// A named-entity recognizer.
pub trait NerBackend: Send + Sync {
    /// Find entity spans in `text`, in text order.
    fn analyze(&self, text: &str) -> Result<Vec<NerSpan>, BackendError>;
}

/// A backend that recognizes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNer;

impl NerBackend for NoopNer {
    fn analyze(&self, _text: &str) -> Result<Vec<NerSpan>, BackendError> {
        Ok(Vec::new())
    }
}

/// A phrase-list recognizer.
///
/// Each pattern is a literal phrase with a label. Phrases match
/// case-sensitively on word boundaries; when patterns overlap the leftmost
/// match wins, and among matches starting at the same place the longest.
#[derive(Debug, Clone)]
pub struct GazetteerNer {
    matcher: Option<Regex>,
    labels: HashMap<String, String>,
}

impl GazetteerNer {
    /// Compile a gazetteer from `(phrase, label)` pairs.
    ///
    /// A later pattern with the same phrase replaces the earlier label.
    pub fn new<I, P, L>(patterns: I) -> Result<Self, BackendError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: Into<String>,
    {
        let mut labels = HashMap::new();
        for (phrase, label) in patterns {
            let phrase = phrase.into();
            if phrase.trim().is_empty() {
                continue;
            }
            labels.insert(phrase, label.into());
        }

        if labels.is_empty() {
            return Ok(Self {
                matcher: None,
                labels,
            });
        }

        // Longest first so the alternation prefers the longest phrase at a position.
        let mut phrases: Vec<&String> = labels.keys().collect();
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = phrases
            .iter()
            .map(|phrase| {
                let starts_word = phrase.chars().next().map_or(false, is_word_char);
                let ends_word = phrase.chars().last().map_or(false, is_word_char);
                format!(
                    "{}{}{}",
                    if starts_word { r"\b" } else { "" },
                    regex::escape(phrase),
                    if ends_word { r"\b" } else { "" },
                )
            })
            .collect::<Vec<_>>()
            .join("|");

        let matcher = Regex::new(&alternation).map_err(|e| BackendError::Unavailable {
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher: Some(matcher),
            labels,
        })
    }

    /// Patterns for the brands and products of the bundled sample reviews.
    pub fn product_reviews() -> Result<Self, BackendError> {
        Self::new([
            ("Apple", "ORG"),
            ("Samsung", "ORG"),
            ("Sony", "ORG"),
            ("Nike", "ORG"),
            ("Dell", "ORG"),
            ("Amazon", "ORG"),
            ("Google", "ORG"),
            ("Microsoft", "ORG"),
            ("Alexa", "PERSON"),
            ("iPhone 14 Pro", "PRODUCT"),
            ("Samsung Galaxy S23", "PRODUCT"),
            ("WH-1000XM4", "PRODUCT"),
            ("MacBook Air M2", "PRODUCT"),
            ("Air Max 270", "PRODUCT"),
            ("XPS 13", "PRODUCT"),
            ("Echo Dot", "PRODUCT"),
            ("Pixel 7", "PRODUCT"),
            ("AirPods Pro", "PRODUCT"),
            ("Surface Pro 8", "PRODUCT"),
            ("$150", "MONEY"),
            ("one week", "DATE"),
            ("Five", "CARDINAL"),
        ])
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl NerBackend for GazetteerNer {
    fn analyze(&self, text: &str) -> Result<Vec<NerSpan>, BackendError> {
        let Some(matcher) = &self.matcher else {
            return Ok(Vec::new());
        };

        matcher
            .find_iter(text)
            .map(|found| {
                let label = self
                    .labels
                    .get(found.as_str())
                    .ok_or_else(|| BackendError::Analysis {
                        message: format!("no label for matched phrase {:?}", found.as_str()),
                    })?;
                Ok(NerSpan::new(found.as_str(), label.clone()))
            })
            .collect()
    }
}

/// Runs a [`NerBackend`] over reviews and tags its spans with review ids.
pub struct EntityExtractor {
    backend: Box<dyn NerBackend>,
}

impl std::fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityExtractor").finish_non_exhaustive()
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::noop()
    }
}

impl EntityExtractor {
    pub fn new(backend: impl NerBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// An extractor that never finds anything.
    pub fn noop() -> Self {
        Self::new(NoopNer)
    }

    /// Load a backend, falling back to [`NoopNer`] when loading fails.
    pub fn from_loader<B, F>(loader: F) -> Self
    where
        B: NerBackend + 'static,
        F: FnOnce() -> Result<B, BackendError>,
    {
        match loader() {
            Ok(backend) => Self::new(backend),
            Err(error) => {
                tracing::warn!(%error, "NER backend failed to load; extracting no entities");
                Self::noop()
            }
        }
    }

    /// Extract the entities of one review.
    ///
    /// Blank text yields no entities without consulting the backend. A
    /// backend error is logged and yields no entities.
    pub fn extract(&self, review: &Review) -> Vec<RawEntity> {
        if review.text.trim().is_empty() {
            return Vec::new();
        }

        match self.backend.analyze(&review.text) {
            Ok(spans) => spans
                .into_iter()
                .map(|span| RawEntity {
                    span_text: span.span_text,
                    label: span.label,
                    review_id: review.id,
                })
                .collect(),
            Err(error) => {
                tracing::warn!(review_id = review.id, %error, "NER analysis failed; skipping review entities");
                Vec::new()
            }
        }
    }
}

/// Human-readable description of a common OntoNotes entity label.
pub fn describe_label(label: &str) -> Option<&'static str> {
    let description = match label {
        "PERSON" => "People, including fictional",
        "NORP" => "Nationalities or religious or political groups",
        "FAC" => "Buildings, airports, highways, bridges, etc.",
        "ORG" => "Companies, agencies, institutions, etc.",
        "GPE" => "Countries, cities, states",
        "LOC" => "Non-GPE locations, mountain ranges, bodies of water",
        "PRODUCT" => "Objects, vehicles, foods, etc. (not services)",
        "EVENT" => "Named hurricanes, battles, wars, sports events, etc.",
        "WORK_OF_ART" => "Titles of books, songs, etc.",
        "LAW" => "Named documents made into laws.",
        "LANGUAGE" => "Any named language",
        "DATE" => "Absolute or relative dates or periods",
        "TIME" => "Times smaller than a day",
        "PERCENT" => "Percentage, including \"%\"",
        "MONEY" => "Monetary values, including unit",
        "QUANTITY" => "Measurements, as of weight or distance",
        "ORDINAL" => "\"first\", \"second\", etc.",
        "CARDINAL" => "Numerals that do not fall under another type",
        _ => return None,
    };
    Some(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingNer;

    impl NerBackend for FailingNer {
        fn analyze(&self, _text: &str) -> Result<Vec<NerSpan>, BackendError> {
            Err(BackendError::Analysis {
                message: "model crashed".into(),
            })
        }
    }

    struct EchoNer;

    impl NerBackend for EchoNer {
        fn analyze(&self, text: &str) -> Result<Vec<NerSpan>, BackendError> {
            Ok(vec![
                NerSpan::new(text, "WEIRD_LABEL"),
                NerSpan::new(text, "WEIRD_LABEL"),
            ])
        }
    }

    #[test]
    fn passes_spans_and_labels_through() {
        let extractor = EntityExtractor::new(EchoNer);
        let entities = extractor.extract(&Review::new(4, "Sony"));
        assert_eq!(
            entities,
            vec![
                RawEntity {
                    span_text: "Sony".into(),
                    label: "WEIRD_LABEL".into(),
                    review_id: 4,
                },
                RawEntity {
                    span_text: "Sony".into(),
                    label: "WEIRD_LABEL".into(),
                    review_id: 4,
                },
            ]
        );
    }

    #[test]
    fn empty_text_yields_nothing() {
        let extractor = EntityExtractor::new(EchoNer);
        assert!(extractor.extract(&Review::new(1, "")).is_empty());
        assert!(extractor.extract(&Review::new(1, "   ")).is_empty());
    }

    #[test]
    fn failed_loader_falls_back_to_noop() {
        let extractor = EntityExtractor::from_loader(|| -> Result<GazetteerNer, BackendError> {
            Err(BackendError::Unavailable {
                message: "model not installed".into(),
            })
        });
        assert!(extractor
            .extract(&Review::new(1, "I love my Apple iPhone 14 Pro"))
            .is_empty());
    }

    #[test]
    fn successful_loader_is_used() {
        let extractor = EntityExtractor::from_loader(GazetteerNer::product_reviews);
        let entities = extractor.extract(&Review::new(2, "Great support from Dell."));
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].span_text, "Dell");
        assert_eq!(entities[0].label, "ORG");
    }

    #[test]
    fn analysis_errors_are_absorbed() {
        let extractor = EntityExtractor::new(FailingNer);
        assert!(extractor.extract(&Review::new(1, "Apple")).is_empty());
    }

    #[test]
    fn gazetteer_prefers_leftmost_longest() {
        let ner = GazetteerNer::product_reviews().unwrap();
        let spans = ner
            .analyze("The Samsung Galaxy S23 is okay. Samsung support was slow.")
            .unwrap();
        assert_eq!(
            spans,
            vec![
                NerSpan::new("Samsung Galaxy S23", "PRODUCT"),
                NerSpan::new("Samsung", "ORG"),
            ]
        );
    }

    #[test]
    fn gazetteer_respects_word_boundaries_and_case() {
        let ner = GazetteerNer::new([("Echo", "PRODUCT"), ("$150", "MONEY")]).unwrap();
        assert!(ner.analyze("Echoes of the past, echo").unwrap().is_empty());
        assert_eq!(
            ner.analyze("not worth $150. Echo!").unwrap(),
            vec![NerSpan::new("$150", "MONEY"), NerSpan::new("Echo", "PRODUCT")]
        );
    }

    #[test]
    fn empty_gazetteer_matches_nothing() {
        let ner = GazetteerNer::new(Vec::<(String, String)>::new()).unwrap();
        assert!(ner.is_empty());
        assert!(ner.analyze("Apple").unwrap().is_empty());
    }

    #[test]
    fn describes_known_labels_only() {
        assert_eq!(
            describe_label("ORG"),
            Some("Companies, agencies, institutions, etc.")
        );
        assert_eq!(describe_label("BRAND"), None);
    }
}
