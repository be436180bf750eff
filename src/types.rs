//! Records produced and consumed by the review pipeline.
//!
//! Every record carries the `review_id` of the [`Review`] it was derived
//! from. Records are plain values; nothing in the pipeline mutates one
//! after it is built.

use serde::{Deserialize, Serialize};

/// Identifier of a review within a batch. Ids start at 1.
pub type ReviewId = u32;

/// A single product review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub text: String,
}

impl Review {
    pub fn new(id: ReviewId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Number a sequence of texts 1, 2, 3, ... in input order.
    pub fn batch<I, S>(texts: I) -> Vec<Review>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .zip(1..)
            .map(|(text, id)| Review::new(id, text))
            .collect()
    }
}

/// A span reported by the NER backend, tagged with the review it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntity {
    /// The matched substring, verbatim.
    pub span_text: String,
    /// The backend's category tag, passed through unmodified.
    pub label: String,
    pub review_id: ReviewId,
}

/// Whether a mention names a brand or a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MentionCategory {
    Brand,
    Product,
}

/// Which mechanism produced a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MentionSource {
    /// Classified from a [`RawEntity`].
    #[serde(rename = "NER")]
    Ner,
    /// Found by scanning the review's tokens directly.
    PatternMatch,
}

/// A brand or product mention found in a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedMention {
    pub text: String,
    pub category: MentionCategory,
    pub review_id: ReviewId,
    pub source: MentionSource,
}

impl ClassifiedMention {
    pub fn new(
        text: impl Into<String>,
        category: MentionCategory,
        review_id: ReviewId,
        source: MentionSource,
    ) -> Self {
        Self {
            text: text.into(),
            category,
            review_id,
            source,
        }
    }

    pub fn is_brand(&self) -> bool {
        self.category == MentionCategory::Brand
    }
}

/// Three-way sentiment label derived from the sign of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn from_score(score: i64) -> Self {
        match score {
            s if s > 0 => SentimentLabel::Positive,
            s if s < 0 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule-based sentiment of one review.
///
/// Build with [`SentimentResult::from_counts`] so that `score` and `label`
/// always agree with the counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub review_id: ReviewId,
    pub positive_count: usize,
    pub negative_count: usize,
    /// `positive_count - negative_count`
    pub score: i64,
    pub label: SentimentLabel,
}

impl SentimentResult {
    pub fn from_counts(review_id: ReviewId, positive_count: usize, negative_count: usize) -> Self {
        let score = positive_count as i64 - negative_count as i64;
        Self {
            review_id,
            positive_count,
            negative_count,
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_numbers_from_one() {
        let reviews = Review::batch(["first", "second", "third"]);
        let ids: Vec<_> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(reviews[1].text, "second");
    }

    #[test]
    fn label_follows_score_sign() {
        assert_eq!(SentimentLabel::from_score(3), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0), SentimentLabel::Neutral);
    }

    #[test]
    fn result_from_counts_keeps_invariants() {
        let result = SentimentResult::from_counts(7, 2, 5);
        assert_eq!(result.score, -3);
        assert_eq!(result.label, SentimentLabel::Negative);

        let zero = SentimentResult::from_counts(1, 0, 0);
        assert_eq!(zero.score, 0);
        assert_eq!(zero.label, SentimentLabel::Neutral);

        let tied = SentimentResult::from_counts(1, 2, 2);
        assert_eq!(tied.label, SentimentLabel::Neutral);
    }

    #[test]
    fn mention_source_serializes_like_the_reporting_layer_expects() {
        let mention = ClassifiedMention::new("Apple", MentionCategory::Brand, 1, MentionSource::Ner);
        let json = serde_json::to_string(&mention).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Apple","category":"Brand","review_id":1,"source":"NER"}"#
        );
    }
}
