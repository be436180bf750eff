//! Rule-based sentiment scoring.
//!
//! A review's score is the number of positive-lexicon tokens minus the
//! number of negative-lexicon tokens. Every occurrence counts.

use std::sync::Arc;

use layered_review_lexicon::Lexicons;
use serde::{Deserialize, Serialize};

use crate::text::tokenize;
use crate::{PunctuationPolicy, Review, SentimentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

/// A sentiment-bearing token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityHit {
    /// Token index (into `text.split_whitespace()`).
    pub index: usize,
    pub polarity: Polarity,
    /// The lexicon entry that matched.
    pub word: String,
}

/// Scores reviews against the positive and negative word lists.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicons: Arc<Lexicons>,
    punctuation: PunctuationPolicy,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Arc::new(Lexicons::default()))
    }
}

impl SentimentScorer {
    /// Create a scorer comparing tokens verbatim.
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self {
            lexicons,
            punctuation: PunctuationPolicy::Literal,
        }
    }

    pub fn with_punctuation(mut self, punctuation: PunctuationPolicy) -> Self {
        self.punctuation = punctuation;
        self
    }

    pub fn score(&self, review: &Review) -> SentimentResult {
        let hits = self.token_hits(review);
        let positive = hits
            .iter()
            .filter(|hit| hit.polarity == Polarity::Positive)
            .count();
        SentimentResult::from_counts(review.id, positive, hits.len() - positive)
    }

    /// Every token found in a sentiment lexicon, in token order.
    ///
    /// A token listed in both lexicons yields a positive and a negative hit.
    pub fn token_hits(&self, review: &Review) -> Vec<PolarityHit> {
        let mut hits = Vec::new();
        for (index, token) in tokenize(&review.text, self.punctuation)
            .into_iter()
            .enumerate()
        {
            let positive = self.lexicons.positive_words.contains(&token);
            let negative = self.lexicons.negative_words.contains(&token);
            if positive {
                hits.push(PolarityHit {
                    index,
                    polarity: Polarity::Positive,
                    word: token.clone(),
                });
            }
            if negative {
                hits.push(PolarityHit {
                    index,
                    polarity: Polarity::Negative,
                    word: token,
                });
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SentimentLabel;

    fn score(text: &str) -> SentimentResult {
        SentimentScorer::default().score(&Review::new(1, text))
    }

    #[test]
    fn single_positive_word() {
        let result = score("I absolutely love my new iPhone 14 Pro from Apple!");
        assert_eq!(result.positive_count, 1);
        assert_eq!(result.negative_count, 0);
        assert_eq!(result.score, 1);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn literal_tokens_keep_trailing_punctuation() {
        // "disappointed." is not the lexicon entry "disappointed".
        let result =
            score("Terrible experience ... broke after just one week. Very disappointed.");
        assert_eq!(result.positive_count, 0);
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.score, -1);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn stripping_punctuation_counts_punctuated_words() {
        let scorer = SentimentScorer::default().with_punctuation(PunctuationPolicy::StripTrailing);
        let result = scorer.score(&Review::new(
            2,
            "Terrible experience ... broke after just one week. Very disappointed.",
        ));
        assert_eq!(result.negative_count, 2);
        assert_eq!(result.score, -2);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn no_lexicon_words_is_neutral() {
        let result = score("The device arrived on time.");
        assert_eq!((result.positive_count, result.negative_count), (0, 0));
        assert_eq!(result.score, 0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn balanced_counts_are_neutral() {
        let result = score("good screen but poor battery");
        assert_eq!((result.positive_count, result.negative_count), (1, 1));
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn counts_every_occurrence() {
        let once = score("great phone");
        let twice = score("great great phone");
        let thrice = score("Great great GREAT phone");
        assert_eq!(once.positive_count, 1);
        assert_eq!(twice.positive_count, 2);
        assert_eq!(thrice.positive_count, 3);
    }

    #[test]
    fn blank_text_is_neutral() {
        for text in ["", "   ", "\n\t"] {
            let result = score(text);
            assert_eq!(result.score, 0);
            assert_eq!(result.label, SentimentLabel::Neutral);
        }
    }

    #[test]
    fn word_in_both_lexicons_cancels_out() {
        let lexicons = Lexicons::empty().with_positive("sick").with_negative("sick");
        let scorer = SentimentScorer::new(Arc::new(lexicons));
        let review = Review::new(1, "sick");
        let result = scorer.score(&review);
        assert_eq!((result.positive_count, result.negative_count), (1, 1));
        assert_eq!(scorer.token_hits(&review).len(), 2);
    }

    #[test]
    fn score_is_idempotent() {
        let scorer = SentimentScorer::default();
        let review = Review::new(5, "Amazing product! Perfect for work. Five stars!");
        assert_eq!(scorer.score(&review), scorer.score(&review));
    }
}
