//! Batch summaries: sentiment distribution and top brand/product mentions.
//!
//! Counts are ordered by descending frequency. Equal counts keep the order
//! in which their text was first seen, never alphabetical order, so the
//! same input always produces the same summary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ClassifiedMention, MentionCategory, RawEntity, SentimentLabel, SentimentResult};

/// A frequency counter that remembers first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionCounter {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl MentionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: &str) {
        match self.counts.get_mut(text) {
            Some(count) => *count += 1,
            None => {
                self.order.push(text.to_string());
                self.counts.insert(text.to_string(), 1);
            }
        }
    }

    pub fn get(&self, text: &str) -> usize {
        self.counts.get(text).copied().unwrap_or(0)
    }

    /// Number of distinct texts.
    pub fn unique(&self) -> usize {
        self.order.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `n` most frequent texts, ties broken by first encounter.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .order
            .iter()
            .map(|text| (text.clone(), self.get(text)))
            .collect();
        // `sort_by` is stable, which is what preserves encounter order on ties.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<'a> FromIterator<&'a str> for MentionCounter {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut counter = Self::new();
        for text in iter {
            counter.add(text);
        }
        counter
    }
}

/// Count of sentiment results per label. All three labels are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn add(&mut self, label: SentimentLabel) {
        *self.slot(label) += 1;
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    fn slot(&mut self, label: SentimentLabel) -> &mut usize {
        match label {
            SentimentLabel::Positive => &mut self.positive,
            SentimentLabel::Negative => &mut self.negative,
            SentimentLabel::Neutral => &mut self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Share of `total_reviews` carrying `label`, in percent. `0.0` for an empty batch.
    pub fn percentage(&self, label: SentimentLabel, total_reviews: usize) -> f64 {
        if total_reviews == 0 {
            return 0.0;
        }
        self.get(label) as f64 / total_reviews as f64 * 100.0
    }

    /// `(label, count)` pairs in `Positive, Negative, Neutral` order.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, usize)> + '_ {
        SentimentLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }
}

/// Summary of a batch of analyzed reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub total_reviews: usize,
    pub sentiment_distribution: SentimentDistribution,
    pub top_brands: Vec<(String, usize)>,
    pub top_products: Vec<(String, usize)>,
    /// Distinct brand texts across the batch.
    pub unique_brands: usize,
    /// Distinct product texts across the batch.
    pub unique_products: usize,
}

/// Accumulates mentions and sentiment results, then summarizes them.
///
/// Pushing records one at a time and calling [`ResultAggregator::summary`]
/// gives the same result as [`aggregate`] over the full sequences.
#[derive(Debug, Clone, Default)]
pub struct ResultAggregator {
    brands: MentionCounter,
    products: MentionCounter,
    distribution: SentimentDistribution,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_mention(&mut self, mention: &ClassifiedMention) {
        match mention.category {
            MentionCategory::Brand => self.brands.add(&mention.text),
            MentionCategory::Product => self.products.add(&mention.text),
        }
    }

    pub fn push_sentiment(&mut self, sentiment: &SentimentResult) {
        self.distribution.add(sentiment.label);
    }

    pub fn extend_mentions<'a>(&mut self, mentions: impl IntoIterator<Item = &'a ClassifiedMention>) {
        for mention in mentions {
            self.push_mention(mention);
        }
    }

    pub fn extend_sentiments<'a>(
        &mut self,
        sentiments: impl IntoIterator<Item = &'a SentimentResult>,
    ) {
        for sentiment in sentiments {
            self.push_sentiment(sentiment);
        }
    }

    pub fn brands(&self) -> &MentionCounter {
        &self.brands
    }

    pub fn products(&self) -> &MentionCounter {
        &self.products
    }

    pub fn summary(&self, total_reviews: usize, top_n: usize) -> AggregateSummary {
        AggregateSummary {
            total_reviews,
            sentiment_distribution: self.distribution,
            top_brands: self.brands.most_common(top_n),
            top_products: self.products.most_common(top_n),
            unique_brands: self.brands.unique(),
            unique_products: self.products.unique(),
        }
    }
}

/// Summarize a whole batch.
pub fn aggregate(
    mentions: &[ClassifiedMention],
    sentiments: &[SentimentResult],
    total_reviews: usize,
    top_n: usize,
) -> AggregateSummary {
    let mut aggregator = ResultAggregator::new();
    aggregator.extend_mentions(mentions);
    aggregator.extend_sentiments(sentiments);
    aggregator.summary(total_reviews, top_n)
}

/// Frequencies over raw NER output, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStats {
    pub total_entities: usize,
    /// Every label with its count, most frequent first.
    pub label_counts: Vec<(String, usize)>,
    /// The most frequent entity texts.
    pub top_entities: Vec<(String, usize)>,
}

impl EntityStats {
    pub fn from_entities(entities: &[RawEntity], top_n: usize) -> Self {
        let labels: MentionCounter = entities.iter().map(|e| e.label.as_str()).collect();
        let texts: MentionCounter = entities.iter().map(|e| e.span_text.as_str()).collect();
        Self {
            total_entities: entities.len(),
            label_counts: labels.most_common(labels.unique()),
            top_entities: texts.most_common(top_n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MentionSource, DEFAULT_TOP_N};

    fn brand(text: &str) -> ClassifiedMention {
        ClassifiedMention::new(text, MentionCategory::Brand, 1, MentionSource::Ner)
    }

    fn product(text: &str) -> ClassifiedMention {
        ClassifiedMention::new(text, MentionCategory::Product, 1, MentionSource::PatternMatch)
    }

    fn pairs(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
        entries.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn empty_batch_is_zero_summary() {
        let summary = aggregate(&[], &[], 0, DEFAULT_TOP_N);
        assert_eq!(summary.sentiment_distribution, SentimentDistribution::default());
        for label in SentimentLabel::ALL {
            assert_eq!(summary.sentiment_distribution.get(label), 0);
            assert_eq!(summary.sentiment_distribution.percentage(label, 0), 0.0);
        }
        assert!(summary.top_brands.is_empty());
        assert!(summary.top_products.is_empty());
        assert_eq!(summary.unique_brands, 0);
    }

    #[test]
    fn counts_brands_by_exact_text() {
        let mentions = [brand("Apple"), brand("Sony"), brand("Apple"), brand("apple")];
        let summary = aggregate(&mentions, &[], 1, 5);
        assert_eq!(summary.top_brands, pairs(&[("Apple", 2), ("Sony", 1), ("apple", 1)]));
        assert_eq!(summary.unique_brands, 3);
        assert!(summary.top_products.is_empty());
    }

    #[test]
    fn two_apples_one_sony() {
        let mentions = [brand("Apple"), brand("Apple"), brand("Sony")];
        let summary = aggregate(&mentions, &[], 1, 5);
        assert_eq!(summary.top_brands, pairs(&[("Apple", 2), ("Sony", 1)]));
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let mentions = [
            product("Zeta 1"),
            brand("Sony"),
            product("Alpha 2"),
            product("Mid 3"),
            product("Alpha 2"),
            product("Zeta 1"),
        ];
        let summary = aggregate(&mentions, &[], 1, 5);
        assert_eq!(
            summary.top_products,
            pairs(&[("Zeta 1", 2), ("Alpha 2", 2), ("Mid 3", 1)])
        );
    }

    #[test]
    fn top_n_truncates() {
        let mentions: Vec<_> = ["A", "B", "C", "B", "D", "E", "F", "G"]
            .iter()
            .map(|t| brand(t))
            .collect();
        let summary = aggregate(&mentions, &[], 1, 3);
        assert_eq!(summary.top_brands, pairs(&[("B", 2), ("A", 1), ("C", 1)]));
        assert_eq!(summary.unique_brands, 7);
    }

    #[test]
    fn distribution_covers_every_label() {
        let sentiments = [
            SentimentResult::from_counts(1, 2, 0),
            SentimentResult::from_counts(2, 1, 0),
            SentimentResult::from_counts(3, 0, 1),
        ];
        let summary = aggregate(&[], &sentiments, 4, 5);
        let dist = summary.sentiment_distribution;
        assert_eq!(
            dist.iter().collect::<Vec<_>>(),
            vec![
                (SentimentLabel::Positive, 2),
                (SentimentLabel::Negative, 1),
                (SentimentLabel::Neutral, 0),
            ]
        );
        assert_eq!(dist.total(), 3);
        assert_eq!(dist.percentage(SentimentLabel::Positive, 4), 50.0);
        assert_eq!(dist.percentage(SentimentLabel::Neutral, 4), 0.0);
    }

    #[test]
    fn incremental_matches_batch() {
        let mentions = [brand("Dell"), product("Xps 13"), brand("Dell"), brand("Apple")];
        let sentiments = [SentimentResult::from_counts(1, 3, 1)];

        let mut aggregator = ResultAggregator::new();
        for mention in &mentions {
            aggregator.push_mention(mention);
        }
        aggregator.push_sentiment(&sentiments[0]);

        assert_eq!(aggregator.summary(1, 5), aggregate(&mentions, &sentiments, 1, 5));
        assert_eq!(aggregator.brands().get("Dell"), 2);
        assert_eq!(aggregator.products().total(), 1);
    }

    #[test]
    fn entity_stats_count_labels_and_texts() {
        let entity = |text: &str, label: &str| RawEntity {
            span_text: text.into(),
            label: label.into(),
            review_id: 1,
        };
        let stats = EntityStats::from_entities(
            &[
                entity("Apple", "ORG"),
                entity("iPhone 14 Pro", "PRODUCT"),
                entity("Apple", "ORG"),
                entity("$150", "MONEY"),
                entity("Dell", "ORG"),
            ],
            2,
        );
        assert_eq!(stats.total_entities, 5);
        assert_eq!(
            stats.label_counts,
            pairs(&[("ORG", 3), ("PRODUCT", 1), ("MONEY", 1)])
        );
        assert_eq!(stats.top_entities, pairs(&[("Apple", 2), ("iPhone 14 Pro", 1)]));
    }

    #[test]
    fn distribution_serializes_with_label_keys() {
        let mut dist = SentimentDistribution::default();
        dist.add(SentimentLabel::Neutral);
        assert_eq!(
            serde_json::to_string(&dist).unwrap(),
            r#"{"Positive":0,"Negative":0,"Neutral":1}"#
        );
    }
}
