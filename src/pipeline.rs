//! End-to-end batch analysis.

use std::sync::Arc;

use layered_review_lexicon::Lexicons;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, AggregateSummary, EntityStats};
use crate::{
    ClassifiedMention, EntityClassifier, EntityExtractor, PipelineConfig, RawEntity, Review,
    ReviewError, ReviewId, ReviewResult, SentimentResult, SentimentScorer,
};

/// Everything derived from a single review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    pub review_id: ReviewId,
    pub raw_entities: Vec<RawEntity>,
    pub mentions: Vec<ClassifiedMention>,
    pub sentiment: SentimentResult,
}

/// Per-review analyses plus batch summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub analyses: Vec<ReviewAnalysis>,
    pub summary: AggregateSummary,
    pub entity_stats: EntityStats,
}

impl BatchReport {
    /// All raw entities, in review order.
    pub fn raw_entities(&self) -> impl Iterator<Item = &RawEntity> {
        self.analyses.iter().flat_map(|a| a.raw_entities.iter())
    }

    /// All classified mentions, in review order.
    pub fn mentions(&self) -> impl Iterator<Item = &ClassifiedMention> {
        self.analyses.iter().flat_map(|a| a.mentions.iter())
    }

    /// One sentiment result per review, in review order.
    pub fn sentiments(&self) -> impl Iterator<Item = &SentimentResult> {
        self.analyses.iter().map(|a| &a.sentiment)
    }

    pub fn analysis(&self, review_id: ReviewId) -> Option<&ReviewAnalysis> {
        self.analyses.iter().find(|a| a.review_id == review_id)
    }

    pub fn to_json(&self) -> ReviewResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReviewError::Serialize {
            message: e.to_string(),
        })
    }
}

/// Extraction, classification, scoring and aggregation wired together.
#[derive(Debug)]
pub struct ReviewPipeline {
    extractor: EntityExtractor,
    classifier: EntityClassifier,
    scorer: SentimentScorer,
    config: PipelineConfig,
}

impl ReviewPipeline {
    pub fn new(extractor: EntityExtractor, lexicons: Lexicons, config: PipelineConfig) -> Self {
        let lexicons = Arc::new(lexicons);
        let classifier = EntityClassifier::new(Arc::clone(&lexicons))
            .with_entity_labels(config.entity_labels.iter().cloned())
            .with_punctuation(config.punctuation);
        let scorer = SentimentScorer::new(lexicons).with_punctuation(config.punctuation);
        Self {
            extractor,
            classifier,
            scorer,
            config,
        }
    }

    /// Build a pipeline, loading lexicons from `config.lexicon_path` when set.
    pub fn from_config(extractor: EntityExtractor, config: PipelineConfig) -> ReviewResult<Self> {
        let lexicons = config.lexicons()?;
        Ok(Self::new(extractor, lexicons, config))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn classifier(&self) -> &EntityClassifier {
        &self.classifier
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    pub fn analyze(&self, review: &Review) -> ReviewAnalysis {
        let raw_entities = self.extractor.extract(review);
        let mentions = self.classifier.classify(review, &raw_entities);
        let sentiment = self.scorer.score(review);
        tracing::debug!(
            review_id = review.id,
            entities = raw_entities.len(),
            mentions = mentions.len(),
            score = sentiment.score,
            "analyzed review"
        );
        ReviewAnalysis {
            review_id: review.id,
            raw_entities,
            mentions,
            sentiment,
        }
    }

    /// Analyze every review, then summarize the batch.
    pub fn run(&self, reviews: &[Review]) -> BatchReport {
        let analyses: Vec<ReviewAnalysis> = reviews.iter().map(|r| self.analyze(r)).collect();

        let mentions: Vec<ClassifiedMention> = analyses
            .iter()
            .flat_map(|a| a.mentions.iter().cloned())
            .collect();
        let sentiments: Vec<SentimentResult> =
            analyses.iter().map(|a| a.sentiment.clone()).collect();
        let raw_entities: Vec<RawEntity> = analyses
            .iter()
            .flat_map(|a| a.raw_entities.iter().cloned())
            .collect();

        let summary = aggregate(&mentions, &sentiments, reviews.len(), self.config.top_n);
        let entity_stats = EntityStats::from_entities(&raw_entities, self.config.entity_stats_top_n);

        tracing::debug!(
            reviews = reviews.len(),
            entities = entity_stats.total_entities,
            unique_brands = summary.unique_brands,
            unique_products = summary.unique_products,
            "analyzed batch"
        );

        BatchReport {
            analyses,
            summary,
            entity_stats,
        }
    }
}

impl Default for ReviewPipeline {
    fn default() -> Self {
        Self::new(
            EntityExtractor::noop(),
            Lexicons::default(),
            PipelineConfig::default(),
        )
    }
}
