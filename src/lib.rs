#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Brand/product mention extraction and rule-based sentiment for product reviews.
//!
//! ## Components
//!
//! - [`EntityExtractor`] - Runs a pluggable [`NerBackend`] and tags its spans
//!   with review ids, degrading to no entities when the backend is missing
//! - [`EntityClassifier`] - Sorts `ORG`/`PRODUCT` spans into brands and
//!   products and scans review tokens for brand and product-line patterns
//! - [`SentimentScorer`] - Counts positive and negative lexicon words
//! - [`ResultAggregator`] - Sentiment distribution and top brand/product lists
//! - [`ReviewPipeline`] - All of the above over a batch of reviews
//!
//! Word lists live in the `layered-review-lexicon` crate and are passed in
//! at construction time.
//!
//! ## Example
//!
//! ```
//! use layered_reviews::{
//!     sample_reviews, EntityExtractor, GazetteerNer, PipelineConfig, ReviewPipeline,
//!     SentimentLabel,
//! };
//! use layered_review_lexicon::Lexicons;
//!
//! let extractor = EntityExtractor::from_loader(GazetteerNer::product_reviews);
//! let pipeline = ReviewPipeline::new(extractor, Lexicons::default(), PipelineConfig::default());
//!
//! let report = pipeline.run(&sample_reviews());
//! assert_eq!(report.summary.total_reviews, 10);
//! assert_eq!(report.summary.top_brands[0].0, "Apple");
//! assert!(report.summary.sentiment_distribution.get(SentimentLabel::Positive) > 0);
//! ```

mod aggregate;
mod classifier;
mod config;
mod display;
mod errors;
mod extractor;
mod pipeline;
mod sample;
mod sentiment;
mod text;
mod types;

pub use aggregate::{
    aggregate, AggregateSummary, EntityStats, MentionCounter, ResultAggregator,
    SentimentDistribution,
};
pub use classifier::{EntityClassifier, PatternHit};
pub use config::{PipelineConfig, DEFAULT_ENTITY_STATS_TOP_N, DEFAULT_TOP_N};
pub use display::ReviewDisplay;
pub use errors::{ReviewError, ReviewResult};
pub use extractor::{
    describe_label, BackendError, EntityExtractor, GazetteerNer, NerBackend, NerSpan, NoopNer,
};
pub use pipeline::{BatchReport, ReviewAnalysis, ReviewPipeline};
pub use sample::{sample_reviews, SAMPLE_REVIEWS};
pub use sentiment::{Polarity, PolarityHit, SentimentScorer};
pub use text::{title_case, tokenize, PunctuationPolicy};
pub use types::{
    ClassifiedMention, MentionCategory, MentionSource, RawEntity, Review, ReviewId,
    SentimentLabel, SentimentResult,
};
