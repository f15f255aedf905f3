// src/classify/mod.rs
//! Sentiment classification boundary.
//!
//! The actual model is a capability behind [`SentimentModel`]: text in, raw
//! label + confidence out. [`ClassifierAdapter`] sits in front of it and owns
//! the policy the rest of the crate relies on:
//! - raw labels are folded into POSITIVE / NEGATIVE / NEUTRAL
//!   (see [`SentimentLabel::from_raw`]);
//! - input longer than the model accepts is truncated first;
//! - a failed call never aborts the batch: the record gets NEUTRAL with
//!   [`FALLBACK_SCORE`] and the failure is logged. No retries.
//!
//! Build the model once per batch and hand the same adapter every record.

use thiserror::Error;
use tracing::{ debug, warn };

use crate::config::consts::{ DEFAULT_MAX_INPUT_CHARS, FALLBACK_SCORE };
use crate::core::text::{ preview, truncate_chars };
use crate::model::{ ReviewRecord, Sentiment, SentimentLabel };

pub mod lexicon;

pub use lexicon::LexiconModel;

/// What a model hands back, in its own vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPrediction {
    pub label: String,
    /// Confidence in `label`, expected in [0, 1].
    pub score: f64,
}

impl RawPrediction {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self { label: label.into(), score }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("empty input")]
    EmptyInput,
    #[error("input too long ({len} chars, max {max})")]
    InputTooLong { len: usize, max: usize },
    #[error("model timed out")]
    Timeout,
    #[error("model backend failed: {0}")]
    Backend(String),
}

/// An external text classifier (local model, remote API, rule-based stub...).
pub trait SentimentModel {
    fn name(&self) -> &str;

    /// Longest input, in characters, the model accepts.
    fn max_input_chars(&self) -> usize {
        DEFAULT_MAX_INPUT_CHARS
    }

    fn predict(&self, text: &str) -> Result<RawPrediction, ModelError>;
}

/// Counts from one `classify_records` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub classified: usize,
    pub fallbacks: usize,
    pub truncated: usize,
}

pub struct ClassifierAdapter<'m> {
    model: &'m dyn SentimentModel,
    max_chars: usize,
}

impl<'m> ClassifierAdapter<'m> {
    pub fn new(model: &'m dyn SentimentModel) -> Self {
        Self { model, max_chars: model.max_input_chars() }
    }

    /// Cap input below the model's own limit (never above it).
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars.min(self.model.max_input_chars());
        self
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn fallback() -> Sentiment {
        Sentiment::new(SentimentLabel::Neutral, FALLBACK_SCORE)
    }

    /// Classify one text. Infallible by contract.
    pub fn classify(&self, text: &str) -> Sentiment {
        self.classify_inner(text).0
    }

    /// Returns the sentiment plus (fell_back, truncated).
    fn classify_inner(&self, text: &str) -> (Sentiment, bool, bool) {
        let input = truncate_chars(text, self.max_chars);
        let truncated = input.len() < text.len();
        if truncated {
            debug!("Truncated review to {} chars for {}", self.max_chars, self.model.name());
        }

        match self.model.predict(input) {
            Ok(raw) => {
                let label = SentimentLabel::from_raw(&raw.label);
                (Sentiment::new(label, raw.score), false, truncated)
            }
            Err(e) => {
                warn!("Classification failed ({}): {:?}; using NEUTRAL", e, preview(text, 40));
                (Self::fallback(), true, truncated)
            }
        }
    }

    /// Fill the sentiment of every record in place.
    pub fn classify_records(&self, records: &mut [ReviewRecord]) -> ClassifyStats {
        let mut stats = ClassifyStats::default();
        for rec in records.iter_mut() {
            let (sentiment, fell_back, truncated) = self.classify_inner(&rec.text);
            rec.set_sentiment(sentiment);
            stats.classified += 1;
            if fell_back { stats.fallbacks += 1; }
            if truncated { stats.truncated += 1; }
        }
        stats
    }
}
