// src/aggregate.rs
//! Per-source rollup of classified records.

use crate::config::consts::FALLBACK_SCORE;
use crate::model::{ ReviewRecord, SentimentLabel };

#[derive(Clone, Debug, PartialEq)]
pub struct SourceAggregate {
    pub source_label: String,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
    /// positive / total × 100; 0 when total is 0.
    pub positive_percentage: f64,
    /// Mean classifier confidence; 0 when total is 0.
    pub average_sentiment_score: f64,
}

impl SourceAggregate {
    pub fn empty(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            positive: 0,
            negative: 0,
            neutral: 0,
            total: 0,
            positive_percentage: 0.0,
            average_sentiment_score: 0.0,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        ratio_pct(self.count(label), self.total)
    }
}

/// Build the aggregate for one source. Pure; the same slice always yields
/// the same value.
///
/// A record that never went through the classifier counts as NEUTRAL with
/// the fallback score, the same outcome a failed classification gets.
pub fn aggregate(source_label: &str, records: &[ReviewRecord]) -> SourceAggregate {
    let mut agg = SourceAggregate::empty(source_label);
    let mut score_sum = 0.0;

    for rec in records {
        let (label, score) = match rec.sentiment() {
            Some(s) => (s.label, s.score),
            None => (SentimentLabel::Neutral, FALLBACK_SCORE),
        };
        match label {
            SentimentLabel::Positive => agg.positive += 1,
            SentimentLabel::Negative => agg.negative += 1,
            SentimentLabel::Neutral => agg.neutral += 1,
        }
        score_sum += score;
    }

    agg.total = records.len();
    agg.positive_percentage = ratio_pct(agg.positive, agg.total);
    agg.average_sentiment_score = if agg.total == 0 { 0.0 } else { score_sum / agg.total as f64 };
    agg
}

fn ratio_pct(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { part as f64 / total as f64 * 100.0 }
}
