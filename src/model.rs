// src/model.rs
//! Shared record types that flow through the pipeline:
//! segment → classify → aggregate → rank.

use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::config::consts::ANONYMOUS;

/// Three-way sentiment taxonomy. Any model vocabulary is folded into this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
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

    /// Map a model's raw label. Only POSITIVE / NEGATIVE are recognised
    /// (case-insensitive); everything else is NEUTRAL.
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("POSITIVE") {
            SentimentLabel::Positive
        } else if raw.eq_ignore_ascii_case("NEGATIVE") {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus the model's confidence in [0, 1]. Always set together.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Sentiment {
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        let score = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
        Self { label, score }
    }
}

/// One parsed review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub source_label: String,
    pub reviewer: String,
    /// Explicit star rating 1..=5; `None` when the text carried none.
    pub rating: Option<u8>,
    /// Free-text date, never parsed.
    pub date: Option<String>,
    pub text: String,
    sentiment: Option<Sentiment>,
}

impl ReviewRecord {
    pub fn new(source_label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            reviewer: s!(ANONYMOUS),
            rating: None,
            date: None,
            text: text.into(),
            sentiment: None,
        }
    }

    /// Set the star rating; values outside 1..=5 are kept as "no rating".
    pub fn with_rating(mut self, stars: u32) -> Self {
        self.rating = rating_from_stars(stars);
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }

    pub fn label(&self) -> Option<SentimentLabel> {
        self.sentiment.map(|s| s.label)
    }

    pub fn is_classified(&self) -> bool {
        self.sentiment.is_some()
    }

    /// Filled once by the classifier adapter.
    pub(crate) fn set_sentiment(&mut self, sentiment: Sentiment) {
        self.sentiment = Some(sentiment);
    }
}

/// Stars outside the 1..=5 scale are not a usable rating.
pub fn rating_from_stars(stars: u32) -> Option<u8> {
    if (1..=5).contains(&stars) { Some(stars as u8) } else { None }
}
