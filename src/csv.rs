// src/csv.rs
//! Comparison table persistence (CSV/TSV).
//!
//! Column set and order are fixed; the dashboard and any downstream reader
//! rely on them.

use std::io;

use serde::{ Deserialize, Serialize };
use tracing::warn;

use crate::aggregate::SourceAggregate;
use crate::error::Result;
use crate::model::ReviewRecord;
use crate::rank::{ Ranking, RankingRow };

pub const COMPARISON_HEADERS: [&str; 8] = [
    "Company",
    "Positive",
    "Negative",
    "Neutral",
    "Total",
    "Positive_Percentage",
    "Avg_Sentiment_Score",
    "Rank",
];

/* ---------------- Row shape ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
    #[serde(rename = "Total")]
    pub total: usize,
    #[serde(rename = "Positive_Percentage")]
    pub positive_percentage: f64,
    #[serde(rename = "Avg_Sentiment_Score")]
    pub avg_sentiment_score: f64,
    #[serde(rename = "Rank")]
    pub rank: usize,
}

impl From<&RankingRow> for ComparisonRow {
    fn from(row: &RankingRow) -> Self {
        let a = row.aggregate();
        Self {
            company: a.source_label.clone(),
            positive: a.positive,
            negative: a.negative,
            neutral: a.neutral,
            total: a.total,
            positive_percentage: a.positive_percentage,
            avg_sentiment_score: a.average_sentiment_score,
            rank: row.rank(),
        }
    }
}

impl ComparisonRow {
    /// Back to an aggregate; `rank` is dropped and recomputed by the ranker.
    pub fn to_aggregate(&self) -> SourceAggregate {
        SourceAggregate {
            source_label: self.company.clone(),
            positive: self.positive,
            negative: self.negative,
            neutral: self.neutral,
            total: self.total,
            positive_percentage: self.positive_percentage,
            average_sentiment_score: self.avg_sentiment_score,
        }
    }
}

/* ---------------- Writing ---------------- */

/// Header row always, then one row per source in rank order.
pub fn write_comparison<W: io::Write>(w: W, ranking: &Ranking, delim: u8) -> Result<()> {
    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .from_writer(w);

    writer.write_record(COMPARISON_HEADERS)?;
    for row in ranking.rows() {
        writer.serialize(ComparisonRow::from(row))?;
    }
    writer.flush().map_err(::csv::Error::from)?;
    Ok(())
}

pub fn comparison_to_string(ranking: &Ranking, delim: u8) -> Result<String> {
    let mut buf = Vec::new();
    write_comparison(&mut buf, ranking, delim)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub const REVIEW_HEADERS: [&str; 7] = [
    "source", "reviewer", "rating", "date", "text", "sentiment", "sentiment_score",
];

/// Classified records of one source. Missing rating/date/sentiment are empty cells.
pub fn write_reviews<W: io::Write>(w: W, records: &[ReviewRecord], delim: u8) -> Result<()> {
    let mut writer = ::csv::WriterBuilder::new().delimiter(delim).from_writer(w);

    writer.write_record(REVIEW_HEADERS)?;
    for rec in records {
        let rating = rec.rating.map(|r| r.to_string()).unwrap_or_default();
        let (label, score) = match rec.sentiment() {
            Some(s) => (s!(s.label.as_str()), format!("{:.4}", s.score)),
            None => (s!(), s!()),
        };
        let date = rec.date.as_deref().unwrap_or_default();
        writer.write_record(row![rec.source_label, rec.reviewer, rating, date, rec.text, label, score])?;
    }
    writer.flush().map_err(::csv::Error::from)?;
    Ok(())
}

/* ---------------- Reading ---------------- */

/// Read a comparison table. Columns are matched by header name, extra
/// columns are ignored, and rows that don't parse are skipped with a warning.
pub fn read_comparison<R: io::Read>(r: R, delim: u8) -> Result<Vec<ComparisonRow>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delim)
        .trim(::csv::Trim::All)
        .flexible(true)
        .from_reader(r);

    let mut rows = Vec::new();
    for (i, rec) in reader.deserialize::<ComparisonRow>().enumerate() {
        match rec {
            Ok(row) => rows.push(row),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => warn!("Skipping comparison row {}: {}", i + 1, e),
        }
    }
    Ok(rows)
}
