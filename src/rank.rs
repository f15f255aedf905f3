// src/rank.rs
//! Cross-source ranking by positive percentage.

use crate::aggregate::SourceAggregate;

/// One ranked source. Only [`rank`] builds these.
#[derive(Clone, Debug, PartialEq)]
pub struct RankingRow {
    aggregate: SourceAggregate,
    rank: usize,
}

impl RankingRow {
    pub fn aggregate(&self) -> &SourceAggregate {
        &self.aggregate
    }
    pub fn rank(&self) -> usize {
        self.rank
    }
    pub fn source_label(&self) -> &str {
        &self.aggregate.source_label
    }
    pub fn positive_percentage(&self) -> f64 {
        self.aggregate.positive_percentage
    }
}

/// Summary values computed in the same pass as the ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankingSummary {
    /// (label, positive %) of rank 1.
    pub top: Option<(String, f64)>,
    /// (label, positive %) of rank N.
    pub bottom: Option<(String, f64)>,
    /// Percentage points between top and bottom.
    pub spread: f64,
    pub mean_positive_percentage: f64,
    /// Sources strictly above the mean.
    pub above_mean: usize,
    /// Labels with more NEGATIVE than POSITIVE records, in rank order.
    pub more_negative: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ranking {
    rows: Vec<RankingRow>,
    summary: RankingSummary,
}

impl Ranking {
    pub fn rows(&self) -> &[RankingRow] {
        &self.rows
    }
    pub fn summary(&self) -> &RankingSummary {
        &self.summary
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn top(&self, n: usize) -> &[RankingRow] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Order sources by positive percentage, highest first. Ties keep input
/// order; ranks run 1..=N.
pub fn rank(aggregates: &[SourceAggregate]) -> Ranking {
    let mut ordered: Vec<&SourceAggregate> = aggregates.iter().collect();
    // sort_by is stable
    ordered.sort_by(|a, b| b.positive_percentage.total_cmp(&a.positive_percentage));

    let rows: Vec<RankingRow> = ordered
        .into_iter()
        .enumerate()
        .map(|(i, agg)| RankingRow { aggregate: agg.clone(), rank: i + 1 })
        .collect();

    let summary = summarize(&rows);
    Ranking { rows, summary }
}

fn summarize(rows: &[RankingRow]) -> RankingSummary {
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return RankingSummary::default();
    };

    let top = (first.source_label().to_string(), first.positive_percentage());
    let bottom = (last.source_label().to_string(), last.positive_percentage());
    let spread = top.1 - bottom.1;

    let mean = rows.iter().map(RankingRow::positive_percentage).sum::<f64>() / rows.len() as f64;
    let above_mean = rows.iter().filter(|r| r.positive_percentage() > mean).count();

    let more_negative = rows
        .iter()
        .filter(|r| r.aggregate.negative > r.aggregate.positive)
        .map(|r| r.source_label().to_string())
        .collect();

    RankingSummary {
        top: Some(top),
        bottom: Some(bottom),
        spread,
        mean_positive_percentage: mean,
        above_mean,
        more_negative,
    }
}
