// src/report.rs
//! Plain-text renderings and per-source detail.

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;

use crate::aggregate::SourceAggregate;
use crate::config::consts::{ KeywordGroups, MENU_ITEMS, NEGATIVE_ASPECTS, POSITIVE_ASPECTS };
use crate::model::{ ReviewRecord, SentimentLabel };
use crate::rank::Ranking;

const RULE_WIDE: usize = 85;

/// Render the cross-source ranking report.
pub fn render_ranking_report(ranking: &Ranking, date: NaiveDate) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_ranking_report(&mut out, ranking, date);
    out
}

fn write_ranking_report(out: &mut String, ranking: &Ranking, date: NaiveDate) -> std::fmt::Result {
    writeln!(out, "COMPANY SENTIMENT ANALYSIS RANKING REPORT")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out)?;
    writeln!(out, "Analysis Date: {}", date.format("%Y-%m-%d"))?;
    writeln!(out, "Total Companies Analyzed: {}", ranking.len())?;
    writeln!(out)?;

    if ranking.is_empty() {
        writeln!(out, "No sources produced any reviews; nothing to rank.")?;
        return Ok(());
    }

    writeln!(out, "COMPANY RANKINGS BY POSITIVE SENTIMENT PERCENTAGE:")?;
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(
        out,
        "{:<5} {:<25} {:<10} {:<10} {:<10} {:<10} {:<10}",
        "Rank", "Company", "Positive %", "Positive", "Negative", "Neutral", "Total"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDE))?;
    for row in ranking.rows() {
        let a = row.aggregate();
        writeln!(
            out,
            "{:<5} {:<25} {:<10.1} {:<10} {:<10} {:<10} {:<10}",
            row.rank(), a.source_label, a.positive_percentage, a.positive, a.negative, a.neutral, a.total
        )?;
    }

    let s = ranking.summary();
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "SUMMARY OBSERVATIONS:")?;
    writeln!(out, "{}", "=".repeat(60))?;
    if let Some((label, pct)) = &s.top {
        writeln!(out, "• Top ranked company: {} with {:.1}% positive reviews", label, pct)?;
    }
    if let Some((label, pct)) = &s.bottom {
        writeln!(out, "• Lowest ranked company: {} with {:.1}% positive reviews", label, pct)?;
    }
    writeln!(out, "• Difference between highest and lowest: {:.1} percentage points", s.spread)?;
    writeln!(out, "• Average positive sentiment across all companies: {:.1}%", s.mean_positive_percentage)?;
    writeln!(out, "• {} companies performed above average in positive sentiment", s.above_mean)?;

    if !s.more_negative.is_empty() {
        writeln!(out, "• {} companies have more negative than positive reviews", s.more_negative.len())?;
        for row in ranking.rows().iter().filter(|r| s.more_negative.iter().any(|l| l == r.source_label())) {
            let a = row.aggregate();
            writeln!(out, "  - {}: {} negative vs {} positive", a.source_label, a.negative, a.positive)?;
        }
    }
    Ok(())
}

/// Index into the source's record list plus the classifier score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReviewRef {
    pub index: usize,
    pub score: f64,
}

/// Record whose explicit rating disagrees with its sentiment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrepancy {
    pub index: usize,
    pub rating: u8,
    pub label: SentimentLabel,
}

/// How often one menu item shows up in POSITIVE and NEGATIVE reviews.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemMentions {
    pub item: &'static str,
    pub positive: usize,
    pub negative: usize,
}

impl ItemMentions {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Extra per-source numbers shown next to the aggregate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceDetail {
    /// Count of records per star, `[1★, 2★, 3★, 4★, 5★]`.
    pub rating_distribution: [usize; 5],
    /// Mean over records that carry a rating.
    pub average_rating: Option<f64>,
    pub most_positive: Option<ReviewRef>,
    pub most_negative: Option<ReviewRef>,
    pub discrepancies: Vec<Discrepancy>,
    /// Menu items mentioned at least once, most mentioned first.
    pub item_mentions: Vec<ItemMentions>,
    /// Aspects found in POSITIVE reviews, first seen first.
    pub positive_aspects: Vec<&'static str>,
    /// Aspects found in NEGATIVE reviews, first seen first.
    pub negative_aspects: Vec<&'static str>,
}

impl SourceDetail {
    pub fn from_records(records: &[ReviewRecord]) -> Self {
        let mut d = SourceDetail::default();
        let mut rating_sum = 0u32;
        let mut rated = 0u32;
        let mut items: Vec<ItemMentions> = MENU_ITEMS
            .iter()
            .map(|&item| ItemMentions { item, positive: 0, negative: 0 })
            .collect();

        for (index, rec) in records.iter().enumerate() {
            // Off-scale values (0 is the "no rating" sentinel) are not counted.
            let slot = rec.rating.and_then(|r| {
                usize::from(r).checked_sub(1).and_then(|i| d.rating_distribution.get_mut(i)).map(|n| (r, n))
            });
            if let Some((r, n)) = slot {
                *n += 1;
                rating_sum += u32::from(r);
                rated += 1;
            }

            let Some(sent) = rec.sentiment() else { continue };
            let here = ReviewRef { index, score: sent.score };
            match sent.label {
                SentimentLabel::Positive => keep_highest(&mut d.most_positive, here),
                SentimentLabel::Negative => keep_highest(&mut d.most_negative, here),
                SentimentLabel::Neutral => {}
            }

            if sent.label != SentimentLabel::Neutral {
                let lower = rec.text.to_lowercase();
                for m in items.iter_mut().filter(|m| lower.contains(m.item)) {
                    if sent.label == SentimentLabel::Positive { m.positive += 1 } else { m.negative += 1 }
                }
                let (rules, found) = if sent.label == SentimentLabel::Positive {
                    (POSITIVE_ASPECTS, &mut d.positive_aspects)
                } else {
                    (NEGATIVE_ASPECTS, &mut d.negative_aspects)
                };
                for &(aspect, groups) in rules {
                    if mentions_all(&lower, groups) && !found.contains(&aspect) {
                        found.push(aspect);
                    }
                }
            }

            if let Some(rating) = rec.rating.filter(|r| (1..=5).contains(r)) {
                let clash = (rating >= 4 && sent.label == SentimentLabel::Negative)
                    || (rating <= 2 && sent.label == SentimentLabel::Positive);
                if clash {
                    d.discrepancies.push(Discrepancy { index, rating, label: sent.label });
                }
            }
        }

        if rated > 0 {
            d.average_rating = Some(f64::from(rating_sum) / f64::from(rated));
        }

        items.retain(|m| m.total() > 0);
        // stable: equal totals keep MENU_ITEMS order
        items.sort_by(|a, b| b.total().cmp(&a.total()));
        d.item_mentions = items;
        d
    }
}

/// Every group has at least one keyword in `lower`.
fn mentions_all(lower: &str, groups: KeywordGroups) -> bool {
    groups.iter().all(|g| g.iter().any(|k| lower.contains(*k)))
}

// First one wins on equal score.
fn keep_highest(slot: &mut Option<ReviewRef>, cand: ReviewRef) {
    match slot {
        Some(cur) if cur.score >= cand.score => {}
        _ => *slot = Some(cand),
    }
}

/// Render the plain-text report for one source. `table_path` is where its
/// classified-reviews table was written, if anywhere.
pub fn render_source_report(
    aggregate: &SourceAggregate,
    records: &[ReviewRecord],
    date: NaiveDate,
    table_path: Option<&Path>,
) -> String {
    let mut out = String::new();
    let detail = SourceDetail::from_records(records);
    let _ = write_source_report(&mut out, aggregate, records, &detail, date, table_path);
    out
}

fn write_source_report(
    out: &mut String,
    a: &SourceAggregate,
    records: &[ReviewRecord],
    d: &SourceDetail,
    date: NaiveDate,
    table_path: Option<&Path>,
) -> std::fmt::Result {
    writeln!(out, "SENTIMENT ANALYSIS REPORT")?;
    writeln!(out, "Company: {}", a.source_label)?;
    writeln!(out, "Analysis Date: {}", date.format("%Y-%m-%d"))?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;

    writeln!(out, "SUMMARY STATISTICS:")?;
    writeln!(out, "Total Reviews Analyzed: {}", a.total)?;
    match d.average_rating {
        Some(avg) => writeln!(out, "Average Star Rating: {avg:.2} / 5.0")?,
        None => writeln!(out, "Average Star Rating: N/A (No ratings explicitly provided)")?,
    }
    writeln!(out)?;

    writeln!(out, "SENTIMENT BREAKDOWN:")?;
    for (name, label) in [
        ("Positive", SentimentLabel::Positive),
        ("Neutral", SentimentLabel::Neutral),
        ("Negative", SentimentLabel::Negative),
    ] {
        writeln!(out, "{} Reviews: {} ({:.1}%)", name, a.count(label), a.percentage(label))?;
    }
    writeln!(out)?;

    writeln!(out, "MENU ITEM SENTIMENT ANALYSIS:")?;
    writeln!(out, "{:<20} {:<10} {:<10} {:<10}", "Item", "Positive", "Negative", "Total")?;
    writeln!(out, "{}", "-".repeat(50))?;
    for m in &d.item_mentions {
        writeln!(out, "{:<20} {:<10} {:<10} {:<10}", m.item, m.positive, m.negative, m.total())?;
    }
    writeln!(out)?;

    for (title, aspects) in [
        ("KEY POSITIVE ASPECTS MENTIONED:", &d.positive_aspects),
        ("KEY NEGATIVE ASPECTS MENTIONED:", &d.negative_aspects),
    ] {
        if aspects.is_empty() {
            continue;
        }
        writeln!(out, "{title}")?;
        for aspect in aspects {
            writeln!(out, "- {aspect}")?;
        }
        writeln!(out)?;
    }

    for (title, pick) in [("MOST POSITIVE REVIEW", d.most_positive), ("MOST NEGATIVE REVIEW", d.most_negative)] {
        let Some((r, rec)) = pick.and_then(|r| records.get(r.index).map(|rec| (r, rec))) else { continue };
        writeln!(out, "{} (Score: {:.3}):", title, r.score)?;
        match rec.rating {
            Some(stars) => writeln!(out, "Rating: {stars} stars")?,
            None => writeln!(out, "Rating: none")?,
        }
        writeln!(out, "Review: {}", rec.text)?;
        writeln!(out)?;
    }

    if let Some(p) = table_path {
        writeln!(out, "Full analysis results saved to: {}", p.display())?;
    }
    Ok(())
}
