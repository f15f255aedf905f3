// src/segment/labeled.rs
//! Labeled-field grammar.
//!
//! ```text
//! Rating: 4 stars
//! Review: Loved the harissa chicken pizza.
//! Crust was a bit thin.
//! Rating: 1 star
//! Review: Waited an hour.
//! ```
//! `Rating:` opens a record. A `Review:` line (re)starts its text; lines after
//! it accumulate until the next `Rating:`. Lines between `Rating:` and
//! `Review:` only count when no `Review:` line follows.
//!
//! Scraper output also carries optional fields and separators:
//!
//! ```text
//! Reviewer: Amy
//! Rating: 1 star
//! Date: 2024-03-02
//! Review: Soggy.
//! ------------------------------------------------------------
//! ```
//! `Reviewer:` closes the current record and names the next one. `Date:`
//! before any text fills the record's date. Rule lines (`---`, `===`) are
//! skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::{ Document, Pending };
use crate::model::ReviewRecord;

static RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Rating:\s+(\d+)\s+stars?").expect("valid rating regex")
});

static REVIEW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Review:\s*(.*)$").expect("valid review regex")
});

static REVIEWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Reviewer:\s*(.*)$").expect("valid reviewer regex")
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Date:\s*(.*)$").expect("valid date regex")
});

/// `Rating: N stars` header line.
pub fn is_rating_line(line: &str) -> bool {
    RATING_RE.is_match(line.trim())
}

fn is_rule_line(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| matches!(c, '-' | '=' | '_'))
}

pub fn try_segment(doc: &Document<'_>) -> Option<Vec<ReviewRecord>> {
    if doc.has_marker_cue() {
        return None;
    }

    let mut out = Vec::new();
    let mut current: Option<Pending> = None;
    let mut next_reviewer: Option<String> = None;

    for raw in &doc.lines {
        let line = raw.trim();
        if is_rule_line(line) {
            continue;
        }

        if let Some(caps) = REVIEWER_RE.captures(line) {
            if let Some(done) = current.take().and_then(|p| p.finish(doc)) {
                out.push(done);
            }
            let name = caps[1].trim();
            next_reviewer = (!name.is_empty()).then(|| s!(name));
            continue;
        }

        if let Some(caps) = RATING_RE.captures(line) {
            if let Some(done) = current.take().and_then(|p| p.finish(doc)) {
                out.push(done);
            }
            current = Some(Pending::open(&caps[1]).by(next_reviewer.take()));
            continue;
        }

        let Some(pending) = current.as_mut() else { continue };

        if !pending.has_text() {
            if let Some(caps) = DATE_RE.captures(line) {
                pending.set_date(&caps[1]);
                continue;
            }
        }

        if let Some(caps) = REVIEW_RE.captures(line) {
            pending.restart_text(&caps[1]);
        } else {
            pending.push(line);
        }
    }

    if let Some(done) = current.and_then(|p| p.finish(doc)) {
        out.push(done);
    }

    Some(out)
}
