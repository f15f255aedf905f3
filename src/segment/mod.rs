// src/segment/mod.rs
//! # Review segmentation
//!
//! Turns one raw review dump (a text file scraped or pasted from a review
//! site) into an ordered list of [`ReviewRecord`]s. Dumps come in several
//! loosely structured shapes and nothing says which one a file uses, so
//! segmentation is a **cascade of grammars**: each grammar is a pure
//! `try_segment(&Document) -> Option<Vec<ReviewRecord>>`, and the first one
//! that yields at least one record wins. Records are never merged across
//! grammars.
//!
//! ## Grammars, in cascade order
//! 1. [`marker`]: a line containing `N star(s)` opens a record; following
//!    lines are its text.
//! 2. [`labeled`]: `Rating: N stars` opens a record, `Review: ...` starts its
//!    text.
//! 3. [`raw_ratings`]: the whole dump is split on `N stars` / `rated N/5`
//!    and each chunk is paired with a rating by index.
//! 4. [`paragraphs`]: blank-line separated prose, no ratings.
//!
//! Grammars 1 and 2 are mutually exclusive: the first
//! [`FORMAT_SCAN_LINES`] lines are scanned once for a `N star(s)` cue; if
//! one is found only grammar 1 is attempted, otherwise only grammar 2.
//! A `Rating: N stars` line belongs to grammar 2 and is not a cue.
//!
//! ## Invariants
//! - Output order is appearance order in the source.
//! - No record with empty text is ever emitted. The guessing grammars (3 and
//!   4) additionally drop segments whose trimmed length is not above the
//!   `min_chars` noise threshold.
//! - Segmentation is a single pass over the input and never fails; a dump no
//!   grammar can read yields an empty [`Segmentation`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::consts::{ FORMAT_SCAN_LINES, MIN_REVIEW_CHARS };
use crate::model::{ rating_from_stars, ReviewRecord };

pub mod labeled;
pub mod marker;
pub mod paragraphs;
pub mod raw_ratings;

/// `N star` / `N stars` anywhere in a line.
pub(crate) static STARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+) stars?").expect("valid star regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grammar {
    Marker,
    Labeled,
    RawRatings,
    Paragraphs,
}

impl Grammar {
    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Marker => "star-marker",
            Grammar::Labeled => "labeled-field",
            Grammar::RawRatings => "raw-rating extraction",
            Grammar::Paragraphs => "paragraph",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type TrySegment = fn(&Document<'_>) -> Option<Vec<ReviewRecord>>;

const CASCADE: &[(Grammar, TrySegment)] = &[
    (Grammar::Marker, marker::try_segment),
    (Grammar::Labeled, labeled::try_segment),
    (Grammar::RawRatings, raw_ratings::try_segment),
    (Grammar::Paragraphs, paragraphs::try_segment),
];

/// Result of segmenting one dump. `grammar` is `None` when nothing matched.
#[derive(Clone, Debug, Default)]
pub struct Segmentation {
    pub grammar: Option<Grammar>,
    pub records: Vec<ReviewRecord>,
}

impl Segmentation {
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn len(&self) -> usize { self.records.len() }
}

/// A dump prepared for the grammars: split into lines once, with the
/// marker-vs-labeled cue computed up front.
pub struct Document<'a> {
    pub source_label: &'a str,
    pub lines: Vec<&'a str>,
    pub min_chars: usize,
    marker_cue: bool,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str, source_label: &'a str, min_chars: usize) -> Self {
        let lines: Vec<&str> = text.trim().split('\n').collect();
        // `Rating: N stars` also contains "N stars", but counting it would hand
        // every labeled dump to the marker grammar, which can't read the
        // `Review:` field. So field lines are excluded from the cue.
        let marker_cue = lines
            .iter()
            .take(FORMAT_SCAN_LINES)
            .any(|l| STARS_RE.is_match(l) && !labeled::is_rating_line(l));
        Self { source_label, lines, min_chars, marker_cue }
    }

    /// True when the head of the dump carries an inline `N star(s)` marker.
    pub fn has_marker_cue(&self) -> bool { self.marker_cue }

    pub(crate) fn record(&self, rating: Option<u8>, text: impl Into<String>) -> ReviewRecord {
        let mut rec = ReviewRecord::new(self.source_label, text);
        rec.rating = rating;
        rec
    }

    /// Guessed segments must clear the noise threshold.
    pub(crate) fn is_substantial(&self, segment: &str) -> bool {
        segment.trim().chars().count() > self.min_chars
    }
}

/// Segment with the default noise threshold.
pub fn segment(text: &str, source_label: &str) -> Segmentation {
    segment_with(text, source_label, MIN_REVIEW_CHARS)
}

pub fn segment_with(text: &str, source_label: &str, min_chars: usize) -> Segmentation {
    let doc = Document::new(text, source_label, min_chars);

    for (grammar, try_segment) in CASCADE {
        if let Some(records) = try_segment(&doc) {
            if !records.is_empty() {
                debug!("{}: {} grammar produced {} record(s)", source_label, grammar, records.len());
                return Segmentation { grammar: Some(*grammar), records };
            }
        }
        debug!("{}: {} grammar produced nothing", source_label, grammar);
    }

    Segmentation::default()
}

/// A record being assembled line by line (grammars 1 and 2).
pub(crate) struct Pending {
    rating: Option<u8>,
    reviewer: Option<String>,
    date: Option<String>,
    lines: Vec<String>,
}

impl Pending {
    pub(crate) fn open(stars: &str) -> Self {
        let rating = stars.parse::<u32>().ok().and_then(rating_from_stars);
        Self { rating, reviewer: None, date: None, lines: Vec::new() }
    }

    pub(crate) fn by(mut self, reviewer: Option<String>) -> Self {
        self.reviewer = reviewer;
        self
    }

    pub(crate) fn set_date(&mut self, date: &str) {
        let date = date.trim();
        self.date = (!date.is_empty()).then(|| s!(date));
    }

    pub(crate) fn has_text(&self) -> bool {
        !self.lines.is_empty()
    }

    pub(crate) fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.lines.push(s!(line));
        }
    }

    pub(crate) fn restart_text(&mut self, first: &str) {
        self.lines.clear();
        self.push(first);
    }

    /// Finalise into a record; a pending record that never collected text is dropped.
    pub(crate) fn finish(self, doc: &Document<'_>) -> Option<ReviewRecord> {
        if self.lines.is_empty() {
            return None;
        }
        let mut rec = doc.record(self.rating, self.lines.join(" "));
        if let Some(name) = self.reviewer {
            rec.reviewer = name;
        }
        rec.date = self.date;
        Some(rec)
    }
}
