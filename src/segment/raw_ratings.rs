// src/segment/raw_ratings.rs
//! Raw-rating extraction: last resort for dumps that mention ratings but
//! follow neither line grammar.
//!
//! The dump is flattened to one line, every `N stars` / `rated N/5` is taken
//! as a rating, and the text is split on those same matches. Chunks and
//! ratings are paired strictly by index; whichever side is longer loses its
//! excess. A leading chunk shorter than [`PREAMBLE_MAX_CHARS`] is treated as
//! preamble and dropped first, which lines each chunk up with the rating
//! right before it.

use std::sync::LazyLock;

use regex::Regex;

use super::Document;
use crate::config::consts::PREAMBLE_MAX_CHARS;
use crate::model::{ rating_from_stars, ReviewRecord };

static RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s+stars?|rated\s+(\d+)/5").expect("valid raw rating regex")
});

pub fn try_segment(doc: &Document<'_>) -> Option<Vec<ReviewRecord>> {
    let all_text = doc.lines.join(" ");

    let ratings: Vec<Option<u8>> = RATING_RE
        .captures_iter(&all_text)
        .map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .and_then(rating_from_stars)
        })
        .collect();

    if ratings.is_empty() {
        return None;
    }

    let mut chunks: Vec<&str> = RATING_RE.split(&all_text).collect();
    if chunks.len() > ratings.len() && chunks[0].chars().count() < PREAMBLE_MAX_CHARS {
        chunks.remove(0);
    }

    let out = chunks
        .into_iter()
        .zip(ratings)
        .filter(|(chunk, _)| doc.is_substantial(chunk))
        .map(|(chunk, rating)| doc.record(rating, chunk.trim()))
        .collect();

    Some(out)
}
