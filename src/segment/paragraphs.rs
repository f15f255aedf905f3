// src/segment/paragraphs.rs
//! Paragraph fallback: plain prose, one review per blank-line separated block.

use super::Document;
use crate::config::consts::PARAGRAPH_MIN_LINES;
use crate::model::ReviewRecord;

pub fn try_segment(doc: &Document<'_>) -> Option<Vec<ReviewRecord>> {
    if doc.lines.len() <= PARAGRAPH_MIN_LINES {
        return None;
    }

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for raw in &doc.lines {
        let line = raw.trim();
        if !line.is_empty() {
            current.push(line);
        } else if !current.is_empty() {
            paragraphs.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    let out = paragraphs
        .into_iter()
        .filter(|p| doc.is_substantial(p))
        .map(|p| doc.record(None, p))
        .collect();

    Some(out)
}
