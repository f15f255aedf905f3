// src/segment/marker.rs
//! Star-marker grammar (Yelp-style dumps).
//!
//! ```text
//! Jane D.  5 stars  3/2/2024
//! Great crust and the sauce was perfect.
//! Will be back.
//! Sam K.  2 stars
//! ...
//! ```
//! Any line with `N star(s)` opens a record; whatever else is on that line is
//! ignored. The next line is always taken as the start of the text (even if it
//! is itself a marker line), and every line after it joins the text until the
//! next marker.

use super::{ Document, Pending, STARS_RE };
use crate::model::ReviewRecord;

pub fn try_segment(doc: &Document<'_>) -> Option<Vec<ReviewRecord>> {
    if !doc.has_marker_cue() {
        return None;
    }

    let lines = &doc.lines;
    let mut out = Vec::new();
    let mut current: Option<Pending> = None;
    let mut i = 0usize;

    while i < lines.len() {
        let line = lines[i].trim();

        if let Some(caps) = STARS_RE.captures(line) {
            if let Some(done) = current.take().and_then(|p| p.finish(doc)) {
                out.push(done);
            }
            let mut pending = Pending::open(&caps[1]);

            // Text starts on the following line.
            i += 1;
            if let Some(next) = lines.get(i) {
                pending.push(next);
            }
            current = Some(pending);
        } else if let Some(pending) = current.as_mut() {
            pending.push(line);
        }

        i += 1;
    }

    if let Some(done) = current.and_then(|p| p.finish(doc)) {
        out.push(done);
    }

    Some(out)
}
