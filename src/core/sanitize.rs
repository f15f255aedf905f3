// src/core/sanitize.rs

use crate::config::consts::KNOWN_SUFFIXES;

/// "Pizza_Hut_reviews_with_ratings.txt" → "Pizza_Hut".
/// Drops a trailing `.txt`, then removes each known suffix wherever it occurs.
pub fn source_label_from_file_name(file_name: &str) -> String {
    let mut label = file_name
        .strip_suffix(".txt")
        .unwrap_or(file_name)
        .to_string();
    for suffix in KNOWN_SUFFIXES {
        label = label.replace(suffix, "");
    }
    if label.is_empty() { s!(file_name) } else { label }
}

/// Make a label safe to use as a file stem: alphanumerics kept, whitespace
/// runs become one '_', other punctuation dropped.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("source") } else { out }
}
