// src/core/text.rs

/// Decode file bytes as UTF-8, falling back to Latin-1 (each byte is its own
/// code point) so a stray non-UTF-8 dump still yields text.
pub fn decode_text(bytes: Vec<u8>) -> (String, bool) {
    match String::from_utf8(bytes) {
        Ok(s) => (s, false),
        Err(e) => {
            let latin1: String = e.into_bytes().into_iter().map(char::from).collect();
            (latin1, true)
        }
    }
}

/// First `max_chars` characters of `s`, cut on a char boundary.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_ix, _)) => &s[..byte_ix],
        None => s,
    }
}

/// Shorten for one-line display, appending "..." when cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let cut = truncate_chars(s, max_chars);
    if cut.len() < s.len() {
        let mut out = s!(cut);
        out.push_str("...");
        out
    } else {
        s!(cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn latin1_fallback() {
        let (s, lossy) = decode_text(vec![b'c', b'a', b'f', 0xE9]);
        assert!(lossy);
        assert_eq!(s, "café");

        let (s, lossy) = decode_text("plain".as_bytes().to_vec());
        assert!(!lossy);
        assert_eq!(s, "plain");
    }

    #[test]
    fn preview_marks_cut() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
    }
}
