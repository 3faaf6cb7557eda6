// src/utils/text.rs
use serde::Serialize;

pub const DEFAULT_PREVIEW_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub preview: String,
    pub should_show_read_more: bool,
    pub is_truncated: bool,
}

/// Cut `text` to at most `max_len` characters, backing up to the last space
/// so words stay whole, and append `...`. Short text is returned as is.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    match head.rfind(' ') {
        Some(idx) if idx > 0 => format!("{}...", &head[..idx]),
        _ => format!("{head}..."),
    }
}

pub fn should_show_read_more(text: &str, max_len: usize) -> bool {
    text.chars().count() > max_len
}

pub fn question_preview(text: &str, max_len: usize) -> Preview {
    let long = should_show_read_more(text, max_len);
    Preview {
        preview: if long { truncate_text(text, max_len) } else { text.to_string() },
        should_show_read_more: long,
        is_truncated: long,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate_text("hello world", 150), "hello world");
        assert_eq!(question_preview("", 150).preview, "");
        assert!(!question_preview("", 150).should_show_read_more);
    }

    #[test]
    fn cuts_at_last_space() {
        assert_eq!(truncate_text("hello brave new world", 12), "hello brave...");
    }

    #[test]
    fn hard_cut_without_space() {
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_text(" abcdefghij", 4), " abc...");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 8 chars, 11 bytes
        let text = "Əyləncə!";
        assert_eq!(truncate_text(text, 8), text);
        assert_eq!(truncate_text("Əyləncə mərkəzi", 10), "Əyləncə...");
    }

    #[test]
    fn preview_flags_long_text() {
        let long = "word ".repeat(40);
        let p = question_preview(&long, DEFAULT_PREVIEW_LEN);
        assert!(p.should_show_read_more);
        assert!(p.is_truncated);
        assert!(p.preview.ends_with("..."));
        assert!(p.preview.chars().count() <= DEFAULT_PREVIEW_LEN + 3);
    }
}
