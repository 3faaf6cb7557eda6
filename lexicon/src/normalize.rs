//! Case folding for taxonomy lookups.
//!
//! The resolver tests `label.contains(term)` on folded strings, so a search
//! term, every catalog label and every canonical key must fold through the
//! same function. If one side kept a character the other side dropped, a
//! term carrying a stray zero-width joiner would resolve differently in
//! `resolve_search_term` and `matches_taxonomy`.
//!
//! Folding drops control characters and invisible joiners, then lowercases
//! with Unicode rules so Azerbaijani `Ə` and Cyrillic capitals fold too.

/// Folded form of `s` for containment checks.
pub fn for_matching(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control())
        .flat_map(char::to_lowercase)
        .filter(|c| !is_invisible(*c))
        .collect()
}

/// Trimmed folded form of a user-supplied search term.
pub fn normalize_term(s: &str) -> String {
    for_matching(s.trim())
}

// Zero-width space, non-joiner, joiner, word joiner, byte order mark.
fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_across_scripts() {
        assert_eq!(for_matching("Əyləncə"), "əyləncə");
        assert_eq!(for_matching("РАЗВЛЕЧЕНИЯ"), "развлечения");
        assert_eq!(for_matching("Entertainment"), "entertainment");
    }

    #[test]
    fn strips_zero_width_and_control() {
        assert_eq!(for_matching("sa\u{200B}hil\u{0007}"), "sahil");
        assert_eq!(for_matching("\u{FEFF}Ya\u{2060}sa\u{200D}mal"), "yasamal");
    }

    #[test]
    fn term_and_label_fold_alike() {
        assert!(for_matching("Sahil").contains(&normalize_term(" SA\u{200C}H ")));
        assert_eq!(normalize_term("ЯСАМАЛ\u{200B}"), for_matching("Ясамал"));
    }

    #[test]
    fn term_is_trimmed() {
        assert_eq!(normalize_term("  Sahil \t"), "sahil");
        assert_eq!(normalize_term("   "), "");
    }
}
