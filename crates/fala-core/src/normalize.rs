//! Input normalization.
//!
//! Both sides of a comparison are trimmed of leading and trailing Unicode
//! whitespace and then case-folded by uppercasing and lowercasing with the
//! full Unicode mappings. The round trip makes strings that differ only in
//! case compare equal even where a plain lowercase would not: `ß` and `SS`
//! both fold to `ss`, and `σ`, `ς` and `Σ` fold alike at the same position.
//! All lengths and distances are measured in Unicode scalar values (`char`),
//! not bytes and not grapheme clusters. A precomposed `é` is one character;
//! `e` followed by a combining acute accent is two.
//!
//! Folding can change the character count (`ß` becomes `ss`, `İ` becomes `i`
//! plus a combining dot), so lengths are always taken after normalization.

/// A trimmed, case-folded string split into characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    chars: Vec<char>,
}

impl Normalized {
    /// Normalize `input` for comparison.
    pub fn new(input: &str) -> Self {
        Self {
            chars: normalize(input).chars().collect(),
        }
    }

    /// The normalized text as characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether nothing is left after trimming.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Normalize a string: trim surrounding whitespace, then case-fold.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize("  Hello World \n"), "hello world");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(normalize("bom  dia"), "bom  dia");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        let n = Normalized::new(" \t\u{00A0}\u{3000} ");
        assert!(n.is_empty());
        assert_eq!(n.len(), 0);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let n = Normalized::new("Ação");
        assert_eq!(n.chars(), &['a', 'ç', 'ã', 'o']);
        assert_eq!(n.len(), 4);
    }

    #[test]
    fn combining_marks_count_separately() {
        let n = Normalized::new("e\u{0301}");
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn folding_may_grow() {
        // U+0130 lowercases to 'i' + U+0307
        let n = Normalized::new("\u{0130}");
        assert_eq!(n.chars(), &['i', '\u{0307}']);
        assert_eq!(normalize("Straße"), "strasse");
    }

    #[test]
    fn sharp_s_matches_double_s() {
        assert_eq!(Normalized::new("straße"), Normalized::new("  STRASSE  "));
    }

    #[test]
    fn sigma_forms_fold_alike() {
        assert_eq!(Normalized::new("οσ"), Normalized::new("ΟΣ"));
        assert_eq!(Normalized::new("οσ"), Normalized::new("ος"));
    }
}
