//! Text normalization for language-insensitive matching.
//!
//! Every comparison in the engine (interest keys, city filters, query keywords,
//! category tokens) goes through [`normalize`], so `"Café"` and `"cafe"` match.

use unicode_normalization::{UnicodeNormalization, char::canonical_combining_class};

/// Canonicalizes text for comparison.
///
/// Steps, in order:
/// 1. Trim leading and trailing whitespace
/// 2. Decompose to NFD and drop combining marks (`é` becomes `e`)
/// 3. Lowercase
/// 4. Collapse every whitespace run to a single space
///
/// Non-text values are normalized through their `Display` form. Total and
/// idempotent: blank input yields an empty string, and
/// `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(value: &str) -> String {
    let stripped = strip_marks(value.trim().nfd());
    // Lowercasing can reintroduce a combining mark (U+0130 lowers to `i` + U+0307).
    let lowered = strip_marks(stripped.to_lowercase().chars());
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collects the characters that are not combining marks.
fn strip_marks(chars: impl Iterator<Item = char>) -> String {
    chars.filter(|c| canonical_combining_class(*c) == 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_lowercases() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("Marchés de Noël"), "marches de noel");
        assert_eq!(normalize("WEIHNACHTSMÄRKTE"), "weihnachtsmarkte");
    }

    #[test]
    fn accented_and_plain_forms_match() {
        assert_eq!(normalize("Café"), normalize("cafe"));
        // Precomposed and decomposed input normalize identically.
        assert_eq!(normalize("Cafe\u{301}"), normalize("Caf\u{e9}"));
    }

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize("  jazz \t\n  paris  "), "jazz paris");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\u{301}"), "");
    }

    #[test]
    fn dotted_capital_i_loses_its_dot() {
        assert_eq!(normalize("İstanbul"), "istanbul");
    }

    #[test]
    fn idempotent() {
        for input in [
            "Café  Crème",
            " \u{301}a",
            "İİ",
            "Fête de la Musique",
            "ΟΔΟΣ",
            "  ",
            "Flohmärkte / Mercadillos",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn non_text_values_normalize_through_display() {
        assert_eq!(normalize(&2024.to_string()), "2024");
    }
}
