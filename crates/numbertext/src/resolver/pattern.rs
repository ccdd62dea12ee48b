//! Tag patterns driving the fallback tiers.

use winnow::combinator::{eof, opt};
use winnow::prelude::*;
use winnow::token::{any, one_of};

/// Module stem used for every Norwegian variant once the specific files fail.
pub const NORWEGIAN_FALLBACK: &str = "no";

/// Strip a trailing country code from a file stem.
///
/// A country code is a `-` or `_` followed by exactly two characters at the
/// end of the stem. Returns `None` when the stem has no such suffix.
///
/// ```
/// use numbertext::resolver::strip_country;
///
/// assert_eq!(strip_country("nb_NO"), Some("nb"));
/// assert_eq!(strip_country("en-US"), Some("en"));
/// assert_eq!(strip_country("hu"), None);
/// assert_eq!(strip_country("es_419"), None);
/// ```
pub fn strip_country(stem: &str) -> Option<&str> {
    let split = tail_start(stem, 3)?;
    let mut tail = &stem[split..];
    country_suffix(&mut tail).ok()?;
    Some(&stem[..split])
}

/// Whether the whole tag is one of `nb`, `nn`, optionally followed by `-NO`
/// or `_NO`.
pub fn is_norwegian_variant(tag: &str) -> bool {
    let mut input = tag;
    norwegian_variant(&mut input).is_ok()
}

/// Replace a trailing Norwegian variant in `stem` with [`NORWEGIAN_FALLBACK`].
///
/// Returns `None` when the stem does not end with a Norwegian variant.
pub fn alias_stem(stem: &str) -> Option<String> {
    // Longest suffix first, so "nb_NO" is replaced whole rather than leaving "_NO".
    [5, 2].into_iter().find_map(|len| {
        let split = tail_start(stem, len)?;
        is_norwegian_variant(&stem[split..])
            .then(|| format!("{}{NORWEGIAN_FALLBACK}", &stem[..split]))
    })
}

/// Byte offset where the last `count` characters of `s` begin.
fn tail_start(s: &str, count: usize) -> Option<usize> {
    let (index, _) = s.char_indices().rev().nth(count.checked_sub(1)?)?;
    Some(index)
}

/// `[-_]..` spanning the rest of the input.
fn country_suffix(input: &mut &str) -> ModalResult<()> {
    (one_of(['-', '_']), any, any, eof).void().parse_next(input)
}

/// `n[bn]([-_]NO)?` spanning the rest of the input.
fn norwegian_variant(input: &mut &str) -> ModalResult<()> {
    ('n', one_of(['b', 'n']), opt((one_of(['-', '_']), "NO")), eof)
        .void()
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hyphen_and_underscore_country_codes() {
        assert_eq!(strip_country("fr_CA"), Some("fr"));
        assert_eq!(strip_country("fr-CA"), Some("fr"));
    }

    #[test]
    fn country_code_is_exactly_two_characters() {
        assert_eq!(strip_country("zh_Hant"), None);
        assert_eq!(strip_country("x_1"), None);
        assert_eq!(strip_country("sr_Latn_RS"), Some("sr_Latn"));
    }

    #[test]
    fn country_code_may_be_non_ascii() {
        assert_eq!(strip_country("xx_ÄÖ"), Some("xx"));
    }

    #[test]
    fn short_stems_have_no_country_code() {
        assert_eq!(strip_country(""), None);
        assert_eq!(strip_country("en"), None);
        assert_eq!(strip_country("_US"), Some(""));
    }

    #[test]
    fn norwegian_variants() {
        for tag in ["nb", "nn", "nb-NO", "nb_NO", "nn-NO", "nn_NO"] {
            assert!(is_norwegian_variant(tag), "{tag}");
        }
    }

    #[test]
    fn non_norwegian_tags() {
        for tag in ["no", "nl", "nb-DK", "nb_no", "nbNO", "nb-NOR", "xnb", ""] {
            assert!(!is_norwegian_variant(tag), "{tag}");
        }
    }

    #[test]
    fn alias_replaces_variant_suffix() {
        assert_eq!(alias_stem("nb").as_deref(), Some("no"));
        assert_eq!(alias_stem("nn").as_deref(), Some("no"));
        assert_eq!(alias_stem("nb_NO").as_deref(), Some("no"));
        assert_eq!(alias_stem("hu"), None);
    }
}
