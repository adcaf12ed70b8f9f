use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::document::DocumentRecord;
use crate::types::criteria::SortKey;

pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Locale-aware string comparison.
///
/// Approximates root-locale collation: base letters first, then accents
/// (unaccented before accented), then case (lowercase before uppercase).
/// Strings that differ only in code points folded away by all three levels
/// fall back to plain ordering so the result is total.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocaleCollator;

impl Collator for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }

        primary_key(a)
            .cmp(&primary_key(b))
            .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
            .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
            .then_with(|| a.cmp(b))
    }
}

/// Plain code point ordering.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrdinalCollator;

impl Collator for OrdinalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

// Base letters, accents and case removed.
fn primary_key(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// Case removed, accents kept.
fn secondary_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

// Case pattern only.
fn tertiary_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

/// Comparator for one sort key.
///
/// Unknown years compare as year 0, and `YearDescending` is the exact
/// negation of `YearAscending`.
pub fn compare_records<C: Collator + ?Sized>(
    sort_key: SortKey,
    collator: &C,
    a: &DocumentRecord,
    b: &DocumentRecord,
) -> Ordering {
    match sort_key {
        SortKey::Title => collator.compare(&a.title, &b.title),
        SortKey::Author => collator.compare(&a.author, &b.author),
        SortKey::YearAscending => a.sort_year().cmp(&b.sort_year()),
        SortKey::YearDescending => a.sort_year().cmp(&b.sort_year()).reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_fold_at_primary_level() {
        let c = LocaleCollator;
        assert_eq!(c.compare("Ábaco", "alfa"), Ordering::Less);
        assert_eq!(c.compare("Óscar", "Zeta"), Ordering::Less);
        assert_eq!(c.compare("Zeta", "árbol"), Ordering::Greater);
    }

    #[test]
    fn unaccented_then_lowercase_first() {
        let c = LocaleCollator;
        assert_eq!(c.compare("peru", "perú"), Ordering::Less);
        assert_eq!(c.compare("alfa", "Alfa"), Ordering::Less);
        assert_eq!(c.compare("Alfa", "Alfa"), Ordering::Equal);
    }

    #[test]
    fn ordinal_puts_uppercase_first() {
        assert_eq!(OrdinalCollator.compare("Zeta", "alfa"), Ordering::Less);
    }
}
