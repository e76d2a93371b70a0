//! Collation keys for display-name ordering.
//!
//! Room names are user-generated text in arbitrary scripts. Ordering
//! compares case- and diacritic-insensitively: names are NFKD-decomposed,
//! combining marks are dropped, and the remainder is lowercased. Full
//! locale tailoring (e.g. Swedish å after z) is out of scope; the key is
//! deterministic across platforms, which the ordering contract values more.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Build the sort key for a display name.
pub(crate) fn sort_key(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_is_folded() {
        assert_eq!(sort_key("Apple"), sort_key("aPPLE"));
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(sort_key("Éclair"), "eclair");
        assert_eq!(sort_key("Über"), "uber");
        assert_eq!(sort_key("naïve"), "naive");
    }

    #[test]
    fn distinct_names_stay_distinct() {
        assert!(sort_key("apple") < sort_key("banana"));
        assert!(sort_key("Apple") < sort_key("Zebra"));
    }

    #[test]
    fn compatibility_forms_normalize() {
        // Fullwidth letters decompose to their ASCII counterparts.
        assert_eq!(sort_key("Ｍatrix"), "matrix");
    }
}
