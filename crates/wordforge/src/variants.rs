//! Leet-speak and inverted-case variants of the word pool.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::dedup;

/// Fixed leet substitution table, matched case-insensitively.
pub const LEET_TABLE: &[(char, &str)] = &[
    ('a', "4"),
    ('e', "3"),
    ('i', "1"),
    ('o', "0"),
    ('s', "5"),
];

/// Computes the variants of `pool` for the enabled expansions.
///
/// Both expansions read the pool as given; neither sees the other's output.
/// Leet variants are listed before case variants.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pool), fields(pool_size = pool.len()))
)]
pub fn expand(pool: &[String], leet: bool, capitalize: bool) -> Vec<String> {
    let mut out = Vec::new();
    if leet {
        out.extend(leet_variants(pool));
    }
    if capitalize {
        out.extend(case_variants(pool));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(variants = out.len(), "expanded word pool");
    out
}

/// Replaces every character found in [`LEET_TABLE`].
///
/// ```
/// assert_eq!(wordforge::leet("Sasha"), "545h4");
/// ```
pub fn leet(word: &str) -> String {
    substitute(word, |c| lookup(c).is_some())
}

/// Replaces only the characters matching `letter`, ignoring case.
///
/// ```
/// assert_eq!(wordforge::leet_only("Sasha", 's'), "5a5ha");
/// ```
pub fn leet_only(word: &str, letter: char) -> String {
    let letter = letter.to_ascii_lowercase();
    substitute(word, |c| c == letter)
}

fn lookup(lower: char) -> Option<&'static str> {
    LEET_TABLE
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, to)| *to)
}

fn substitute(word: &str, mut applies: impl FnMut(char) -> bool) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        let lower = c.to_ascii_lowercase();
        match lookup(lower) {
            Some(to) if applies(lower) => out.push_str(to),
            _ => out.push(c),
        }
    }
    out
}

/// Leet variants for each word: the full substitution, then one variant per
/// table entry applied alone. Candidates equal to their source are skipped.
///
/// The single-rule forms go beyond a plain whole-table substitution and add
/// at most [`LEET_TABLE`]`.len()` extra words per source word.
pub fn leet_variants(words: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        let full = leet(word);
        if full == *word {
            // nothing in the word is substitutable
            continue;
        }
        out.push(full);
        for (letter, _) in LEET_TABLE {
            let single = leet_only(word, *letter);
            if single != *word {
                out.push(single);
            }
        }
    }
    dedup(out)
}

/// Swaps the case of every ASCII letter.
///
/// ```
/// assert_eq!(wordforge::invert_case("CamelCase"), "cAMELcASE");
/// ```
pub fn invert_case(word: &str) -> String {
    word.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Each word followed by its case-inverted form when that differs.
pub fn case_variants(words: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(words.len() * 2);
    for word in words {
        out.push(word.clone());
        let inverted = invert_case(word);
        if inverted != *word {
            out.push(inverted);
        }
    }
    dedup(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn leet_matches_case_insensitively() {
        assert_eq!(leet("SEASIDE"), "53451D3");
        assert_eq!(leet("xyz"), "xyz");
    }

    #[test]
    fn leet_variants_include_single_rule_forms() {
        let variants = leet_variants(&words(&["Sasha"]));
        assert_eq!(variants, ["545h4", "S4sh4", "5a5ha"]);
    }

    #[test]
    fn leet_variants_add_at_most_one_per_rule() {
        let variants = leet_variants(&words(&["aeios"]));
        assert_eq!(
            variants,
            ["43105", "4eios", "a3ios", "ae1os", "aei0s", "aeio5"]
        );
        assert_eq!(variants.len(), 1 + LEET_TABLE.len());
    }

    #[test]
    fn leet_variants_skip_unchanged_words() {
        assert!(leet_variants(&words(&["xyz", "1990"])).is_empty());
    }

    #[test]
    fn leet_variants_with_one_rule_do_not_repeat() {
        // only 'o' applies, so the full and single-rule forms coincide
        assert_eq!(leet_variants(&words(&["bob"])), ["b0b"]);
    }

    #[test]
    fn invert_case_swaps_letters_only() {
        assert_eq!(invert_case("CamelCase"), "cAMELcASE");
        assert_eq!(invert_case("ab12CD!"), "AB12cd!");
        assert_eq!(invert_case("é"), "é");
    }

    #[test]
    fn case_variants_keep_original() {
        let variants = case_variants(&words(&["CamelCase", "1990"]));
        assert_eq!(variants, ["CamelCase", "cAMELcASE", "1990"]);
    }

    #[test]
    fn case_variants_are_deduplicated() {
        let variants = case_variants(&words(&["ab", "AB"]));
        assert_eq!(variants, ["ab", "AB"]);
    }

    #[test]
    fn expansions_are_not_chained() {
        let variants = expand(&words(&["sa"]), true, true);
        assert_eq!(variants, ["54", "s4", "5a", "sa", "SA"]);
        // "5A" would only appear if leet output were case-inverted
        assert!(!variants.contains(&"5A".to_owned()));
    }

    #[test]
    fn disabled_expansions_add_nothing() {
        assert!(expand(&words(&["sasha"]), false, false).is_empty());
    }
}
