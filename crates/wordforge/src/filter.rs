use std::collections::HashSet;

use crate::LengthBounds;

/// Removes exact duplicates, keeping the first occurrence of each word.
pub fn dedup(mut words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(words.len());
    words.retain(|word| seen.insert(word.clone()));
    words
}

/// Keeps the words whose byte length lies within `bounds`.
pub fn filter_by_length(mut words: Vec<String>, bounds: LengthBounds) -> Vec<String> {
    words.retain(|word| bounds.contains(word));
    words
}

/// Final gate of the pipeline: dedup, then length filter.
///
/// Idempotent: applying it to its own output changes nothing.
pub fn finalize(pool: Vec<String>, bounds: LengthBounds) -> Vec<String> {
    filter_by_length(dedup(pool), bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let out = dedup(words(&["b", "a", "b", "c", "a"]));
        assert_eq!(out, ["b", "a", "c"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let out = dedup(words(&["Jo", "jo", "JO", "jo"]));
        assert_eq!(out, ["Jo", "jo", "JO"]);
    }

    #[test]
    fn filter_is_inclusive_on_both_ends() {
        let out = filter_by_length(words(&["a", "ab", "abc", "abcd"]), LengthBounds::new(2, 3));
        assert_eq!(out, ["ab", "abc"]);
    }

    #[test]
    fn finalize_is_idempotent() {
        let bounds = LengthBounds::new(2, 4);
        let once = finalize(words(&["ab", "x", "ab", "abcd", "abcde", "cd"]), bounds);
        let twice = finalize(once.clone(), bounds);
        assert_eq!(once, ["ab", "abcd", "cd"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn inverted_bounds_keep_nothing() {
        assert!(finalize(words(&["abcdef"]), LengthBounds::new(8, 4)).is_empty());
    }
}
