//! Order-sensitive concatenation of distinct seed positions.
//!
//! Positions, not values, are what must be distinct: two seeds holding the
//! same string at different positions still combine with each other.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::dedup;

/// Smallest number of seeds joined into one combination.
pub const MIN_WIDTH: usize = 2;

/// Largest number of seeds joined into one combination.
pub const MAX_WIDTH: usize = 3;

/// Concatenates every ordered selection of [`MIN_WIDTH`]..=[`MAX_WIDTH`]
/// distinct seed positions.
///
/// Two-seed combinations come first, then three-seed ones, each in
/// depth-first order. The result is deduplicated by value, first occurrence
/// kept.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(seeds), fields(seed_count = seeds.len()))
)]
pub fn combine(seeds: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for width in MIN_WIDTH..=MAX_WIDTH {
        out.extend(permutations(seeds, width));
    }
    let out = dedup(out);

    #[cfg(feature = "tracing")]
    tracing::debug!(combinations = out.len(), "combined seed tokens");
    out
}

/// Concatenates every ordered selection of exactly `width` distinct seed
/// positions, deduplicated by value.
///
/// Returns nothing when `width` is zero or larger than the seed count.
pub fn permutations(seeds: &[String], width: usize) -> Vec<String> {
    let mut out = Vec::new();
    if width == 0 || width > seeds.len() {
        return out;
    }

    let mut used = vec![false; seeds.len()];
    let mut picked = Vec::with_capacity(width);
    walk(seeds, width, &mut used, &mut picked, &mut out);
    dedup(out)
}

fn walk<'a>(
    seeds: &'a [String],
    width: usize,
    used: &mut [bool],
    picked: &mut Vec<&'a str>,
    out: &mut Vec<String>,
) {
    if picked.len() == width {
        out.push(picked.concat());
        return;
    }

    for (position, seed) in seeds.iter().enumerate() {
        if used[position] {
            continue;
        }
        used[position] = true;
        picked.push(seed);
        walk(seeds, width, used, picked, out);
        picked.pop();
        used[position] = false;
    }
}

/// Number of ordered selections of `k` out of `n` positions, `P(n, k)`.
///
/// Saturates at `usize::MAX`.
pub const fn permutation_count(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut count: usize = 1;
    let mut i = 0;
    while i < k {
        count = count.saturating_mul(n - i);
        i += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn pairs_cover_every_ordering() {
        let pairs = permutations(&seeds(&["a", "b", "c"]), 2);
        assert_eq!(pairs, ["ab", "ac", "ba", "bc", "ca", "cb"]);
    }

    #[test]
    fn triples_cover_every_ordering() {
        let triples = permutations(&seeds(&["a", "b", "c"]), 3);
        assert_eq!(triples, ["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn positions_never_repeat_within_a_combination() {
        let pairs = permutations(&seeds(&["a", "b"]), 2);
        assert!(!pairs.contains(&"aa".to_owned()));
        assert!(!pairs.contains(&"bb".to_owned()));
    }

    #[test]
    fn equal_values_at_distinct_positions_still_combine() {
        let pairs = permutations(&seeds(&["x", "x"]), 2);
        assert_eq!(pairs, ["xx"]);
    }

    #[test]
    fn width_out_of_range_yields_nothing() {
        assert!(permutations(&seeds(&["a", "b"]), 3).is_empty());
        assert!(permutations(&seeds(&["a", "b"]), 0).is_empty());
        assert!(combine(&seeds(&["a"])).is_empty());
        assert!(combine(&[]).is_empty());
    }

    #[test]
    fn combine_lists_pairs_before_triples() {
        let all = combine(&seeds(&["a", "b", "c"]));
        assert_eq!(all.len(), 12);
        assert_eq!(&all[..6], ["ab", "ac", "ba", "bc", "ca", "cb"]);
        assert!(all[6..].iter().all(|word| word.len() == 3));
    }

    #[test]
    fn combine_dedups_across_widths() {
        // "a"+"bc" and "ab"+"c" both give "abc"
        let all = combine(&seeds(&["a", "bc", "ab", "c"]));
        let abc = all.iter().filter(|w| *w == "abc").count();
        assert_eq!(abc, 1);
    }

    #[test]
    fn counts_match_permutation_formula() {
        let four = seeds(&["a", "b", "c", "d"]);
        assert_eq!(permutations(&four, 2).len(), permutation_count(4, 2));
        assert_eq!(permutations(&four, 3).len(), permutation_count(4, 3));
        assert_eq!(permutation_count(4, 2), 12);
        assert_eq!(permutation_count(4, 3), 24);
        assert_eq!(permutation_count(2, 3), 0);
        assert_eq!(permutation_count(5, 0), 1);
    }
}
