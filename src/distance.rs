//! Edit distance between strings, measured in Unicode scalar values.

/// Levenshtein distance: the minimum number of single-character
/// insertions, deletions and substitutions turning `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    // Single-row DP: `row[j]` holds the distance between the prefix of `a`
    // processed so far and `b[..j]`.
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b_chars.len()]
}

/// Normalized similarity in `[0, 1]`:
/// `1 - levenshtein(a, b) / max(len(a), len(b))`.
///
/// Two empty strings are identical and score 1.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn classic_examples() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("for", "for loop"), 5);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(levenshtein("cafe", "café"), 1);
        assert_eq!(levenshtein("", "ƒ"), 1);
    }

    #[test]
    fn similarity_bounds() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("loop", "loop"), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
        assert!((similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn identity_is_zero(s in "\\PC{0,24}") {
            prop_assert_eq!(levenshtein(&s, &s), 0);
        }

        #[test]
        fn empty_to_string_is_length(s in "\\PC{0,24}") {
            prop_assert_eq!(levenshtein("", &s), s.chars().count());
            prop_assert_eq!(levenshtein(&s, ""), s.chars().count());
        }

        #[test]
        fn symmetric(a in "[a-e]{0,12}", b in "[a-e]{0,12}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn bounded_by_longer_length(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            let d = levenshtein(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            let s = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
