//! Levenshtein edit distance between two words.

/// Computes the Levenshtein edit distance between `a` and `b`.
///
/// The distance is the minimum number of single-character insertions,
/// deletions or substitutions needed to transform `a` into `b`. Characters
/// are Unicode scalar values, not bytes, so `"naïve"` and `"naive"` are one
/// edit apart.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row variant of the standard DP table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        cur[0] = i + 1;

        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            cur[j + 1] = (prev[j + 1] + 1).min(cur[j] + 1).min(prev[j] + cost);
        }

        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("hello", "hello"), 0);
        assert_eq!(distance("wrld", "world"), 1);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(distance("naïve", "naive"), 1);
        assert_eq!(distance("😄", "a"), 1);
    }

    #[test]
    fn identity_and_symmetry() {
        let words = ["", "a", "word", "worlds", "naïve"];
        for a in &words {
            assert_eq!(distance(a, a), 0);
            for b in &words {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn triangle_inequality() {
        let words = ["", "cat", "hat", "chart", "smart"];
        for a in &words {
            for b in &words {
                for c in &words {
                    assert!(distance(a, c) <= distance(a, b) + distance(b, c));
                }
            }
        }
    }
}
