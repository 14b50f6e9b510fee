//! Levenshtein edit distance.
//!
//! Fills the full `(len(a) + 1) × (len(b) + 1)` table:
//!
//! - `t[i][0] = i` and `t[0][j] = j`
//! - `t[i][j] = t[i-1][j-1]` when the characters match
//! - otherwise `1 + min(substitute, insert, delete)`
//!
//! Time and space are both O(n·m). Inputs are single words or short phrases.

/// Edit distance between two strings, compared character by character.
///
/// No normalization is applied; see [`crate::score::score`] for the
/// case- and whitespace-insensitive comparison.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// Edit distance over pre-split character slices.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                let substitute = table[i - 1][j - 1];
                let insert = table[i][j - 1];
                let delete = table[i - 1][j];
                1 + substitute.min(insert).min(delete)
            };
        }
    }

    table[m][n]
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_is_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn distance_bounded_by_longer_length(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            let longest = a.chars().count().max(b.chars().count());
            let shortest = a.chars().count().min(b.chars().count());
            let d = edit_distance(&a, &b);
            prop_assert!(d <= longest);
            prop_assert!(d >= longest - shortest);
        }

        #[test]
        fn matches_strsim(a in "[a-zçãé ]{0,10}", b in "[a-zçãé ]{0,10}") {
            // strsim also compares by `char`
            prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
        }
    }
}
