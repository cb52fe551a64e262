//! Longest-common-subsequence edit scripts.
//!
//! Classic dynamic programming: an `(m+1) x (n+1)` table of LCS lengths,
//! then a backward walk from `(m, n)` reconstructing the edit script. When a
//! step could be read as either an addition or a removal, the addition wins
//! (the new side is consumed first), which keeps ambiguous renderings
//! deterministic.
//!
//! Table time and space are `O(m * n)` in the two sequence lengths.

use serde::{Deserialize, Serialize};

/// One entry of an edit script. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffEntry<T> {
    /// Token present on both sides.
    Unchanged {
        token: T,
        old_num: usize,
        new_num: usize,
    },
    /// Token only on the new side.
    Added { token: T, new_num: usize },
    /// Token only on the old side.
    Removed { token: T, old_num: usize },
}

/// An edit-script entry over text lines.
pub type DiffLine = DiffEntry<String>;

/// Diff two token sequences into an ordered edit script.
pub fn diff_tokens<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Vec<DiffEntry<T>> {
    let dp = lcs_table(old, new);

    let mut entries = Vec::new();
    let mut i = old.len();
    let mut j = new.len();

    // Entries come out end-to-start; reversed before returning.
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            entries.push(DiffEntry::Unchanged {
                token: old[i - 1].clone(),
                old_num: i,
                new_num: j,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i][j - 1] >= dp[i - 1][j]) {
            entries.push(DiffEntry::Added {
                token: new[j - 1].clone(),
                new_num: j,
            });
            j -= 1;
        } else {
            entries.push(DiffEntry::Removed {
                token: old[i - 1].clone(),
                old_num: i,
            });
            i -= 1;
        }
    }

    entries.reverse();
    entries
}

/// Diff two line sequences. [`diff_tokens`] over owned strings.
pub fn diff_lines(old: &[String], new: &[String]) -> Vec<DiffLine> {
    diff_tokens(old, new)
}

/// `dp[i][j]` = length of the LCS of `old[0..i)` and `new[0..j)`.
fn lcs_table<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Vec<usize>> {
    let m = old.len();
    let n = new.len();
    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if old[i - 1] == new[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    dp
}
