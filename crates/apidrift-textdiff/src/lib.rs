//! Generic longest-common-subsequence diff for apidrift.
//!
//! Operates over any slice of tokens with equality. The CLI instantiates it
//! with the lines of two pretty-printed JSON documents; callers are
//! responsible for rendering those lines deterministically.

pub mod lcs;

pub use lcs::{diff_lines, diff_tokens, DiffEntry, DiffLine};
