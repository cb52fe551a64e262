//! Schema diff engine for apidrift.
//!
//! Walks two JSON documents into insertion-ordered path→type maps and
//! compares them, producing a [`DiffReport`](apidrift_types::DiffReport) of
//! added, removed, and type-changed fields.
//!
//! # Key Operations
//!
//! - [`fingerprint`] — Record the structural type at every reachable path
//! - [`diff_schemas`] — Compare the fingerprints of two documents

pub mod diff;
pub mod fingerprint;

pub use diff::diff_schemas;
pub use fingerprint::{fingerprint, FingerprintMap};
