//! Foundation types for apidrift.
//!
//! This crate provides the value types shared by the schema differ, the risk
//! scorer, and the CLI. Every other apidrift crate depends on it.
//!
//! # Key Types
//!
//! - [`TypeTag`] — Structural type of a JSON value at a path
//! - [`Change`] — A single schema change (added / removed / type-changed)
//! - [`DiffSummary`] / [`DiffReport`] — Aggregated result of a comparison

pub mod change;
pub mod report;
pub mod tag;

pub use change::Change;
pub use report::{DiffReport, DiffSummary};
pub use tag::TypeTag;
