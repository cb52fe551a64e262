//! Migration-risk scoring for apidrift.
//!
//! Maps a schema diff report to a bounded score in `[0, 100]` and the three
//! display bands derived from it. Scoring is a pure function of the report:
//! removals and type changes carry the weight, additions are nearly free,
//! and the sum saturates at the ceiling.

use std::fmt;

use serde::{Deserialize, Serialize};

use apidrift_types::{Change, DiffReport};

/// Weight of a removed field.
const REMOVED_WEIGHT: u32 = 15;

/// Weight of a type change. Heavier than a removal: a missing field fails
/// loudly, a changed type can corrupt silently.
const TYPE_CHANGED_WEIGHT: u32 = 20;

/// Weight of an added field. Additions are backward-compatible.
const ADDED_WEIGHT: u32 = 2;

/// Ceiling of the score range.
const MAX_SCORE: u32 = 100;

/// Score a diff report on the `[0, 100]` migration-risk scale.
///
/// An empty report scores 0. The score is non-decreasing in every change
/// kind and saturates at 100.
pub fn score_report(report: &DiffReport) -> u8 {
    let total = report
        .changes
        .iter()
        .map(|change| match change {
            Change::Removed { .. } => REMOVED_WEIGHT,
            Change::TypeChanged { .. } => TYPE_CHANGED_WEIGHT,
            Change::Added { .. } => ADDED_WEIGHT,
        })
        .fold(0u32, u32::saturating_add);

    total.min(MAX_SCORE) as u8
}

/// Display band for a risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Scores in `[0, 31)`.
    Low,
    /// Scores in `[31, 71)`.
    Medium,
    /// Scores in `[71, 100]`.
    High,
}

impl RiskBand {
    /// Lowest score that lands in `Medium`.
    pub const MEDIUM_THRESHOLD: u8 = 31;

    /// Lowest score that lands in `High`.
    pub const HIGH_THRESHOLD: u8 = 71;

    /// The band a score falls into.
    pub fn from_score(score: u8) -> Self {
        if score < Self::MEDIUM_THRESHOLD {
            Self::Low
        } else if score < Self::HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidrift_types::TypeTag;

    fn removed(path: &str) -> Change {
        Change::Removed { path: path.into(), old: TypeTag::String }
    }

    fn added(path: &str) -> Change {
        Change::Added { path: path.into(), new: TypeTag::String }
    }

    fn retyped(path: &str) -> Change {
        Change::TypeChanged { path: path.into(), old: TypeTag::Number, new: TypeTag::String }
    }

    #[test]
    fn empty_report_scores_zero() {
        assert_eq!(score_report(&DiffReport::default()), 0);
    }

    #[test]
    fn risky_changes_outweigh_additions() {
        let one_removed = DiffReport::from_changes(vec![removed("a")]);
        let one_added = DiffReport::from_changes(vec![added("a")]);
        assert!(score_report(&one_removed) > score_report(&one_added));
    }

    #[test]
    fn score_is_monotonic_in_risky_changes() {
        let mut changes = vec![added("base")];
        let mut previous = score_report(&DiffReport::from_changes(changes.clone()));

        for i in 0..12 {
            changes.push(removed(&format!("r{i}")));
            let next = score_report(&DiffReport::from_changes(changes.clone()));
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn score_saturates_at_one_hundred() {
        let changes: Vec<Change> = (0..50).map(|i| retyped(&format!("p{i}"))).collect();
        assert_eq!(score_report(&DiffReport::from_changes(changes)), 100);
    }

    #[test]
    fn a_handful_of_removals_reaches_medium() {
        let changes: Vec<Change> = (0..3).map(|i| removed(&format!("p{i}"))).collect();
        let score = score_report(&DiffReport::from_changes(changes));
        assert_eq!(RiskBand::from_score(score), RiskBand::Medium);
    }

    #[test]
    fn a_handful_of_type_changes_reaches_high() {
        let changes: Vec<Change> = (0..4).map(|i| retyped(&format!("p{i}"))).collect();
        let score = score_report(&DiffReport::from_changes(changes));
        assert_eq!(RiskBand::from_score(score), RiskBand::High);
    }

    #[test]
    fn additions_alone_stay_low_for_small_diffs() {
        let changes: Vec<Change> = (0..5).map(|i| added(&format!("p{i}"))).collect();
        let score = score_report(&DiffReport::from_changes(changes));
        assert_eq!(RiskBand::from_score(score), RiskBand::Low);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(30), RiskBand::Low);
        assert_eq!(RiskBand::from_score(31), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(70), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(71), RiskBand::High);
        assert_eq!(RiskBand::from_score(100), RiskBand::High);
    }

    #[test]
    fn band_display_names() {
        assert_eq!(RiskBand::Low.to_string(), "Low");
        assert_eq!(RiskBand::Medium.to_string(), "Medium");
        assert_eq!(RiskBand::High.to_string(), "High");
    }
}
