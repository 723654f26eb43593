//! Spending-limit validity windows and the overlap check.
//!
//! A spending limit is active over a closed date interval: both endpoints
//! are included. No two limits belonging to the same user may overlap, and
//! that invariant is enforced here at creation/edit time -- the budget
//! evaluator relies on it to assume at most one limit covers any date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::DbId;

/// Outcome of validating a candidate spending-limit window.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LimitError {
    /// The candidate's end date precedes its start date. Checked before
    /// anything else; nothing is persisted.
    #[error("End date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// The candidate window overlaps one or more existing limits.
    /// Carries the conflicting limit ids so the caller can point at them.
    #[error("Date range overlaps {} existing spending limit(s)", .0.len())]
    Overlap(Vec<DbId>),
}

/// A closed date interval. `start <= end` always holds; construct via
/// [`DateRange::new`] to get the ordering check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `end < start` with [`LimitError::InvalidRange`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LimitError> {
        if end < start {
            return Err(LimitError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Closed-interval overlap: `[a,b]` and `[c,d]` overlap iff
    /// `a <= d && c <= b`. Touching endpoints count as overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether `date` falls inside the range, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Ids of every existing limit whose window overlaps the candidate.
///
/// `existing` is the acting user's other limits -- the caller excludes the
/// limit being edited so it never collides with itself.
pub fn find_conflicts(candidate: &DateRange, existing: &[(DbId, DateRange)]) -> Vec<DbId> {
    existing
        .iter()
        .filter(|(_, range)| candidate.overlaps(range))
        .map(|(id, _)| *id)
        .collect()
}

/// Full validation pass for a candidate window: range ordering first, then
/// overlap against the user's existing limits.
pub fn check_overlap(
    start: NaiveDate,
    end: NaiveDate,
    existing: &[(DbId, DateRange)],
) -> Result<DateRange, LimitError> {
    let candidate = DateRange::new(start, end)?;
    let conflicts = find_conflicts(&candidate, existing);
    if conflicts.is_empty() {
        Ok(candidate)
    } else {
        Err(LimitError::Overlap(conflicts))
    }
}
