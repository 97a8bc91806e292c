//! Date-range availability evaluation.
//!
//! A car's commitments are closed calendar-date intervals. A candidate
//! rental `[pickup, return]` conflicts with a commitment iff the two
//! intervals share at least one day; boundaries are inclusive, so intervals
//! that merely touch on a single date still conflict.
//!
//! Historically commitments were stored in two shapes (flat lists of single
//! date strings and lists of `{start, end}` objects). [`UnavailableInput`]
//! accepts both at the boundary and [`normalize`] is the one conversion
//! function every write path goes through, producing an ordered list of
//! disjoint [`DateRange`]s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// A closed calendar-date interval `[start, end]`.
///
/// Both endpoints are blocked days. Invariant: `start <= end`; construct via
/// [`DateRange::new`] or [`DateRange::single`] to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::Validation(format!(
                "Invalid date range: {start} is after {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// A single-day range `[day, day]`.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Inclusive overlap test: true iff the two intervals share any day.
    ///
    /// `[a_start, a_end]` and `[b_start, b_end]` overlap iff
    /// `a_start <= b_end && b_start <= a_end`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether `day` falls inside this range (endpoints included).
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Validate a requested rental interval.
///
/// A rental must span at least one night: `return_date` strictly after
/// `pickup_date`. Zero or negative duration is invalid input, not
/// "unavailable".
pub fn rental_interval(
    pickup_date: NaiveDate,
    return_date: NaiveDate,
) -> Result<DateRange, CoreError> {
    if return_date <= pickup_date {
        return Err(CoreError::Validation(format!(
            "Return date {return_date} must be after pickup date {pickup_date}"
        )));
    }
    Ok(DateRange {
        start: pickup_date,
        end: return_date,
    })
}

// ---------------------------------------------------------------------------
// Legacy input shapes and normalization
// ---------------------------------------------------------------------------

/// One entry of a car's unavailable-dates payload, in either legacy shape:
/// a bare date string (`"2025-06-10"`) or a `{start, end}` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UnavailableInput {
    Day(NaiveDate),
    Range { start: NaiveDate, end: NaiveDate },
}

/// Normalize mixed legacy inputs into an ordered list of disjoint ranges.
///
/// Discrete dates become single-day ranges before sorting; overlapping
/// entries merge (under the same inclusive test used for availability).
/// Rejects any `{start, end}` entry with `start > end`.
pub fn normalize(inputs: &[UnavailableInput]) -> Result<Vec<DateRange>, CoreError> {
    let mut ranges = Vec::with_capacity(inputs.len());
    for input in inputs {
        let range = match input {
            UnavailableInput::Day(day) => DateRange::single(*day),
            UnavailableInput::Range { start, end } => DateRange::new(*start, *end)?,
        };
        ranges.push(range);
    }

    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<DateRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    Ok(merged)
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Whether a car with the given commitments is free for `candidate`.
///
/// Pure function: false iff any committed range overlaps the candidate.
/// A car with no commitments is available for every valid interval.
pub fn is_available(commitments: &[DateRange], candidate: &DateRange) -> bool {
    !commitments.iter().any(|c| c.overlaps(candidate))
}
