//! Selecting and summing the history entries that make up a period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{PerformanceSnapshot, Period};

/// Inclusive calendar range for [`Period::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Parse a snapshot label: `YYYY-MM-DD`, or `YYYY-MM` as the first of the month.
pub fn parse_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d"))
        .ok()
}

/// The history entries that belong to `period`.
///
/// History is treated as consecutive buckets, oldest first: daily takes the
/// latest bucket, weekly the latest two, monthly and yearly everything.
/// Custom keeps entries whose label falls inside `range`; with no range it
/// keeps everything.
pub fn window<'a>(
    history: &'a [PerformanceSnapshot],
    period: Period,
    range: Option<&DateRange>,
) -> Vec<&'a PerformanceSnapshot> {
    match period {
        Period::Daily => latest(history, 1),
        Period::Weekly => latest(history, 2),
        Period::Monthly | Period::Yearly => history.iter().collect(),
        Period::Custom => match range {
            Some(range) => history
                .iter()
                .filter(|s| match parse_label(&s.date) {
                    Some(date) => range.contains(date),
                    None => {
                        debug!(label = %s.date, "skipping snapshot with unparseable date");
                        false
                    }
                })
                .collect(),
            None => history.iter().collect(),
        },
    }
}

fn latest(history: &[PerformanceSnapshot], n: usize) -> Vec<&PerformanceSnapshot> {
    history[history.len().saturating_sub(n)..].iter().collect()
}

/// Aggregate the window for `period` into one snapshot.
pub fn period_totals(
    history: &[PerformanceSnapshot],
    period: Period,
    range: Option<&DateRange>,
) -> PerformanceSnapshot {
    PerformanceSnapshot::aggregate(window(history, period, range))
}
