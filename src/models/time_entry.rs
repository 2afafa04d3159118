//! Tracked working time.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::temporal::{Temporal, TemporalRange, now};

use super::ids::{ActivityId, PersonId, ProjectId};

const MICROSECONDS_PER_HOUR: i64 = 3_600_000_000;

/// A span of time a person worked, optionally on a project and activity.
///
/// An entry with a start and no end is still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Who worked.
    pub person: PersonId,
    /// What the time was spent on.
    #[serde(default)]
    pub project: Option<ProjectId>,
    /// Kind of work.
    #[serde(default)]
    pub activity: Option<ActivityId>,
    /// When the work happened.
    #[serde(flatten)]
    pub range: TemporalRange,
    /// Whether the time is billed.
    #[serde(default)]
    pub is_billable: bool,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
}

impl TimeEntry {
    /// Creates an empty, unstarted entry for `person`.
    pub fn new(person: PersonId) -> Self {
        Self {
            person,
            project: None,
            activity: None,
            range: TemporalRange::unbounded(),
            is_billable: false,
            description: None,
        }
    }

    /// Hours worked so far.
    ///
    /// Zero when not started. A running entry counts up to the local
    /// wall-clock time; `RecordStore::hours_of` uses the store clock instead. The value is exact: elapsed microseconds over one hour, with
    /// no rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// use office_records::models::{PersonId, RecordId, TimeEntry};
    /// use office_records::temporal::TemporalRange;
    /// use chrono::{Duration, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let mut entry = TimeEntry::new(PersonId::from_raw(1));
    /// assert_eq!(entry.hours(), Decimal::ZERO);
    ///
    /// entry.range = TemporalRange::new(Some(start), Some(start + Duration::seconds(12600)));
    /// assert_eq!(entry.hours(), Decimal::new(35, 1)); // 3.5
    /// ```
    pub fn hours(&self) -> Decimal {
        self.hours_at(now())
    }

    /// Hours worked, counting a running entry up to `when`.
    pub fn hours_at(&self, when: NaiveDateTime) -> Decimal {
        let Some(start) = self.range.start else {
            return Decimal::ZERO;
        };
        let end = self.range.end.unwrap_or(when);
        let elapsed = end - start;

        match elapsed.num_microseconds() {
            Some(micros) => Decimal::from(micros) / Decimal::from(MICROSECONDS_PER_HOUR),
            // beyond ~292k years microseconds overflow; seconds are still exact enough
            None => Decimal::from(elapsed.num_seconds()) / Decimal::from(3600),
        }
    }
}

impl Temporal for TimeEntry {
    fn range(&self) -> &TemporalRange {
        &self.range
    }
}

impl fmt::Display for TimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.hours())
    }
}
