//! Set-valued filters over collections of temporal records.
//!
//! The predicates are plain functions of a record and a reference instant.
//! [`TemporalQuery`] applies them to any iterator of temporal records, which
//! is how the record store exposes `filter_active`, `filter_archived` and
//! `filter_future` over its tables.

use chrono::NaiveDateTime;

use super::range::{Temporal, now};

/// `(start unset or start <= when) and (end unset or end >= when)`.
pub fn active_at<T: Temporal + ?Sized>(record: &T, when: NaiveDateTime) -> bool {
    record.range().is_active_at(when)
}

/// `end set and end < when`.
pub fn archived_at<T: Temporal + ?Sized>(record: &T, when: NaiveDateTime) -> bool {
    record.range().is_archived_at(when)
}

/// `start set and start > when`.
pub fn future_at<T: Temporal + ?Sized>(record: &T, when: NaiveDateTime) -> bool {
    record.range().is_future_at(when)
}

/// Temporal filters for iterators of records.
///
/// Each filter takes an optional reference instant and falls back to the
/// current time. The iterator's own order is preserved.
///
/// # Example
///
/// ```
/// use office_records::temporal::{TemporalQuery, TemporalRange};
/// use chrono::NaiveDateTime;
///
/// let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let ranges = vec![
///     TemporalRange::new(None, Some(dt("2026-01-10 00:00:00"))),
///     TemporalRange::new(Some(dt("2026-01-01 00:00:00")), Some(dt("2026-02-01 00:00:00"))),
///     TemporalRange::new(Some(dt("2026-03-01 00:00:00")), None),
/// ];
/// let when = Some(dt("2026-01-15 12:00:00"));
///
/// assert_eq!(ranges.iter().filter_active(when).count(), 1);
/// assert_eq!(ranges.iter().filter_archived(when).count(), 1);
/// assert_eq!(ranges.iter().filter_future(when).count(), 1);
/// ```
pub trait TemporalQuery: Iterator + Sized
where
    Self::Item: Temporal,
{
    /// Keeps records active at `when`.
    fn filter_active(self, when: Option<NaiveDateTime>) -> impl Iterator<Item = Self::Item> {
        let when = when.unwrap_or_else(now);
        self.filter(move |record| active_at(record, when))
    }

    /// Keeps records whose end is strictly before `when`.
    fn filter_archived(self, when: Option<NaiveDateTime>) -> impl Iterator<Item = Self::Item> {
        let when = when.unwrap_or_else(now);
        self.filter(move |record| archived_at(record, when))
    }

    /// Keeps records whose start is strictly after `when`.
    fn filter_future(self, when: Option<NaiveDateTime>) -> impl Iterator<Item = Self::Item> {
        let when = when.unwrap_or_else(now);
        self.filter(move |record| future_at(record, when))
    }
}

impl<I> TemporalQuery for I
where
    I: Iterator,
    I::Item: Temporal,
{
}
