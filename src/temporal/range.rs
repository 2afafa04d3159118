//! Temporal range and the shared `Temporal` behaviour.
//!
//! A [`TemporalRange`] is a pair of optional start/end instants. A missing
//! bound is unbounded in that direction. No ordering between the bounds is
//! enforced; an end before the start is representable and simply yields no
//! active instants and no days.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Returns the current local wall-clock time.
///
/// Every "now"-relative check in this module uses this instant.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Optional start/end bounds of a record's validity window.
///
/// # Example
///
/// ```
/// use office_records::temporal::TemporalRange;
/// use chrono::NaiveDateTime;
///
/// let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let range = TemporalRange::new(Some(dt("2026-01-12 09:00:00")), Some(dt("2026-01-14 09:00:00")));
///
/// assert!(range.is_active_at(dt("2026-01-12 09:00:00")));
/// assert!(range.is_active_at(dt("2026-01-14 09:00:00")));
/// assert!(!range.is_active_at(dt("2026-01-14 09:00:01")));
/// assert_eq!(range.days(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalRange {
    /// Start of the window, inclusive. `None` is unbounded.
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    /// End of the window, inclusive. `None` is unbounded.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
}

impl TemporalRange {
    /// Creates a range from optional bounds.
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// A range unbounded on both sides.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns true if `when` lies inside the range, both bounds inclusive.
    pub fn is_active_at(&self, when: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| start <= when) && self.end.is_none_or(|end| end >= when)
    }

    /// Returns true if the current time lies inside the range.
    pub fn is_active(&self) -> bool {
        self.is_active_at(now())
    }

    /// Returns true if the range has a start strictly after `when`.
    ///
    /// The end bound is ignored.
    pub fn is_future_at(&self, when: NaiveDateTime) -> bool {
        self.start.is_some_and(|start| start > when)
    }

    /// Returns true if the range starts strictly after the current time.
    pub fn is_future(&self) -> bool {
        self.is_future_at(now())
    }

    /// Returns true if the range has an end strictly before `when`.
    ///
    /// Strict on purpose: a range ending exactly at `when` is still active
    /// at `when` and therefore not yet archived. The start bound is ignored.
    pub fn is_archived_at(&self, when: NaiveDateTime) -> bool {
        self.end.is_some_and(|end| end < when)
    }

    /// Returns true if the range ended strictly before the current time.
    pub fn is_archived(&self) -> bool {
        self.is_archived_at(now())
    }

    /// Returns the days common to `[frm, to]` and this range.
    ///
    /// See [`TemporalRange::days_range_filtered`] for the bound rules.
    pub fn days_range(
        &self,
        frm: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
    ) -> Vec<NaiveDate> {
        self.days_range_filtered(frm, to, |_| true)
    }

    /// Returns the days common to `[frm, to]` and this range, keeping only
    /// the dates accepted by `filter`.
    ///
    /// The lower bound is the later of `frm` and `start`, the upper bound the
    /// earlier of `to` and `end`. If a side has neither a window bound nor a
    /// record bound, no days are returned at all. Days are produced by
    /// stepping 24 hours at a time from the lower bound (inclusive) while the
    /// cursor stays strictly below the upper bound, so the result is ascending
    /// with one entry per step.
    ///
    /// # Example
    ///
    /// ```
    /// use office_records::temporal::TemporalRange;
    /// use chrono::{Datelike, NaiveDateTime, Weekday};
    ///
    /// let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// // Monday through the following Monday
    /// let range = TemporalRange::new(Some(dt("2026-01-12 08:00:00")), Some(dt("2026-01-19 08:00:00")));
    ///
    /// let weekend = range.days_range_filtered(None, None, |d| {
    ///     matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    /// });
    /// assert_eq!(weekend.len(), 2);
    ///
    /// // Only a start: nothing without a caller-supplied upper bound
    /// let open = TemporalRange::new(Some(dt("2026-01-12 08:00:00")), None);
    /// assert!(open.days_range(None, None).is_empty());
    /// ```
    pub fn days_range_filtered<F>(
        &self,
        frm: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
        mut filter: F,
    ) -> Vec<NaiveDate>
    where
        F: FnMut(NaiveDate) -> bool,
    {
        let lower = match (frm, self.start) {
            (Some(frm), Some(start)) => frm.max(start),
            (Some(frm), None) => frm,
            (None, Some(start)) => start,
            // startless and unbounded
            (None, None) => return Vec::new(),
        };

        let upper = match (to, self.end) {
            (Some(to), Some(end)) => to.min(end),
            (Some(to), None) => to,
            (None, Some(end)) => end,
            // endless and unbounded
            (None, None) => return Vec::new(),
        };

        let mut days = Vec::new();
        let mut cursor = lower;
        while cursor < upper {
            let day = cursor.date();
            if filter(day) {
                days.push(day);
            }
            match cursor.checked_add_signed(Duration::days(1)) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        days
    }

    /// Number of days spanned by the range's own bounds.
    ///
    /// Zero when either bound is unset.
    pub fn days(&self) -> usize {
        self.days_range(None, None).len()
    }
}

/// Shared behaviour of every record that embeds a [`TemporalRange`].
///
/// Implementors only provide [`Temporal::range`]; everything else is
/// derived from it.
///
/// The methods without a reference instant read local wall-clock time
/// through [`now`], not a store's configured clock. Pass
/// `RecordStore::now()` to the `*_at` forms to classify a stored record the
/// way the store filters do.
pub trait Temporal {
    /// The record's validity window.
    fn range(&self) -> &TemporalRange;

    /// Start of the validity window.
    fn start(&self) -> Option<NaiveDateTime> {
        self.range().start
    }

    /// End of the validity window.
    fn end(&self) -> Option<NaiveDateTime> {
        self.range().end
    }

    /// See [`TemporalRange::is_active_at`].
    fn is_active_at(&self, when: NaiveDateTime) -> bool {
        self.range().is_active_at(when)
    }

    /// See [`TemporalRange::is_active`].
    fn is_active(&self) -> bool {
        self.range().is_active()
    }

    /// See [`TemporalRange::is_future_at`].
    fn is_future_at(&self, when: NaiveDateTime) -> bool {
        self.range().is_future_at(when)
    }

    /// See [`TemporalRange::is_future`].
    fn is_future(&self) -> bool {
        self.range().is_future()
    }

    /// See [`TemporalRange::is_archived_at`].
    fn is_archived_at(&self, when: NaiveDateTime) -> bool {
        self.range().is_archived_at(when)
    }

    /// See [`TemporalRange::is_archived`].
    fn is_archived(&self) -> bool {
        self.range().is_archived()
    }

    /// See [`TemporalRange::days_range`].
    fn days_range(&self, frm: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Vec<NaiveDate> {
        self.range().days_range(frm, to)
    }

    /// See [`TemporalRange::days_range_filtered`].
    fn days_range_filtered<F>(
        &self,
        frm: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
        filter: F,
    ) -> Vec<NaiveDate>
    where
        F: FnMut(NaiveDate) -> bool,
        Self: Sized,
    {
        self.range().days_range_filtered(frm, to, filter)
    }

    /// See [`TemporalRange::days`].
    fn days(&self) -> usize {
        self.range().days()
    }
}

impl Temporal for TemporalRange {
    fn range(&self) -> &TemporalRange {
        self
    }
}

impl<T: Temporal + ?Sized> Temporal for &T {
    fn range(&self) -> &TemporalRange {
        (**self).range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    struct Fixture {
        now: NaiveDateTime,
        yesterday: NaiveDateTime,
        tomorrow: NaiveDateTime,
    }

    fn fixture() -> Fixture {
        let now = NaiveDateTime::parse_from_str("2026-01-15 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        Fixture {
            now,
            yesterday: now - Duration::days(1),
            tomorrow: now + Duration::days(1),
        }
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_is_active_at_inclusive_bounds() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.yesterday), Some(f.tomorrow));

        assert!(range.is_active_at(f.now));
        assert!(range.is_active_at(f.yesterday));
        assert!(range.is_active_at(f.tomorrow));
        assert!(!range.is_active_at(f.yesterday - Duration::seconds(1)));
        assert!(!range.is_active_at(f.tomorrow + Duration::seconds(1)));
    }

    #[test]
    fn test_is_active_uses_current_time() {
        let current = now();
        let range = TemporalRange::new(
            Some(current - Duration::days(1)),
            Some(current + Duration::days(1)),
        );
        assert!(range.is_active());
        assert!(!range.is_future());
        assert!(!range.is_archived());
    }

    #[test]
    fn test_is_future() {
        let current = now();
        let tomorrow = current + Duration::days(1);
        let range = TemporalRange::new(Some(tomorrow), Some(tomorrow));
        assert!(range.is_future());
        assert!(!range.is_active());
    }

    #[test]
    fn test_is_future_ignores_end() {
        let f = fixture();
        // end before start is representable
        let range = TemporalRange::new(Some(f.tomorrow), Some(f.yesterday));
        assert!(range.is_future_at(f.now));
        assert!(range.is_archived_at(f.now));
        assert!(!range.is_active_at(f.now));
    }

    #[test]
    fn test_is_archived() {
        let current = now();
        let yesterday = current - Duration::days(1);
        let range = TemporalRange::new(Some(yesterday), Some(yesterday));
        assert!(range.is_archived());
        assert!(!range.is_active());
    }

    #[test]
    fn test_ending_exactly_now_is_active_not_archived() {
        let f = fixture();
        let range = TemporalRange::new(None, Some(f.now));
        assert!(range.is_active_at(f.now));
        assert!(!range.is_archived_at(f.now));
        assert!(range.is_archived_at(f.now + Duration::seconds(1)));
    }

    #[test]
    fn test_unset_bounds_are_neither_future_nor_archived() {
        let f = fixture();
        let range = TemporalRange::unbounded();
        assert!(!range.is_future_at(f.now));
        assert!(!range.is_archived_at(f.now));
        assert!(range.is_active_at(f.now));
    }

    #[test]
    fn test_endless_active() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.now), None);
        assert!(range.is_active_at(make_datetime("3001-01-01 00:00:00")));
    }

    #[test]
    fn test_startless_active() {
        let f = fixture();
        let range = TemporalRange::new(None, Some(f.now));
        assert!(range.is_active_at(make_datetime("1970-01-01 00:00:00")));
    }

    #[test]
    fn test_days_range() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.yesterday), Some(f.tomorrow));
        assert_eq!(
            range.days_range(None, None),
            vec![f.yesterday.date(), f.now.date()]
        );
    }

    #[test]
    fn test_days() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.yesterday), Some(f.tomorrow));
        assert_eq!(range.days(), 2);
    }

    #[test]
    fn test_days_range_windowed() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.yesterday), Some(f.tomorrow));

        assert_eq!(range.days_range(Some(f.now), None), vec![f.now.date()]);
        assert_eq!(range.days_range(None, Some(f.now)), vec![f.yesterday.date()]);
        assert!(range.days_range(Some(f.now), Some(f.now)).is_empty());
        assert!(range.days_range(Some(f.tomorrow), Some(f.yesterday)).is_empty());
    }

    #[test]
    fn test_endless_days_range_sanity() {
        let f = fixture();
        let always = TemporalRange::unbounded();
        let endless = TemporalRange::new(Some(f.yesterday), None);

        assert_eq!(always.days(), 0);
        assert!(always.days_range(None, None).is_empty());
        assert!(endless.days_range(None, None).is_empty());
    }

    #[test]
    fn test_unbounded_days_range_windowed() {
        let f = fixture();
        let startless = TemporalRange::new(None, Some(f.now));
        let endless = TemporalRange::new(Some(f.now), None);
        let always = TemporalRange::unbounded();

        assert_eq!(
            startless.days_range(Some(f.yesterday), None),
            vec![f.yesterday.date()]
        );
        assert!(startless.days_range(None, None).is_empty());
        assert_eq!(
            endless.days_range(None, Some(f.tomorrow)),
            vec![f.now.date()]
        );
        assert_eq!(
            always.days_range(Some(f.yesterday), Some(f.tomorrow)),
            vec![f.yesterday.date(), f.now.date()]
        );
    }

    #[test]
    fn test_days_range_end_before_start_is_empty() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.tomorrow), Some(f.yesterday));
        assert!(range.days_range(None, None).is_empty());
        assert_eq!(range.days(), 0);
    }

    #[test]
    fn test_days_range_steps_from_lower_bound_time_of_day() {
        // 23:00 start: each step keeps the time of day, so a 25 hour range
        // yields two dates.
        let range = TemporalRange::new(
            Some(make_datetime("2026-01-12 23:00:00")),
            Some(make_datetime("2026-01-14 00:00:00")),
        );
        let days = range.days_range(None, None);
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
            ]
        );
    }

    #[test]
    fn test_days_range_filtered_weekdays_only() {
        // 2026-01-12 is a Monday
        let range = TemporalRange::new(
            Some(make_datetime("2026-01-12 00:00:00")),
            Some(make_datetime("2026-01-26 00:00:00")),
        );
        let weekdays = range.days_range_filtered(None, None, |d| {
            !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
        });
        assert_eq!(weekdays.len(), 10);
        assert!(weekdays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_days_range_filter_rejecting_all() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.yesterday), Some(f.tomorrow));
        assert!(range.days_range_filtered(None, None, |_| false).is_empty());
    }

    #[test]
    fn test_trait_delegates_through_reference() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.yesterday), Some(f.tomorrow));
        let by_ref: &TemporalRange = &range;

        assert_eq!(Temporal::start(&by_ref), Some(f.yesterday));
        assert_eq!(Temporal::end(&by_ref), Some(f.tomorrow));
        assert!(Temporal::is_active_at(&by_ref, f.now));
        assert_eq!(Temporal::days(&by_ref), 2);
    }

    #[test]
    fn test_trait_reference_instant_forms() {
        let f = fixture();
        let range = TemporalRange::new(Some(f.now), Some(f.tomorrow));
        let by_ref: &TemporalRange = &range;

        assert!(Temporal::is_future_at(&by_ref, f.yesterday));
        assert!(!Temporal::is_future_at(&by_ref, f.now));
        assert!(Temporal::is_archived_at(&by_ref, f.tomorrow + Duration::seconds(1)));
        assert!(!Temporal::is_archived_at(&by_ref, f.tomorrow));
    }

    #[test]
    fn test_serialize_range() {
        let range = TemporalRange::new(Some(make_datetime("2026-01-15 09:00:00")), None);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":"2026-01-15T09:00:00","end":null}"#);

        let parsed: TemporalRange = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TemporalRange::unbounded());
    }
}
