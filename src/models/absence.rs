//! Absences from work.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::temporal::{Temporal, TemporalRange};

use super::ids::PersonId;

/// Why the person is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    /// Planned leave.
    #[default]
    Vacation,
    /// Illness.
    Sickday,
    /// Anything else.
    Other,
}

impl AbsenceType {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AbsenceType::Vacation => "Vacation",
            AbsenceType::Sickday => "Sick days",
            AbsenceType::Other => "Other",
        }
    }
}

/// Approval state of an absence.
///
/// A plain field: no transitions between states are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceState {
    /// Awaiting a decision.
    #[default]
    Requested,
    /// Granted.
    Approved,
    /// Refused.
    Denied,
}

/// A period a person is away from work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    /// The absent person.
    pub person: PersonId,
    /// When the absence applies.
    #[serde(flatten)]
    pub range: TemporalRange,
    /// Reason.
    #[serde(default, rename = "type")]
    pub kind: AbsenceType,
    /// Approval state.
    #[serde(default)]
    pub state: AbsenceState,
    /// Short title.
    #[serde(default)]
    pub title: String,
}

impl Absence {
    /// Creates a requested vacation for `person` with no bounds.
    pub fn new(person: PersonId) -> Self {
        Self {
            person,
            range: TemporalRange::unbounded(),
            kind: AbsenceType::default(),
            state: AbsenceState::default(),
            title: String::new(),
        }
    }
}

impl Temporal for Absence {
    fn range(&self) -> &TemporalRange {
        &self.range
    }
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;
    use chrono::{Datelike, NaiveDateTime, Weekday};

    #[test]
    fn test_display_uses_type_label() {
        let mut absence = Absence::new(PersonId::from_raw(1));
        absence.title = "Flu".to_string();
        absence.kind = AbsenceType::Sickday;
        assert_eq!(absence.to_string(), "Flu (Sick days)");
    }

    #[test]
    fn test_defaults() {
        let absence = Absence::new(PersonId::from_raw(1));
        assert_eq!(absence.kind, AbsenceType::Vacation);
        assert_eq!(absence.state, AbsenceState::Requested);
    }

    #[test]
    fn test_vacation_working_days() {
        let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        let mut absence = Absence::new(PersonId::from_raw(1));
        // Friday through the following Tuesday morning
        absence.range = TemporalRange::new(
            Some(dt("2026-01-16 00:00:00")),
            Some(dt("2026-01-20 08:00:00")),
        );

        let working = absence.days_range_filtered(None, None, |d| {
            !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
        });
        assert_eq!(working.len(), 3);
        assert_eq!(absence.days(), 5);
    }

    #[test]
    fn test_state_serialization() {
        assert_eq!(
            serde_json::to_string(&AbsenceState::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&AbsenceType::Sickday).unwrap(),
            "\"sickday\""
        );
    }
}
