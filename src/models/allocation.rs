//! Assignment of people to projects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::temporal::{Temporal, TemporalRange};

use super::ids::{PersonId, ProjectId};

/// A person assigned to a project over a time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// The project worked on.
    pub project: ProjectId,
    /// The assigned person.
    pub person: PersonId,
    /// When the assignment applies.
    #[serde(flatten)]
    pub range: TemporalRange,
    /// Hours per week planned on the project.
    // TODO: confirm with product that this is an hour count like
    // Contract::weekly_hours; older schemas stored a date-time here.
    #[serde(default)]
    pub weekly_hours: Option<Decimal>,
}

impl Allocation {
    /// Creates an unbounded allocation with no planned hours.
    pub fn new(project: ProjectId, person: PersonId) -> Self {
        Self {
            project,
            person,
            range: TemporalRange::unbounded(),
            weekly_hours: None,
        }
    }
}

impl Temporal for Allocation {
    fn range(&self) -> &TemporalRange {
        &self.range
    }
}
