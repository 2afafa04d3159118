//! Employment contracts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::temporal::{Temporal, TemporalRange};

use super::ids::PersonId;

/// The kind of working arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Regular employment.
    #[default]
    Employee,
    /// External contractor.
    Contractor,
    /// Student work.
    Student,
}

impl ContractType {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Employee => "Employee",
            ContractType::Contractor => "Contractor",
            ContractType::Student => "Student",
        }
    }
}

/// A contract between the company and a person, valid over a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// The contracted person.
    pub person: PersonId,
    /// Validity window.
    #[serde(flatten)]
    pub range: TemporalRange,
    /// Working arrangement.
    #[serde(default, rename = "type")]
    pub kind: ContractType,
    /// Job title.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Contracted hours per week.
    #[serde(default)]
    pub weekly_hours: Option<Decimal>,
    /// Hourly pay.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Monthly pay.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
}

impl Contract {
    /// Creates an employee contract for `person` with no bounds and no pay.
    pub fn new(person: PersonId) -> Self {
        Self {
            person,
            range: TemporalRange::unbounded(),
            kind: ContractType::default(),
            title: String::new(),
            description: String::new(),
            weekly_hours: None,
            hourly_rate: None,
            monthly_salary: None,
        }
    }
}

impl Temporal for Contract {
    fn range(&self) -> &TemporalRange {
        &self.range
    }
}
