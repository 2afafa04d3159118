//! Projects and their price estimate.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::temporal::{Temporal, TemporalRange};

use super::ids::ClientId;

/// A piece of work, optionally for a client.
///
/// Names are unique per client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// The client the project is for.
    #[serde(default)]
    pub client: Option<ClientId>,
    /// Name, unique within the client.
    pub name: String,
    /// When the project runs.
    #[serde(flatten)]
    pub range: TemporalRange,
    /// Whether time spent is billed.
    #[serde(default)]
    pub is_billable: bool,
    /// Agreed total price.
    #[serde(default)]
    pub fixed_price: Option<Decimal>,
    /// Agreed price per hour.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Expected effort.
    #[serde(default)]
    pub estimated_hours: Option<i32>,
}

impl Project {
    /// Creates a non-billable project without client, bounds or pricing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            client: None,
            name: name.into(),
            range: TemporalRange::unbounded(),
            is_billable: false,
            fixed_price: None,
            hourly_rate: None,
            estimated_hours: None,
        }
    }

    /// Sets the client.
    pub fn for_client(mut self, client: ClientId) -> Self {
        self.client = Some(client);
        self
    }

    /// Expected price of the project.
    ///
    /// The fixed price when set, otherwise hourly rate times estimated
    /// hours when both are set, otherwise zero. An hourly product beyond
    /// the decimal range saturates at [`Decimal::MAX`] (or `MIN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use office_records::models::Project;
    /// use rust_decimal::Decimal;
    ///
    /// let mut project = Project::new("website");
    /// assert_eq!(project.estimated_price(), Decimal::ZERO);
    ///
    /// project.hourly_rate = Some(Decimal::new(4242, 2)); // 42.42
    /// project.estimated_hours = Some(100);
    /// assert_eq!(project.estimated_price(), Decimal::new(4242, 0));
    ///
    /// project.fixed_price = Some(Decimal::new(133701, 2)); // 1337.01
    /// assert_eq!(project.estimated_price(), Decimal::new(133701, 2));
    /// ```
    pub fn estimated_price(&self) -> Decimal {
        match (self.fixed_price, self.hourly_rate, self.estimated_hours) {
            (Some(fixed), _, _) => fixed,
            (None, Some(rate), Some(hours)) => rate.saturating_mul(Decimal::from(hours)),
            _ => Decimal::ZERO,
        }
    }
}

impl Temporal for Project {
    fn range(&self) -> &TemporalRange {
        &self.range
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
