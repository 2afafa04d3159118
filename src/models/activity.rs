//! Kinds of work time is booked against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A kind of work. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique name.
    pub name: String,
    /// Whether time on this activity is billed.
    #[serde(default)]
    pub is_billable: bool,
    /// Whether the activity can still be booked.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Activity {
    /// Creates an active, non-billable activity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_billable: false,
            is_active: true,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
