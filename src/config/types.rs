//! Configuration types for the record store.
//!
//! These structures are deserialized from a YAML configuration file. Every
//! section is optional and falls back to its default.

use chrono::{Local, NaiveDateTime, Utc};
use serde::Deserialize;

/// Default prefix for attachment storage keys.
pub const DEFAULT_UPLOAD_TO: &str = "attachments";

/// Default maximum length of names, titles and short descriptions.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 255;

/// Attachment settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttachmentConfig {
    /// Prefix under which attachment keys are generated.
    #[serde(default = "default_upload_to")]
    pub upload_to: String,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            upload_to: default_upload_to(),
        }
    }
}

fn default_upload_to() -> String {
    DEFAULT_UPLOAD_TO.to_string()
}

/// Field length limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Maximum length of names, titles, usernames and time entry descriptions.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}

/// Source of "now" for note stamps and store-level filters.
///
/// # Example
///
/// ```
/// use office_records::config::Clock;
/// use chrono::NaiveDateTime;
///
/// let fixed = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(Clock::Fixed(fixed).now(), fixed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clock {
    /// Local wall-clock time.
    #[default]
    Local,
    /// UTC wall-clock time.
    Utc,
    /// A frozen instant.
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Returns the current instant according to this clock.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::Local => Local::now().naive_local(),
            Clock::Utc => Utc::now().naive_utc(),
            Clock::Fixed(instant) => *instant,
        }
    }
}

/// The complete configuration of a record store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct OfficeConfig {
    /// Attachment settings.
    #[serde(default)]
    pub attachments: AttachmentConfig,
    /// Field length limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Clock used by the store.
    #[serde(default)]
    pub clock: Clock,
}

impl OfficeConfig {
    /// Returns a copy of this configuration using the given clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}
