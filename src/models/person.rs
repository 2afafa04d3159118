//! User accounts and the person profile linked to each of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name, unique across accounts.
    pub username: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Contact address.
    #[serde(default)]
    pub email: String,
    /// Whether the account may be used.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl User {
    /// Creates an active account with the given username and no names.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            is_active: true,
        }
    }

    /// Sets first and last name.
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// The display name: first and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The personnel profile of a user account.
///
/// Exactly one exists per account, created together with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The owning account.
    pub user: UserId,
}

/// A person joined with its account.
///
/// Everything a person shows to the outside (display name, activity) comes
/// from the account.
#[derive(Debug, Clone, Copy)]
pub struct Profile<'a> {
    /// The person record.
    pub person: &'a Person,
    /// The owning account.
    pub user: &'a User,
}

impl Profile<'_> {
    /// Mirrors the account's active flag.
    pub fn is_active(&self) -> bool {
        self.user.is_active
    }
}

impl fmt::Display for Profile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.user.first_name, self.user.last_name)
    }
}
