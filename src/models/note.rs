//! Notes with optional file attachments.
//!
//! A [`Note`] is owned by exactly one parent record. The parent kind is the
//! type parameter: a `Note<PersonId>` can only ever hang off a person.
//! Notes are created through the record store, which binds the parent and
//! stamps the creation time; neither changes afterwards.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ids::{AbsenceId, ClientId, ContractId, PersonId, UserId};

/// Opaque reference to a stored file.
///
/// Only the key is kept; where and how the bytes live is not this crate's
/// concern.
///
/// # Example
///
/// ```
/// use office_records::models::Attachment;
///
/// let attachment = Attachment::new("attachments", "signed.pdf");
/// assert!(attachment.key().starts_with("attachments/"));
/// assert_eq!(attachment.file_name(), "signed.pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attachment(String);

impl Attachment {
    /// Builds a fresh key `"{upload_to}/{uuid}/{file_name}"`.
    pub fn new(upload_to: &str, file_name: &str) -> Self {
        let prefix = upload_to.trim_end_matches('/');
        Self(format!("{}/{}/{}", prefix, Uuid::new_v4(), file_name))
    }

    /// Wraps an existing storage key.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.0
    }

    /// The last path segment of the key.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

/// A timestamped text annotation owned by a parent record of kind `P`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note<P> {
    parent: P,
    author: UserId,
    created: NaiveDateTime,
    text: String,
    attachment: Option<Attachment>,
}

impl<P: Copy> Note<P> {
    pub(crate) fn new(
        parent: P,
        author: UserId,
        created: NaiveDateTime,
        text: String,
        attachment: Option<Attachment>,
    ) -> Self {
        Self {
            parent,
            author,
            created,
            text,
            attachment,
        }
    }

    /// The owning record.
    pub fn parent(&self) -> P {
        self.parent
    }

    /// The account that wrote the note.
    pub fn author(&self) -> UserId {
        self.author
    }

    /// When the note was created.
    pub fn created(&self) -> NaiveDateTime {
        self.created
    }

    /// The note text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The attached file, if any.
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }
}

impl<P> fmt::Display for Note<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A note on a person.
pub type PersonNote = Note<PersonId>;
/// A note on a contract.
pub type ContractNote = Note<ContractId>;
/// A note on an absence.
pub type AbsenceNote = Note<AbsenceId>;
/// A note on a client.
pub type ClientNote = Note<ClientId>;
