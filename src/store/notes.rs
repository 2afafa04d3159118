//! Notes hanging off persons, contracts, absences and clients.

use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::models::{
    AbsenceId, Attachment, ClientId, ContractId, Note, NoteId, PersonId, RecordId, UserId,
};

use super::table::{Record, Table};
use super::{RecordStore, not_found};

/// A record kind that can own notes.
pub trait NoteParent: RecordId + 'static {
    /// The note table for this parent kind.
    fn notes(store: &RecordStore) -> &Table<NoteId, Note<Self>>;

    /// The note table for this parent kind, mutably.
    fn notes_mut(store: &mut RecordStore) -> &mut Table<NoteId, Note<Self>>;

    /// Returns true if the parent row exists.
    fn exists(store: &RecordStore, id: Self) -> bool;
}

impl NoteParent for PersonId {
    fn notes(store: &RecordStore) -> &Table<NoteId, Note<Self>> {
        &store.person_notes
    }

    fn notes_mut(store: &mut RecordStore) -> &mut Table<NoteId, Note<Self>> {
        &mut store.person_notes
    }

    fn exists(store: &RecordStore, id: Self) -> bool {
        store.persons.contains(id)
    }
}

impl NoteParent for ContractId {
    fn notes(store: &RecordStore) -> &Table<NoteId, Note<Self>> {
        &store.contract_notes
    }

    fn notes_mut(store: &mut RecordStore) -> &mut Table<NoteId, Note<Self>> {
        &mut store.contract_notes
    }

    fn exists(store: &RecordStore, id: Self) -> bool {
        store.contracts.contains(id)
    }
}

impl NoteParent for AbsenceId {
    fn notes(store: &RecordStore) -> &Table<NoteId, Note<Self>> {
        &store.absence_notes
    }

    fn notes_mut(store: &mut RecordStore) -> &mut Table<NoteId, Note<Self>> {
        &mut store.absence_notes
    }

    fn exists(store: &RecordStore, id: Self) -> bool {
        store.absences.contains(id)
    }
}

impl NoteParent for ClientId {
    fn notes(store: &RecordStore) -> &Table<NoteId, Note<Self>> {
        &store.client_notes
    }

    fn notes_mut(store: &mut RecordStore) -> &mut Table<NoteId, Note<Self>> {
        &mut store.client_notes
    }

    fn exists(store: &RecordStore, id: Self) -> bool {
        store.clients.contains(id)
    }
}

impl RecordStore {
    /// Adds a note to `parent`, written by `author`.
    ///
    /// The creation time comes from the store clock and never changes.
    pub fn create_note<P: NoteParent>(
        &mut self,
        parent: P,
        author: UserId,
        text: impl Into<String>,
        attachment: Option<Attachment>,
    ) -> StoreResult<NoteId> {
        if !P::exists(self, parent) {
            warn!(parent = %parent, kind = P::ENTITY, "Note parent not found");
            return Err(not_found(parent));
        }
        if !self.users.contains(author) {
            warn!(author = author.raw(), "Note author not found");
            return Err(not_found(author));
        }

        let note = Note::new(parent, author, self.now(), text.into(), attachment);
        let id = P::notes_mut(self).insert(note);
        debug!(kind = P::ENTITY, parent = parent.raw(), note = id.raw(), "Created note");
        Ok(id)
    }

    /// Notes of `parent`, oldest first.
    pub fn notes_of<P: NoteParent>(
        &self,
        parent: P,
    ) -> impl Iterator<Item = &Record<NoteId, Note<P>>> {
        P::notes(self).iter().filter(move |n| n.parent() == parent)
    }

    /// Looks up a note of parent kind `P`.
    pub fn note<P: NoteParent>(&self, id: NoteId) -> StoreResult<&Record<NoteId, Note<P>>> {
        P::notes(self).get(id).ok_or_else(|| not_found(id))
    }

    /// Deletes a note of parent kind `P`.
    pub fn delete_note<P: NoteParent>(&mut self, id: NoteId) -> StoreResult<()> {
        P::notes_mut(self)
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// A fresh attachment key under the configured upload prefix.
    pub fn new_attachment(&self, file_name: &str) -> Attachment {
        Attachment::new(&self.config.attachments.upload_to, file_name)
    }
}
