//! Per-kind table access, write checks and cascade rules.

use crate::error::{StoreError, StoreResult};
use crate::models::{
    Absence, Activity, Allocation, Client, Contract, Person, Project, RecordId, TimeEntry,
};

use super::table::Table;
use super::{RecordStore, not_found};

/// A record kind the store keeps in its own table.
pub trait Entity: Sized + 'static {
    /// The id type of this kind.
    type Id: RecordId;

    /// The table holding this kind.
    fn table(store: &RecordStore) -> &Table<Self::Id, Self>;

    /// The table holding this kind, mutably.
    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self>;

    /// Validates a write of `self`.
    ///
    /// `existing` is the id of the row being replaced, excluded from
    /// uniqueness checks. Fails on dangling references, overlong strings and
    /// duplicate unique values.
    fn check(&self, store: &RecordStore, existing: Option<Self::Id>) -> StoreResult<()>;

    /// Removes the row `id` and every record depending on it, returning how
    /// many records were removed.
    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize;
}

fn require<I: RecordId>(exists: bool, id: I) -> StoreResult<()> {
    if exists { Ok(()) } else { Err(not_found(id)) }
}

fn check_length(
    store: &RecordStore,
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> StoreResult<()> {
    let max = store.config.limits.max_name_length;
    if value.chars().count() > max {
        return Err(StoreError::FieldTooLong { entity, field, max });
    }
    Ok(())
}

/// Fails if any row other than `existing` satisfies `clashes`.
fn check_unique<K: RecordId, T>(
    table: &Table<K, T>,
    existing: Option<K>,
    field: &'static str,
    value: &str,
    mut clashes: impl FnMut(&T) -> bool,
) -> StoreResult<()> {
    let duplicate = table
        .iter()
        .any(|row| Some(row.id()) != existing && clashes(row.data()));
    if duplicate {
        return Err(StoreError::UniquenessViolation {
            entity: K::ENTITY,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

impl Entity for Person {
    type Id = crate::models::PersonId;

    fn table(store: &RecordStore) -> &Table<Self::Id, Self> {
        &store.persons
    }

    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self> {
        &mut store.persons
    }

    fn check(&self, store: &RecordStore, existing: Option<Self::Id>) -> StoreResult<()> {
        require(store.users.contains(self.user), self.user)?;
        check_unique(&store.persons, existing, "user", &self.user.to_string(), |p| {
            p.user == self.user
        })
    }

    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize {
        store.remove_person(id)
    }
}

impl Entity for Contract {
    type Id = crate::models::ContractId;

    fn table(store: &RecordStore) -> &Table<Self::Id, Self> {
        &store.contracts
    }

    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self> {
        &mut store.contracts
    }

    fn check(&self, store: &RecordStore, _existing: Option<Self::Id>) -> StoreResult<()> {
        require(store.persons.contains(self.person), self.person)?;
        check_length(store, Self::Id::ENTITY, "title", &self.title)
    }

    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize {
        store.remove_contract(id)
    }
}

impl Entity for Absence {
    type Id = crate::models::AbsenceId;

    fn table(store: &RecordStore) -> &Table<Self::Id, Self> {
        &store.absences
    }

    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self> {
        &mut store.absences
    }

    fn check(&self, store: &RecordStore, _existing: Option<Self::Id>) -> StoreResult<()> {
        require(store.persons.contains(self.person), self.person)?;
        check_length(store, Self::Id::ENTITY, "title", &self.title)
    }

    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize {
        store.remove_absence(id)
    }
}

impl Entity for Client {
    type Id = crate::models::ClientId;

    fn table(store: &RecordStore) -> &Table<Self::Id, Self> {
        &store.clients
    }

    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self> {
        &mut store.clients
    }

    fn check(&self, store: &RecordStore, existing: Option<Self::Id>) -> StoreResult<()> {
        check_length(store, Self::Id::ENTITY, "name", &self.name)?;
        check_unique(&store.clients, existing, "name", &self.name, |c| {
            c.name == self.name
        })
    }

    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize {
        store.remove_client(id)
    }
}

impl Entity for Project {
    type Id = crate::models::ProjectId;

    fn table(store: &RecordStore) -> &Table<Self::Id, Self> {
        &store.projects
    }

    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self> {
        &mut store.projects
    }

    fn check(&self, store: &RecordStore, existing: Option<Self::Id>) -> StoreResult<()> {
        check_length(store, Self::Id::ENTITY, "name", &self.name)?;
        // A project without client never clashes, like a NULL in a unique index.
        let Some(client) = self.client else {
            return Ok(());
        };
        require(store.clients.contains(client), client)?;
        check_unique(&store.projects, existing, "client+name", &self.name, |p| {
            p.client == Some(client) && p.name == self.name
        })
    }

    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize {
        store.remove_project(id)
    }
}

impl Entity for Allocation {
    type Id = crate::models::AllocationId;

    fn table(store: &RecordStore) -> &Table<Self::Id, Self> {
        &store.allocations
    }

    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self> {
        &mut store.allocations
    }

    fn check(&self, store: &RecordStore, _existing: Option<Self::Id>) -> StoreResult<()> {
        require(store.projects.contains(self.project), self.project)?;
        require(store.persons.contains(self.person), self.person)
    }

    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize {
        usize::from(store.allocations.remove(id).is_some())
    }
}

impl Entity for Activity {
    type Id = crate::models::ActivityId;

    fn table(store: &RecordStore) -> &Table<Self::Id, Self> {
        &store.activities
    }

    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self> {
        &mut store.activities
    }

    fn check(&self, store: &RecordStore, existing: Option<Self::Id>) -> StoreResult<()> {
        check_length(store, Self::Id::ENTITY, "name", &self.name)?;
        check_unique(&store.activities, existing, "name", &self.name, |a| {
            a.name == self.name
        })
    }

    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize {
        store.remove_activity(id)
    }
}

impl Entity for TimeEntry {
    type Id = crate::models::TimeEntryId;

    fn table(store: &RecordStore) -> &Table<Self::Id, Self> {
        &store.time_entries
    }

    fn table_mut(store: &mut RecordStore) -> &mut Table<Self::Id, Self> {
        &mut store.time_entries
    }

    fn check(&self, store: &RecordStore, _existing: Option<Self::Id>) -> StoreResult<()> {
        require(store.persons.contains(self.person), self.person)?;
        if let Some(project) = self.project {
            require(store.projects.contains(project), project)?;
        }
        if let Some(activity) = self.activity {
            require(store.activities.contains(activity), activity)?;
        }
        match &self.description {
            Some(description) => check_length(store, Self::Id::ENTITY, "description", description),
            None => Ok(()),
        }
    }

    fn remove_cascade(store: &mut RecordStore, id: Self::Id) -> usize {
        usize::from(store.time_entries.remove(id).is_some())
    }
}
