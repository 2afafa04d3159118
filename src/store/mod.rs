//! In-memory record store.
//!
//! The store keeps one [`Table`] per record kind and enforces what a
//! relational backend would: references must point at existing rows, unique
//! fields stay unique, and deleting a row deletes everything that depends on
//! it. Mutation takes `&mut self`, so each operation, including creating an
//! account together with its person profile, is applied as a whole or not at
//! all.
//!
//! # Example
//!
//! ```
//! use office_records::models::{Contract, Person, User};
//! use office_records::store::RecordStore;
//! use office_records::temporal::Temporal;
//!
//! let mut store = RecordStore::default();
//! let (user, person) = store
//!     .create_account_with_profile(User::new("jdoe").with_name("Jane", "Doe"))?;
//!
//! let contract = store.insert(Contract::new(person))?;
//! assert!(store.get::<Contract>(contract)?.is_active());
//! assert_eq!(store.person_profile(person)?.to_string(), "Jane Doe");
//!
//! store.delete_account(user)?;
//! assert_eq!(store.count::<Person>(), 0);
//! assert_eq!(store.count::<Contract>(), 0);
//! # Ok::<(), office_records::error::StoreError>(())
//! ```

mod accounts;
mod cascade;
mod entity;
mod notes;
mod table;

pub use entity::Entity;
pub use notes::NoteParent;
pub use table::{Record, Table};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::OfficeConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{
    Absence, AbsenceId, AbsenceNote, Activity, ActivityId, Allocation, AllocationId, Client,
    ClientId, ClientNote, Contract, ContractId, ContractNote, NoteId, Person, PersonId,
    PersonNote, Project, ProjectId, RecordId, TimeEntry, TimeEntryId, User, UserId,
};
use crate::temporal::{Temporal, TemporalQuery};

/// Tables of every record kind plus the store configuration.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    config: OfficeConfig,
    users: Table<UserId, User>,
    persons: Table<PersonId, Person>,
    person_notes: Table<NoteId, PersonNote>,
    contracts: Table<ContractId, Contract>,
    contract_notes: Table<NoteId, ContractNote>,
    absences: Table<AbsenceId, Absence>,
    absence_notes: Table<NoteId, AbsenceNote>,
    clients: Table<ClientId, Client>,
    client_notes: Table<NoteId, ClientNote>,
    projects: Table<ProjectId, Project>,
    allocations: Table<AllocationId, Allocation>,
    activities: Table<ActivityId, Activity>,
    time_entries: Table<TimeEntryId, TimeEntry>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new(config: OfficeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The store configuration.
    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    /// The current instant according to the configured clock.
    pub fn now(&self) -> NaiveDateTime {
        self.config.clock.now()
    }

    /// Stores a new record after checking its references and constraints.
    pub fn insert<T: Entity>(&mut self, record: T) -> StoreResult<T::Id> {
        if let Err(err) = record.check(self, None) {
            warn!(entity = T::Id::ENTITY, error = %err, "Rejected insert");
            return Err(err);
        }
        let id = T::table_mut(self).insert(record);
        debug!(entity = T::Id::ENTITY, id = id.raw(), "Inserted record");
        Ok(id)
    }

    /// Looks up a record.
    pub fn get<T: Entity>(&self, id: T::Id) -> StoreResult<&Record<T::Id, T>> {
        T::table(self).get(id).ok_or_else(|| not_found(id))
    }

    /// Replaces an existing record after checking its references and constraints.
    pub fn update<T: Entity>(&mut self, id: T::Id, record: T) -> StoreResult<()> {
        if !T::table(self).contains(id) {
            return Err(not_found(id));
        }
        if let Err(err) = record.check(self, Some(id)) {
            warn!(entity = T::Id::ENTITY, id = id.raw(), error = %err, "Rejected update");
            return Err(err);
        }
        T::table_mut(self).replace(id, record);
        debug!(entity = T::Id::ENTITY, id = id.raw(), "Updated record");
        Ok(())
    }

    /// Deletes a record and everything depending on it.
    ///
    /// Returns the number of records removed, the record itself included.
    pub fn delete<T: Entity>(&mut self, id: T::Id) -> StoreResult<usize> {
        if !T::table(self).contains(id) {
            return Err(not_found(id));
        }
        let removed = T::remove_cascade(self, id);
        debug!(entity = T::Id::ENTITY, id = id.raw(), removed, "Deleted record");
        Ok(removed)
    }

    /// All records of a kind, in insertion order.
    pub fn all<T: Entity>(&self) -> impl Iterator<Item = &Record<T::Id, T>> {
        T::table(self).iter()
    }

    /// Number of records of a kind.
    pub fn count<T: Entity>(&self) -> usize {
        T::table(self).len()
    }

    /// Records active at `when` (default: the store clock's now).
    pub fn filter_active<T: Entity + Temporal>(
        &self,
        when: Option<NaiveDateTime>,
    ) -> impl Iterator<Item = &Record<T::Id, T>> {
        let when = when.unwrap_or_else(|| self.now());
        self.all::<T>().filter_active(Some(when))
    }

    /// Records whose end is strictly before `when` (default: now).
    pub fn filter_archived<T: Entity + Temporal>(
        &self,
        when: Option<NaiveDateTime>,
    ) -> impl Iterator<Item = &Record<T::Id, T>> {
        let when = when.unwrap_or_else(|| self.now());
        self.all::<T>().filter_archived(Some(when))
    }

    /// Records whose start is strictly after `when` (default: now).
    pub fn filter_future<T: Entity + Temporal>(
        &self,
        when: Option<NaiveDateTime>,
    ) -> impl Iterator<Item = &Record<T::Id, T>> {
        let when = when.unwrap_or_else(|| self.now());
        self.all::<T>().filter_future(Some(when))
    }

    /// Contracts of a person.
    pub fn contracts_of(
        &self,
        person: PersonId,
    ) -> impl Iterator<Item = &Record<ContractId, Contract>> {
        self.contracts.iter().filter(move |c| c.person == person)
    }

    /// Absences of a person.
    pub fn absences_of(
        &self,
        person: PersonId,
    ) -> impl Iterator<Item = &Record<AbsenceId, Absence>> {
        self.absences.iter().filter(move |a| a.person == person)
    }

    /// Allocations of a person.
    pub fn allocations_of(
        &self,
        person: PersonId,
    ) -> impl Iterator<Item = &Record<AllocationId, Allocation>> {
        self.allocations.iter().filter(move |a| a.person == person)
    }

    /// Allocations on a project.
    pub fn project_allocations(
        &self,
        project: ProjectId,
    ) -> impl Iterator<Item = &Record<AllocationId, Allocation>> {
        self.allocations.iter().filter(move |a| a.project == project)
    }

    /// Time entries of a person.
    pub fn time_entries_of(
        &self,
        person: PersonId,
    ) -> impl Iterator<Item = &Record<TimeEntryId, TimeEntry>> {
        self.time_entries.iter().filter(move |t| t.person == person)
    }

    /// Time entries booked on a project.
    pub fn project_time_entries(
        &self,
        project: ProjectId,
    ) -> impl Iterator<Item = &Record<TimeEntryId, TimeEntry>> {
        self.time_entries
            .iter()
            .filter(move |t| t.project == Some(project))
    }

    /// Projects of a client.
    pub fn projects_of(
        &self,
        client: ClientId,
    ) -> impl Iterator<Item = &Record<ProjectId, Project>> {
        self.projects.iter().filter(move |p| p.client == Some(client))
    }

    /// Renders an allocation as `"{person} @ {project}"`.
    pub fn describe_allocation(&self, id: AllocationId) -> StoreResult<String> {
        let allocation = self.get::<Allocation>(id)?;
        let person = self.person_profile(allocation.person)?;
        let project = self.get::<Project>(allocation.project)?;
        Ok(format!("{} @ {}", person, project.data()))
    }

    /// Renders a contract as its person's name.
    pub fn describe_contract(&self, id: ContractId) -> StoreResult<String> {
        let contract = self.get::<Contract>(id)?;
        Ok(self.person_profile(contract.person)?.to_string())
    }

    /// Hours of a time entry, counting a running entry up to the store
    /// clock's now.
    pub fn hours_of(&self, id: TimeEntryId) -> StoreResult<Decimal> {
        Ok(self.get::<TimeEntry>(id)?.hours_at(self.now()))
    }
}

pub(crate) fn not_found<I: RecordId>(id: I) -> StoreError {
    StoreError::NotFound {
        entity: I::ENTITY,
        id: id.raw(),
    }
}
