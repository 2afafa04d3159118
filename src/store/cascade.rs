//! Cascade deletion.
//!
//! Each function removes one row plus everything referencing it and returns
//! the total number of rows removed. Callers check the row exists.

use tracing::debug;

use crate::models::{
    AbsenceId, ActivityId, ClientId, ContractId, PersonId, ProjectId, RecordId, UserId,
};

use super::RecordStore;

impl RecordStore {
    /// User → person (and its dependents) and every note the user wrote.
    pub(crate) fn remove_user(&mut self, id: UserId) -> usize {
        let mut removed = 0;
        for person in self.persons.ids_where(|p| p.user == id) {
            removed += self.remove_person(person);
        }
        removed += self.person_notes.remove_where(|n| n.author() == id).len();
        removed += self.contract_notes.remove_where(|n| n.author() == id).len();
        removed += self.absence_notes.remove_where(|n| n.author() == id).len();
        removed += self.client_notes.remove_where(|n| n.author() == id).len();
        removed += usize::from(self.users.remove(id).is_some());
        removed
    }

    /// Person → notes, contracts, absences, allocations, time entries.
    pub(crate) fn remove_person(&mut self, id: PersonId) -> usize {
        let mut removed = self.person_notes.remove_where(|n| n.parent() == id).len();
        for contract in self.contracts.ids_where(|c| c.person == id) {
            removed += self.remove_contract(contract);
        }
        for absence in self.absences.ids_where(|a| a.person == id) {
            removed += self.remove_absence(absence);
        }
        removed += self.allocations.remove_where(|a| a.person == id).len();
        removed += self.time_entries.remove_where(|t| t.person == id).len();
        removed += usize::from(self.persons.remove(id).is_some());
        debug!(person = id.raw(), removed, "Removed person");
        removed
    }

    /// Contract → its notes.
    pub(crate) fn remove_contract(&mut self, id: ContractId) -> usize {
        let removed = self.contract_notes.remove_where(|n| n.parent() == id).len();
        removed + usize::from(self.contracts.remove(id).is_some())
    }

    /// Absence → its notes.
    pub(crate) fn remove_absence(&mut self, id: AbsenceId) -> usize {
        let removed = self.absence_notes.remove_where(|n| n.parent() == id).len();
        removed + usize::from(self.absences.remove(id).is_some())
    }

    /// Client → notes, projects (and their dependents).
    pub(crate) fn remove_client(&mut self, id: ClientId) -> usize {
        let mut removed = self.client_notes.remove_where(|n| n.parent() == id).len();
        for project in self.projects.ids_where(|p| p.client == Some(id)) {
            removed += self.remove_project(project);
        }
        removed + usize::from(self.clients.remove(id).is_some())
    }

    /// Project → allocations, time entries booked on it.
    pub(crate) fn remove_project(&mut self, id: ProjectId) -> usize {
        let mut removed = self.allocations.remove_where(|a| a.project == id).len();
        removed += self
            .time_entries
            .remove_where(|t| t.project == Some(id))
            .len();
        removed + usize::from(self.projects.remove(id).is_some())
    }

    /// Activity → time entries booked on it.
    pub(crate) fn remove_activity(&mut self, id: ActivityId) -> usize {
        let removed = self
            .time_entries
            .remove_where(|t| t.activity == Some(id))
            .len();
        removed + usize::from(self.activities.remove(id).is_some())
    }
}
