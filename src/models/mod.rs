//! Domain records for personnel, projects and time tracking.
//!
//! Records are plain data. The temporal ones (contracts, absences, projects,
//! allocations, time entries) embed a [`TemporalRange`](crate::temporal::TemporalRange)
//! and implement [`Temporal`](crate::temporal::Temporal).

mod absence;
mod activity;
mod allocation;
mod client;
mod contract;
mod ids;
mod note;
mod person;
mod project;
mod time_entry;

pub use absence::{Absence, AbsenceState, AbsenceType};
pub use activity::Activity;
pub use allocation::Allocation;
pub use client::Client;
pub use contract::{Contract, ContractType};
pub use ids::{
    AbsenceId, ActivityId, AllocationId, ClientId, ContractId, NoteId, PersonId, ProjectId,
    RecordId, TimeEntryId, UserId,
};
pub use note::{AbsenceNote, Attachment, ClientNote, ContractNote, Note, PersonNote};
pub use person::{Person, Profile, User};
pub use project::Project;
pub use time_entry::TimeEntry;
