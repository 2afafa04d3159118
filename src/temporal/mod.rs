//! Temporal validity of records.
//!
//! Contracts, absences, projects, allocations and time entries all carry
//! optional start/end instants. This module holds the shared range type,
//! the [`Temporal`] trait every such record implements, and the filters the
//! record store applies to its tables.

mod query;
mod range;

pub use query::{TemporalQuery, active_at, archived_at, future_at};
pub use range::{Temporal, TemporalRange, now};
