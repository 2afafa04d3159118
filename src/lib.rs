//! Office records: personnel, projects and time tracking.
//!
//! This crate provides the record model of a small business-management
//! application (people and their contracts and absences, clients, projects,
//! allocations, activities and time entries) together with the temporal
//! validity rules shared by every record that has a start and an end.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod temporal;
