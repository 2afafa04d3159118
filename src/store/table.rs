//! Typed in-memory tables.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::models::RecordId;
use crate::temporal::{Temporal, TemporalRange};

/// A stored record: the data plus the id the table assigned to it.
///
/// Dereferences to the data, so `record.name` reads the record's field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<K, T> {
    id: K,
    #[serde(flatten)]
    data: T,
}

impl<K: Copy, T> Record<K, T> {
    /// The assigned id.
    pub fn id(&self) -> K {
        self.id
    }

    /// The record data.
    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<K, T> Deref for Record<K, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<K, T: fmt::Display> fmt::Display for Record<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

impl<K, T: Temporal> Temporal for Record<K, T> {
    fn range(&self) -> &TemporalRange {
        self.data.range()
    }
}

/// Rows of one record kind, keyed by sequential ids.
#[derive(Debug, Clone)]
pub struct Table<K, T> {
    rows: BTreeMap<K, Record<K, T>>,
    last_id: u64,
}

impl<K, T> Default for Table<K, T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<K: RecordId, T> Table<K, T> {
    /// Stores `data` under the next id.
    pub(crate) fn insert(&mut self, data: T) -> K {
        self.last_id += 1;
        let id = K::from_raw(self.last_id);
        self.rows.insert(id, Record { id, data });
        id
    }

    /// Replaces the data of an existing row, returning false if absent.
    pub(crate) fn replace(&mut self, id: K, data: T) -> bool {
        match self.rows.get_mut(&id) {
            Some(row) => {
                row.data = data;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: K) -> Option<Record<K, T>> {
        self.rows.remove(&id)
    }

    /// Removes every row matching `predicate`, returning the removed ids.
    pub(crate) fn remove_where<F>(&mut self, mut predicate: F) -> Vec<K>
    where
        F: FnMut(&T) -> bool,
    {
        let ids = self.ids_where(&mut predicate);
        for id in &ids {
            self.rows.remove(id);
        }
        ids
    }

    /// Ids of rows matching `predicate`, in insertion order.
    pub(crate) fn ids_where<F>(&self, mut predicate: F) -> Vec<K>
    where
        F: FnMut(&T) -> bool,
    {
        self.rows
            .values()
            .filter(|row| predicate(&row.data))
            .map(|row| row.id)
            .collect()
    }

    /// Looks up a row.
    pub fn get(&self, id: K) -> Option<&Record<K, T>> {
        self.rows.get(&id)
    }

    /// Returns true if a row with `id` exists.
    pub fn contains(&self, id: K) -> bool {
        self.rows.contains_key(&id)
    }

    /// All rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record<K, T>> {
        self.rows.values()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
