use tracing::debug;

use crate::{CrudSource, FieldError, Record};

/// Insertion-ordered in-memory store for tests.
///
/// Backed by a `Vec` with a linear scan by id: at fixture scale that keeps
/// insertion order without an ordered-map dependency. Fully synchronous and
/// single-owner; concurrent tests should each construct their own instance
/// rather than share one.
pub struct FixtureStore {
    records: Vec<Record>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a store pre-populated with the given records, in the given
    /// order. A later duplicate of an id replaces the earlier record.
    pub fn seeded<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut store = Self::new();
        for record in records {
            store.save(record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Up to `count` records starting at position `start` in insertion
    /// order. A window past the end yields the available tail, or nothing;
    /// never an error, never padding.
    pub fn content(&self, start: usize, count: usize) -> Vec<Record> {
        self.records.iter().skip(start).take(count).cloned().collect()
    }

    /// The record with that id, if any. Absence is a normal outcome.
    pub fn find(&self, id: &str) -> Option<Record> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    /// Insert the record if its id is new, otherwise replace the existing
    /// record in place, keeping its original position in iteration order.
    /// Always returns `true`: this fixture has no validation failure path.
    pub fn save(&mut self, record: Record) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                debug!(id = %record.id, "replace record");
                *slot = record;
            }
            None => {
                debug!(id = %record.id, "insert record");
                self.records.push(record);
            }
        }
        true
    }

    /// Remove the record whose id matches. Returns `false` when no such id
    /// exists, so repeat deletes are no-ops.
    pub fn delete(&mut self, record: &Record) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != record.id);
        let removed = self.records.len() < before;
        if removed {
            debug!(id = %record.id, "delete record");
        }
        removed
    }

    /// Always empty: validation is stubbed out at this layer.
    pub fn validate(&self, _record: &Record) -> Vec<FieldError> {
        Vec::new()
    }

    /// The record's id as its displayable primary-key string.
    pub fn primary_key_as_string(&self, record: &Record) -> String {
        record.id.clone()
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CrudSource for FixtureStore {
    type Item = Record;

    fn find_for_list(&self, start: usize, count: usize) -> Vec<Record> {
        self.content(start, count)
    }

    fn find_for_param(&self, param: &str) -> Option<Record> {
        self.find(param)
    }
}
