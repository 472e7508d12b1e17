//! Per-record adapter satisfying the CRUD contract's persist bundle.

use crate::adapters::memory_store::FixtureStore;
use crate::{FieldError, Record};

/// Couples one record instance to the store it belongs to, exposing the
/// persist/validate/delete/primary-key capability bundle the CRUD contract
/// expects per instance. Each method delegates 1:1 to the store.
///
/// This is the explicit replacement for an implicit record-to-capabilities
/// conversion: callers construct the adapter where they need the bundle and
/// drop it when done.
pub struct RecordAdapter<'a> {
    store: &'a mut FixtureStore,
    record: Record,
}

impl<'a> RecordAdapter<'a> {
    pub fn new(store: &'a mut FixtureStore, record: Record) -> Self {
        Self { store, record }
    }

    /// Upsert the record into the store. Always `true` at this layer.
    pub fn save(&mut self) -> bool {
        self.store.save(self.record.clone())
    }

    /// Validation result for the record; always empty in this fixture.
    pub fn validate(&self) -> Vec<FieldError> {
        self.store.validate(&self.record)
    }

    /// Remove the record from the store by id. `false` when it was absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete(&self.record)
    }

    /// Displayable primary-key string for the record.
    pub fn primary_key_as_string(&self) -> String {
        self.store.primary_key_as_string(&self.record)
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Mutable access for field setters; changes only reach the store on the
    /// next `save`.
    pub fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }
}
