//! Fixture library for CRUD scaffolding tests.
//!
//! This crate is dependency-light and holds the record type, the CRUD port
//! trait, the field descriptors, and the in-memory fixture store used to
//! exercise a CRUD adapter contract in tests. Keep real persistence and IO
//! concerns out of this crate.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A fixture entity with a stable string identifier and one mutable payload
/// field. Identity is the id: two records describe the same entity iff their
/// ids match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub value: String,
}

impl Record {
    pub fn new<I: Into<String>, V: Into<String>>(id: I, value: V) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// A validation failure for a single displayable field.
///
/// The fixture store never produces these; the type exists because the CRUD
/// adapter contract requires a per-record validation result. Real
/// implementations plug actual validation in behind the same shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Port required of anything the CRUD listing machinery can page over.
///
/// No `Send + Sync` bounds: sources here are single-owner and live inside one
/// test's sequential execution. Concurrent tests build their own instances.
pub trait CrudSource {
    type Item;

    /// Up to `count` items starting at absolute position `start`, in the
    /// source's own stable order. A window past the end yields the available
    /// tail, or nothing; never an error.
    fn find_for_list(&self, start: usize, count: usize) -> Vec<Self::Item>;

    /// Look up a single item from an externally supplied parameter, typically
    /// a path or query segment. Absence is a normal outcome, not an error.
    fn find_for_param(&self, param: &str) -> Option<Self::Item>;
}

pub mod adapters;
pub mod crud;
pub mod fields;
