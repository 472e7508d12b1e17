//! Explicit descriptors for displayable record fields.
//!
//! The surrounding CRUD machinery describes each visible column by name with
//! a getter/setter pair over a record instance. The field set here is fixed
//! and small, so plain function pointers stand in for reflection.

use crate::Record;

/// One displayable field: its name plus typed accessors operating on a
/// record instance.
pub struct FieldDescriptor<R> {
    name: &'static str,
    get: fn(&R) -> String,
    set: fn(&mut R, String),
}

impl<R> FieldDescriptor<R> {
    pub fn new(name: &'static str, get: fn(&R) -> String, set: fn(&mut R, String)) -> Self {
        Self { name, get, set }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Display representation of the field name: leading capital.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn get(&self, record: &R) -> String {
        (self.get)(record)
    }

    pub fn set(&self, record: &mut R, value: String) {
        (self.set)(record, value)
    }
}

/// Descriptors for every displayable field of [`Record`], in display order.
pub fn record_fields() -> Vec<FieldDescriptor<Record>> {
    vec![
        FieldDescriptor::new("id", |r| r.id.clone(), |r, v| r.id = v),
        FieldDescriptor::new("value", |r| r.value.clone(), |r, v| r.value = v),
    ]
}
