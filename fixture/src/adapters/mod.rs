//! Store implementations backing the CRUD ports.
//!
//! These are intended purely for tests and local demos. A real application
//! would back the same ports with an actual persistence adapter.

pub mod memory_store;
