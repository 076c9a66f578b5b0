//! # Storage Layer
//!
//! The [`RecordStore`] trait is the only way the rest of stockz touches the record
//! collection. Commands build the add/update/delete rules on top of its primitives; the
//! primitives themselves refuse anything that would break the store invariants, so a buggy
//! caller gets an error instead of a corrupted store.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the authoritative, insertion ordered collection. Persistence
//!   is a separate concern handled by [`crate::codec`], which reads and writes the whole
//!   collection at once.

use crate::error::{Result, StockzError};
use crate::model::Record;
use std::collections::HashSet;

pub mod memory;

/// Abstract interface for the record collection.
pub trait RecordStore {
    /// All records in insertion order.
    fn records(&self) -> &[Record];

    /// Append a record. Fails if its id is already taken.
    fn insert_record(&mut self, record: Record) -> Result<()>;

    /// Overwrite the record with id `id` in place, keeping its position.
    fn replace_record(&mut self, id: &str, record: Record) -> Result<()>;

    /// Remove and return the record with id `id`.
    fn remove_record(&mut self, id: &str) -> Result<Record>;

    /// Swap the whole collection, e.g. after loading a file. Leaves the store untouched if
    /// `records` fails [`check_integrity`].
    fn replace_all(&mut self, records: Vec<Record>) -> Result<()>;

    fn get_record(&self, id: &str) -> Option<&Record> {
        self.records().iter().find(|r| r.id == id)
    }

    fn ids(&self) -> Vec<&str> {
        self.records().iter().map(|r| r.id.as_str()).collect()
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Checks that a whole record set could live in a store.
pub fn check_integrity(records: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.id.trim().is_empty() {
            return Err(StockzError::Integrity("record with an empty id".to_string()));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(StockzError::Integrity(format!(
                "duplicate id '{}'",
                record.id
            )));
        }
        if record.name.trim().is_empty() || record.category.trim().is_empty() {
            return Err(StockzError::Integrity(format!(
                "record '{}' is missing a name or category",
                record.id
            )));
        }
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(StockzError::Integrity(format!(
                "record '{}' has an invalid price {}",
                record.id, record.price
            )));
        }
    }
    Ok(())
}
