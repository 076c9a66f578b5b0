use super::{check_integrity, RecordStore};
use crate::error::{Result, StockzError};
use crate::model::Record;

/// Insertion ordered in-memory record collection.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl RecordStore for InMemoryStore {
    fn records(&self) -> &[Record] {
        &self.records
    }

    fn insert_record(&mut self, record: Record) -> Result<()> {
        if self.position(&record.id).is_some() {
            return Err(StockzError::Integrity(format!(
                "duplicate id '{}'",
                record.id
            )));
        }
        self.records.push(record);
        Ok(())
    }

    fn replace_record(&mut self, id: &str, record: Record) -> Result<()> {
        let index = self
            .position(id)
            .ok_or_else(|| StockzError::NotFound(id.to_string()))?;
        if record.id != id && self.position(&record.id).is_some() {
            return Err(StockzError::Integrity(format!(
                "duplicate id '{}'",
                record.id
            )));
        }
        self.records[index] = record;
        Ok(())
    }

    fn remove_record(&mut self, id: &str) -> Result<Record> {
        let index = self
            .position(id)
            .ok_or_else(|| StockzError::NotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    fn replace_all(&mut self, records: Vec<Record>) -> Result<()> {
        check_integrity(&records)?;
        self.records = records;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const FIXTURE_CREATED_AT: &str = "2024-01-01 08:00:00";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` records with ids "1"..="count".
        pub fn with_records(mut self, count: usize) -> Self {
            for i in 1..=count {
                let record = Record {
                    id: i.to_string(),
                    name: format!("Item {}", i),
                    category: "General".to_string(),
                    quantity: i as u64,
                    price: i as f64 * 1.5,
                    location: String::new(),
                    created_at: FIXTURE_CREATED_AT.to_string(),
                };
                self.store.insert_record(record).unwrap();
            }
            self
        }

        pub fn with_record(mut self, id: &str, name: &str, category: &str) -> Self {
            let record = Record {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                quantity: 1,
                price: 1.0,
                location: String::new(),
                created_at: FIXTURE_CREATED_AT.to_string(),
            };
            self.store.insert_record(record).unwrap();
            self
        }
    }
}
