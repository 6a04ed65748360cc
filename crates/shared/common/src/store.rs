//! Ordered in-memory record store.
//!
//! Records keep insertion order and are never removed, so the id of the
//! last record is always the largest one handed out.

use tokio::sync::RwLock;

/// A stored entity with a numeric identifier.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> u64;
}

impl Record for domain::User {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for domain::Product {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Insertion-ordered collection of records.
pub struct RecordStore<T: Record> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store holding `records` in the given order
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Snapshot of every record in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// First record whose id equals `id`
    pub async fn get(&self, id: u64) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Assign the next id, build the record with it and append it.
    ///
    /// The id is last id + 1, or 1 for an empty store. Both steps happen
    /// under one write lock.
    pub async fn append<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let mut records = self.records.write().await;
        let next_id = records.last().map_or(1, |last| last.id() + 1);
        let record = build(next_id);
        records.push(record.clone());
        record
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
