use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::RwLock;

/// A managed blocklist entry, as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredEntry {
    pub id: u32,
    pub url: String,
    pub added_on: DateTime<Utc>,
}

/// In-memory blocklist backing the embedded API. Ids are assigned
/// monotonically and never reused within a process lifetime.
#[derive(Debug, Default)]
pub struct BlocklistStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    entries: Vec<StoredEntry>,
    next_id: u32,
}

/// Failure modes surfaced to API handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    DuplicateUrl,
    NotFound,
}

impl BlocklistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<StoredEntry> {
        self.inner.read().unwrap().entries.clone()
    }

    pub fn add(&self, url: &str) -> Result<StoredEntry, StoreError> {
        let mut inner = self.inner.write().unwrap();
        if inner.entries.iter().any(|e| e.url == url) {
            return Err(StoreError::DuplicateUrl);
        }
        inner.next_id += 1;
        let entry = StoredEntry {
            id: inner.next_id,
            url: url.to_string(),
            added_on: Utc::now(),
        };
        inner.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn remove(&self, id: u32) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.id != id);
        if inner.entries.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.inner
            .read()
            .unwrap()
            .entries
            .iter()
            .any(|e| e.url == url)
    }
}
