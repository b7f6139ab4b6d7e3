//! Keyed staging table shared by staging workers

use crate::core::sync::handle_mutex_poison;
use crate::ingest::content::ContentHandle;
use crate::ingest::error::{IngestError, IngestResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Staged content handles keyed by unit identity
///
/// Safe for concurrent insertion. Draining hands the handles out in
/// ascending unit order.
#[derive(Debug, Default)]
pub struct StagingTable {
    entries: Mutex<BTreeMap<String, ContentHandle>>,
}

impl StagingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a staged handle
    ///
    /// Returns the handle back if its unit is already staged; the first
    /// handle for a unit wins.
    pub fn insert(&self, handle: ContentHandle) -> IngestResult<Option<ContentHandle>> {
        let mut entries = handle_mutex_poison(self.entries.lock(), |message| {
            IngestError::Synchronisation { message }
        })?;

        if entries.contains_key(handle.unit_id()) {
            return Ok(Some(handle));
        }
        entries.insert(handle.unit_id().to_string(), handle);
        Ok(None)
    }

    pub fn len(&self) -> IngestResult<usize> {
        let entries = handle_mutex_poison(self.entries.lock(), |message| {
            IngestError::Synchronisation { message }
        })?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> IngestResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn contains(&self, unit_id: &str) -> IngestResult<bool> {
        let entries = handle_mutex_poison(self.entries.lock(), |message| {
            IngestError::Synchronisation { message }
        })?;
        Ok(entries.contains_key(unit_id))
    }

    /// Remove every staged handle, in drain order
    pub fn take_all(&self) -> IngestResult<Vec<ContentHandle>> {
        let mut entries = handle_mutex_poison(self.entries.lock(), |message| {
            IngestError::Synchronisation { message }
        })?;
        Ok(std::mem::take(&mut *entries).into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_first_insert_wins() {
        let table = StagingTable::new();
        assert!(table.insert(ContentHandle::from_literal("SELECT 1")).unwrap().is_none());

        let duplicate = table.insert(ContentHandle::from_literal("SELECT 1")).unwrap();
        assert!(duplicate.is_some());
        assert_eq!(table.len().unwrap(), 1);
    }

    #[test]
    fn test_take_all_is_ordered_and_empties_table() {
        let table = StagingTable::new();
        for unit in ["SELECT 3", "SELECT 1", "SELECT 2"] {
            table.insert(ContentHandle::from_literal(unit)).unwrap();
        }

        let drained: Vec<String> = table
            .take_all()
            .unwrap()
            .into_iter()
            .map(|handle| handle.unit_id().to_string())
            .collect();
        assert_eq!(drained, vec!["SELECT 1", "SELECT 2", "SELECT 3"]);
        assert!(table.is_empty().unwrap());
    }

    #[test]
    fn test_concurrent_inserts() {
        let table = Arc::new(StagingTable::new());
        let workers: Vec<_> = (0..4)
            .map(|worker| {
                let table = Arc::clone(&table);
                thread::spawn(move || {
                    for i in 0..25 {
                        let unit = format!("SELECT {}", worker * 25 + i);
                        assert!(table.insert(ContentHandle::from_literal(unit)).unwrap().is_none());
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(table.len().unwrap(), 100);
        assert!(table.contains("SELECT 99").unwrap());
    }
}
