//! redb-backed key-value store
//!
//! A single `collections` table maps collection key → JSON payload.
//! redb commits with immediate durability by default: the file is always
//! in a consistent state, which matters on POS terminals that get powered
//! off without warning.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};

use super::{KvStore, StorageResult};

/// key = collection name, value = JSON payload
const COLLECTIONS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("collections");

/// Persistent [`KvStore`] backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table up front so reads never hit a missing table
        let write_txn = db.begin_write()?;
        write_txn.open_table(COLLECTIONS_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KvStore for RedbStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        self.put_many(&[(key, value)])
    }

    fn put_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            for (key, value) in entries {
                table.insert(*key, *value)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.put("tables", "[]").unwrap();
            store.put("tables", r#"[{"id":"t-1"}]"#).unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get("tables").unwrap().as_deref(), Some(r#"[{"id":"t-1"}]"#));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_put_many_writes_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("store.redb")).unwrap();

        store
            .put_many(&[("active_orders", "[]"), ("order_history", r#"[{"id":"o-1"}]"#)])
            .unwrap();

        assert_eq!(store.get("active_orders").unwrap().as_deref(), Some("[]"));
        assert_eq!(
            store.get("order_history").unwrap().as_deref(),
            Some(r#"[{"id":"o-1"}]"#)
        );
    }
}
