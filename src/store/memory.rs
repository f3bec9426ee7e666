//! In-memory record store.
//!
//! Backs the test suite and the `memory` storage backend. Semantics match
//! the Postgres store: ids are monotonic and a deleted id is never handed
//! out again.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{Cupcake, CupcakeStore, NewCupcake, StoreError, StoreResult};

/// In-memory cupcake store.
///
/// Records live in an id-ordered map behind a read-write lock. All trait
/// methods complete without awaiting while the lock is held.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    rows: BTreeMap<i64, Cupcake>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CupcakeStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<Cupcake>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> StoreResult<Cupcake> {
        self.read()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, fields: NewCupcake) -> StoreResult<Cupcake> {
        let mut inner = self.write()?;
        let id = inner.next_id;
        inner.next_id += 1;
        let record = fields.into_record(id);
        inner.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, fields: NewCupcake) -> StoreResult<Cupcake> {
        let mut inner = self.write()?;
        if !inner.rows.contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }
        let record = fields.into_record(id);
        inner.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.write()?;
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}
