//! Record store for cupcake rows.
//!
//! The store is the single seam between the HTTP surface and persistence.
//! Two backends implement it: [`PgStore`] for production and
//! [`MemoryStore`] for tests and local development. Both uphold the same
//! guarantees:
//!
//! - ids are allocated by the backend, start at 1, and are never reused
//!   after deletion
//! - every operation is a single atomic action against the backend; update
//!   and delete cannot observe a record vanishing between an existence
//!   check and the mutation
//! - concurrent writers to the same id race at the operation level and the
//!   last write wins; there is no per-record locking

mod cupcake;
mod errors;
mod memory;
mod postgres;

pub use cupcake::{Cupcake, NewCupcake};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

/// Persistence operations over the cupcakes table.
///
/// `update` replaces all four data fields of the target record; partial
/// updates are composed by the caller before reaching the store.
#[async_trait]
pub trait CupcakeStore: Send + Sync {
    /// Every stored record, ordered by ascending id
    async fn list_all(&self) -> StoreResult<Vec<Cupcake>>;

    /// The record with the given id
    async fn get(&self, id: i64) -> StoreResult<Cupcake>;

    /// Persist a new record under a freshly allocated id
    async fn create(&self, fields: NewCupcake) -> StoreResult<Cupcake>;

    /// Replace the data fields of an existing record
    async fn update(&self, id: i64, fields: NewCupcake) -> StoreResult<Cupcake>;

    /// Remove a record permanently
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
