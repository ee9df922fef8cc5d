// Resource store seams
//
// Handlers depend on these traits, never on a concrete backend. Stores are
// constructed once at startup and injected through the router state.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Category, Place, User};

pub use memory::{MemoryCategoryStore, MemoryPlaceStore, MemoryUserStore};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// List places in insertion order. A limit past the end returns only
    /// the remaining items.
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Place>, StoreError>;

    /// `Ok(None)` for unrecognized or malformed identifiers, never an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<Place>, StoreError>;

    /// Assigns a fresh identifier, overwriting any client-supplied one.
    async fn insert(&self, place: Place) -> Result<Place, StoreError>;

    /// Full replacement. `NotFound` when the id does not exist.
    async fn update(&self, place: Place) -> Result<(), StoreError>;

    /// `NotFound` when the id does not exist.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Test/lifecycle utility, not part of the request-serving contract.
    async fn clear(&self);
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Category>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Category>, StoreError>;

    /// Assigns a fresh identifier. `Conflict` when `type_name` is already
    /// taken by another category.
    async fn insert(&self, category: Category) -> Result<Category, StoreError>;

    async fn update(&self, category: Category) -> Result<(), StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    async fn clear(&self);
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Resolve a user by username+password equality and attach its group.
    /// `Ok(None)` is the normal no-match outcome; `Err` is reserved for
    /// lookup-layer faults and must never stand in for "not found".
    async fn check_user(&self, username: &str, password: &str)
        -> Result<Option<User>, StoreError>;
}
