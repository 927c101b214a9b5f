//! Gopher storage - trait and in-memory implementation

pub mod memory;

use async_trait::async_trait;

use crate::api::models::Gopher;
use crate::error::Result;

pub use memory::InMemoryStore;

/// Storage backend for gophers
///
/// Each method is atomic with respect to the others. Implementations
/// report a missing id as [`AppError::NotFound`](crate::AppError::NotFound)
/// and a duplicate id on insert as [`AppError::Conflict`](crate::AppError::Conflict).
#[async_trait]
pub trait GopherStore: Send + Sync {
    /// Insert a new gopher, failing if its id is taken
    async fn insert(&self, gopher: Gopher) -> Result<Gopher>;

    /// All gophers in insertion order
    async fn list(&self) -> Result<Vec<Gopher>>;

    async fn get(&self, id: &str) -> Result<Gopher>;

    /// Replace the name of an existing gopher
    async fn update_name(&self, id: &str, name: String) -> Result<Gopher>;

    async fn delete(&self, id: &str) -> Result<()>;
}
