//! In-memory gopher store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::api::models::Gopher;
use crate::error::{AppError, Result};
use crate::store::GopherStore;

/// Index and insertion order, guarded together by one lock
#[derive(Default)]
struct Inner {
    by_id: HashMap<String, Gopher>,
    order: Vec<String>,
}

/// Gopher store backed by process memory
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GopherStore for InMemoryStore {
    async fn insert(&self, gopher: Gopher) -> Result<Gopher> {
        let mut inner = self.inner.write();

        if inner.by_id.contains_key(&gopher.id) {
            return Err(AppError::Conflict(gopher.id));
        }

        inner.order.push(gopher.id.clone());
        inner.by_id.insert(gopher.id.clone(), gopher.clone());
        info!(id = %gopher.id, total = inner.order.len(), "Stored gopher");

        Ok(gopher)
    }

    async fn list(&self) -> Result<Vec<Gopher>> {
        let inner = self.inner.read();
        let gophers = inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id).cloned())
            .collect();
        Ok(gophers)
    }

    async fn get(&self, id: &str) -> Result<Gopher> {
        let inner = self.inner.read();
        let gopher = inner.by_id.get(id).cloned();
        debug!(id = %id, found = gopher.is_some(), "Looked up gopher");
        gopher.ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn update_name(&self, id: &str, name: String) -> Result<Gopher> {
        let mut inner = self.inner.write();

        let gopher = inner
            .by_id
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        gopher.name = name;
        info!(id = %id, "Updated gopher");

        Ok(gopher.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write();

        if inner.by_id.remove(id).is_none() {
            return Err(AppError::NotFound(id.to_string()));
        }
        inner.order.retain(|existing| existing != id);
        info!(id = %id, total = inner.order.len(), "Removed gopher");

        Ok(())
    }
}
