//! Gopher operations independent of the HTTP layer
//!
//! [`GopherService`] validates payloads, assigns identifiers and delegates
//! to a [`GopherStore`]. The axum handlers in [`crate::api::handlers`] are
//! thin wrappers around it.

use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::models::{CreateGopherRequest, Gopher, UpdateGopherRequest};
use crate::config::ValidationConfig;
use crate::error::{AppError, Result};
use crate::store::GopherStore;

/// CRUD operations over the gopher collection
pub struct GopherService {
    store: Arc<dyn GopherStore>,
    limits: ValidationConfig,
}

impl GopherService {
    pub fn new(store: Arc<dyn GopherStore>, limits: ValidationConfig) -> Self {
        Self { store, limits }
    }

    /// Create a gopher, generating a UUID v4 id when none is given
    pub async fn create(&self, request: CreateGopherRequest) -> Result<Gopher> {
        self.validate_name(&request.name)?;

        let id = match request.id {
            Some(id) if !id.is_empty() => {
                self.validate_id(&id)?;
                id
            }
            _ => Uuid::new_v4().to_string(),
        };

        self.store
            .insert(Gopher {
                id,
                name: request.name,
            })
            .await
    }

    /// All gophers in insertion order
    pub async fn list(&self) -> Result<Vec<Gopher>> {
        let gophers = self.store.list().await?;
        debug!(count = gophers.len(), "Listed gophers");
        Ok(gophers)
    }

    pub async fn get(&self, id: &str) -> Result<Gopher> {
        self.store.get(id).await
    }

    /// Replace the mutable fields of an existing gopher; the id never changes
    pub async fn update(&self, id: &str, request: UpdateGopherRequest) -> Result<Gopher> {
        if let Some(body_id) = request.id.as_deref() {
            if !body_id.is_empty() && body_id != id {
                warn!(id = %id, body_id = %body_id, "Rejected update with mismatched id");
                return Err(AppError::Validation(format!(
                    "body id '{}' does not match path id '{}'",
                    body_id, id
                )));
            }
        }
        self.validate_name(&request.name)?;

        self.store.update_name(id, request.name).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(id).await
    }

    fn validate_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            warn!("Rejected gopher with empty name");
            return Err(AppError::Validation("name must not be empty".to_string()));
        }

        let length = name.chars().count();
        if length > self.limits.max_name_length {
            warn!(length, "Rejected gopher with oversized name");
            return Err(AppError::Validation(format!(
                "name must be at most {} characters",
                self.limits.max_name_length
            )));
        }

        Ok(())
    }

    fn validate_id(&self, id: &str) -> Result<()> {
        if id.chars().count() > self.limits.max_id_length {
            return Err(AppError::Validation(format!(
                "id must be at most {} characters",
                self.limits.max_id_length
            )));
        }

        // Must stay addressable as a single path segment.
        if id.contains('/') || id.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(
                "id must not contain '/' or whitespace".to_string(),
            ));
        }

        // Clients collapse dot segments before sending the request.
        if id == "." || id == ".." {
            return Err(AppError::Validation(
                "id must not be a dot segment".to_string(),
            ));
        }

        Ok(())
    }
}
