//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A gopher
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Gopher {
    /// Unique identifier, immutable after creation
    #[schema(example = "1")]
    pub id: String,

    #[schema(example = "Gopher")]
    pub name: String,
}

/// Gopher creation request
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateGopherRequest {
    /// Identifier to use; generated by the server when omitted or empty
    #[serde(default)]
    #[schema(example = "1")]
    pub id: Option<String>,

    #[schema(example = "Gopher")]
    pub name: String,
}

impl CreateGopherRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }
}

/// Gopher update request
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateGopherRequest {
    /// Optional; must match the path id when present
    #[serde(default)]
    pub id: Option<String>,

    #[schema(example = "Gordon")]
    pub name: String,
}

impl UpdateGopherRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
