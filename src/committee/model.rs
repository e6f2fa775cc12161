//! Committee and adherent models
//!
//! The entities templates render and pass back into the registered functions.
//! The helper treats both as opaque; the fields exist so link resolvers can
//! address a committee and pages can display it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A committee: the group permissions and routes are scoped to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committee {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// URL-safe identifier, merged into route parameters by resolvers
    pub slug: String,
    /// When the committee was created
    pub created_at: DateTime<Utc>,
}

impl Committee {
    /// Create a new committee
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            slug: slug.into(),
            created_at: Utc::now(),
        }
    }

    /// Create with a specific ID (useful when hydrating from elsewhere)
    pub fn with_id(id: Uuid, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            created_at: Utc::now(),
        }
    }
}

/// An adherent: the identity whose role eligibility is being queried
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adherent {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// When the adherent registered
    pub registered_at: DateTime<Utc>,
}

impl Adherent {
    /// Create a new adherent
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            registered_at: Utc::now(),
        }
    }

    /// Create with a specific ID
    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            registered_at: Utc::now(),
        }
    }
}
