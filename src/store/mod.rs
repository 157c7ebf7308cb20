//! Document store adapter for wilder records
//!
//! A [`WilderStore`] exposes the five primitives the resolvers need. Each call is
//! a single store round-trip; atomicity is whatever the backend gives per call.
//! Backends are picked from the connection-string scheme by [`open_store`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{StoreError, StoreResult};

#[cfg(feature = "mongodb")]
pub mod mongo;
pub mod sql;

#[cfg(feature = "mongodb")]
pub use mongo::MongoWilderStore;
pub use sql::SqlWilderStore;

/// Embedded skill as stored inside its owning wilder
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub votes: Option<i32>,
}

/// A wilder document with its store-assigned identifier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wilder {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub skills: Vec<Skill>,
}

/// Skill values supplied by a caller, before the store assigns an id
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillFields {
    pub title: Option<String>,
    pub votes: Option<i32>,
}

impl SkillFields {
    pub fn into_skill(self, id: String) -> Skill {
        Skill {
            id: Some(id),
            title: self.title,
            votes: self.votes,
        }
    }
}

/// Every writable field of a wilder.
///
/// Writes replace all three fields: `None` and an empty list are written as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WilderFields {
    pub name: Option<String>,
    pub city: Option<String>,
    pub skills: Vec<SkillFields>,
}

/// Identifier of a wilder as received from a client.
///
/// Only emptiness is checked here; each backend validates its own format.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WilderId(String);

impl WilderId {
    pub fn parse(raw: impl Into<String>) -> StoreResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(StoreError::validation("id", "identifier must not be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WilderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
pub trait WilderStore: Send + Sync {
    /// Short backend name used in logs
    fn backend(&self) -> &'static str;

    /// All wilders in store-native order
    async fn find_all(&self) -> StoreResult<Vec<Wilder>>;

    async fn find_by_id(&self, id: &WilderId) -> StoreResult<Option<Wilder>>;

    /// Persist a new wilder and return it with its assigned identifiers
    async fn insert(&self, fields: WilderFields) -> StoreResult<Wilder>;

    /// Overwrite name, city and skills. True when a document was modified.
    async fn update_by_id(&self, id: &WilderId, fields: WilderFields) -> StoreResult<bool>;

    /// True when a document was removed
    async fn delete_by_id(&self, id: &WilderId) -> StoreResult<bool>;

    /// Release the underlying connection
    async fn close(&self) -> StoreResult<()>;
}

/// Open the backend matching the connection string scheme
pub async fn open_store(database_url: &str) -> StoreResult<Arc<dyn WilderStore>> {
    if database_url.starts_with("sqlite:") {
        let store = SqlWilderStore::connect(database_url).await?;
        info!("Connected to SQLite document store");
        return Ok(Arc::new(store));
    }

    if database_url.starts_with("mongodb://") || database_url.starts_with("mongodb+srv://") {
        #[cfg(feature = "mongodb")]
        {
            let store = MongoWilderStore::connect(database_url).await?;
            info!("Connected to MongoDB document store");
            return Ok(Arc::new(store));
        }

        #[cfg(not(feature = "mongodb"))]
        {
            return Err(StoreError::UnsupportedUrl(format!(
                "{} (built without the mongodb feature)",
                database_url
            )));
        }
    }

    Err(StoreError::UnsupportedUrl(database_url.to_string()))
}
