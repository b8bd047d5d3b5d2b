//! # Mock Framework
//!
//! Utilities for testing resource types without a store behind them.
//!
//! [`MockLoader`] holds a fixed table of relations per entity id and answers
//! [`RelationLoader::load`] from it, returning only the relations asked for.
//! Every call is recorded so tests can assert what the handler requested (or
//! that it requested nothing at all).
//!
//! # Example
//! ```ignore
//! let loader = MockLoader::new()
//!     .with_relation(1, "author", vec![person])
//!     .failing("comments");
//!
//! // ... run a handler ...
//!
//! assert_eq!(loader.calls(), vec![vec!["author".to_string()]]);
//! ```

use crate::framework::entity::{LoadedRelations, Primary, Resource};
use crate::framework::error::LoadError;
use crate::framework::handler::RelationLoader;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Error returned for relations marked with [`MockLoader::failing`].
#[derive(Debug, thiserror::Error)]
#[error("mock loader failure")]
pub struct MockFailure;

/// An in-memory [`RelationLoader`] with call recording.
#[derive(Clone)]
pub struct MockLoader<T: Resource, R: Resource> {
    fixtures: Vec<(T::Id, String, Vec<R>)>,
    failing: Vec<String>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl<T: Resource, R: Resource> Default for MockLoader<T, R> {
    fn default() -> Self {
        Self {
            fixtures: Vec::new(),
            failing: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Resource, R: Resource> MockLoader<T, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `related` available under `relation` for entity `id`.
    pub fn with_relation(mut self, id: T::Id, relation: &str, related: Vec<R>) -> Self {
        self.fixtures.push((id, relation.to_string(), related));
        self
    }

    /// Makes any load that includes `relation` fail.
    pub fn failing(mut self, relation: &str) -> Self {
        self.failing.push(relation.to_string());
        self
    }

    /// Relation lists passed to `load`, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl<T: Resource, R: Resource> RelationLoader<T, R> for MockLoader<T, R> {
    async fn load(
        &self,
        primary: &Primary<T>,
        relations: &[String],
    ) -> Result<LoadedRelations<T::Id, R>, LoadError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(relations.to_vec());
        }

        if let Some(relation) = relations.iter().find(|r| self.failing.contains(*r)) {
            return Err(LoadError::new(relation.clone(), MockFailure));
        }

        let mut loaded = LoadedRelations::new();
        for entity in primary {
            let Some(id) = entity.id() else {
                continue;
            };
            for relation in relations {
                for (fixture_id, name, related) in &self.fixtures {
                    if fixture_id == id && name == relation {
                        loaded.insert(id.clone(), name.clone(), related.clone());
                    }
                }
            }
        }
        Ok(loaded)
    }
}
