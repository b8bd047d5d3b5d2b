//! # Linked-resource assembly
//!
//! Flattens every related entity loaded across one or many primary entities
//! into a single map grouped by relation name. A response document must not
//! carry the same related entity twice under one key, so each bucket is
//! deduplicated by id.

use crate::framework::entity::{LoadedRelations, Primary, Resource};
use crate::framework::error::ApiError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Relation key → deduplicated related entities, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct Linked<R> {
    buckets: Vec<(String, Vec<R>)>,
}

impl<R> Default for Linked<R> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }
}

impl<R> Linked<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relation: &str) -> Option<&[R]> {
        self.buckets
            .iter()
            .find(|(name, _)| name == relation)
            .map(|(_, bucket)| bucket.as_slice())
    }

    /// Relation keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn bucket_mut(&mut self, relation: &str) -> &mut Vec<R> {
        let index = match self.buckets.iter().position(|(name, _)| name == relation) {
            Some(index) => index,
            None => {
                self.buckets.push((relation.to_string(), Vec::new()));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index].1
    }
}

impl<R: Resource> Linked<R> {
    /// Appends `item` unless the bucket already holds an entity with its id.
    /// Entities without an id are always appended.
    fn push_unique(bucket: &mut Vec<R>, item: &R) {
        if let Some(id) = item.id() {
            if bucket.iter().any(|existing| existing.id() == Some(id)) {
                return;
            }
        }
        bucket.push(item.clone());
    }
}

impl<R: Serialize> Serialize for Linked<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (name, bucket) in &self.buckets {
            map.serialize_entry(name, bucket)?;
        }
        map.end()
    }
}

/// Builds the linked map for `primary` from what the loader attached.
///
/// Walks primary entities in order and, for each, its loaded relations in
/// load order. Relations that were never populated get no bucket.
pub fn assemble_linked<T, R>(primary: &Primary<T>, loaded: &LoadedRelations<T::Id, R>) -> Linked<R>
where
    T: Resource,
    R: Resource,
{
    let mut linked = Linked::new();
    for entity in primary {
        let Some(id) = entity.id() else {
            continue;
        };
        for (relation, related) in loaded.relations_of(id) {
            let bucket = linked.bucket_mut(relation);
            for item in related {
                Linked::push_unique(bucket, item);
            }
        }
    }
    linked
}

/// Exposed relations that were also requested, in exposed order.
pub fn requested_relations(exposed: &[&str], include: &[String]) -> Vec<String> {
    exposed
        .iter()
        .filter(|name| include.iter().any(|requested| requested == *name))
        .map(|name| name.to_string())
        .collect()
}

/// Requested relations the resource type does not expose, in request order.
pub fn unknown_relations<'a>(exposed: &[&str], include: &'a [String]) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = Vec::new();
    for name in include {
        if !exposed.contains(&name.as_str()) && !unknown.contains(&name.as_str()) {
            unknown.push(name.as_str());
        }
    }
    unknown
}

/// Non-fatal errors for a request: at most one entry listing every unknown
/// relation name.
pub fn non_fatal_errors(scope: u32, exposed: &[&str], include: &[String]) -> Vec<ApiError> {
    let unknown = unknown_relations(exposed, include);
    if unknown.is_empty() {
        Vec::new()
    } else {
        vec![ApiError::unknown_linked_resources(scope, &unknown)]
    }
}
