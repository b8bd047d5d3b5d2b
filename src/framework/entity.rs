//! # Resources
//!
//! The shapes the pipeline consumes from the persistence layer: the
//! [`Resource`] trait every entity implements, the [`Primary`] result of an
//! operation, and the [`LoadedRelations`] side table a
//! [`RelationLoader`](crate::framework::RelationLoader) fills in.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Anything that can appear as a primary or linked resource.
///
/// # Identity
/// `id` is optional: entities that were never persisted have none. Primary
/// entities without an id cannot own loaded relations, and linked entities
/// without an id are never deduplicated.
pub trait Resource: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    fn id(&self) -> Option<&Self::Id>;
}

/// The primary result of an operation: one entity or a homogeneous collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> Primary<T> {
    /// Iterates the result; a lone entity is a one-element sequence.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Primary::Single(item) => std::slice::from_ref(item).iter(),
            Primary::Many(items) => items.iter(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Primary::Single(_) => 1,
            Primary::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_single(&self) -> Option<&T> {
        match self {
            Primary::Single(item) => Some(item),
            Primary::Many(_) => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a Primary<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for Primary<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Primary::Single(item) => item.serialize(serializer),
            Primary::Many(items) => items.serialize(serializer),
        }
    }
}

/// Relations loaded for one primary entity, in load order.
pub type RelationMap<R> = Vec<(String, Vec<R>)>;

/// Side table produced by a relation loader: primary entity id → the
/// relations loaded for it.
///
/// Kept separate from the entities so loading never mutates what the
/// persistence layer handed back.
#[derive(Debug, Clone)]
pub struct LoadedRelations<Id, R> {
    entries: HashMap<Id, RelationMap<R>>,
}

impl<Id: Eq + Hash, R> Default for LoadedRelations<Id, R> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<Id: Eq + Hash, R> LoadedRelations<Id, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `related` under `relation` for entity `id`.
    ///
    /// Inserting the same relation again replaces the earlier collection, so
    /// loading twice never stacks duplicates.
    pub fn insert(&mut self, id: Id, relation: impl Into<String>, related: Vec<R>) {
        let relation = relation.into();
        let map = self.entries.entry(id).or_default();
        match map.iter_mut().find(|(name, _)| *name == relation) {
            Some((_, existing)) => *existing = related,
            None => map.push((relation, related)),
        }
    }

    /// Relations loaded for `id`, in load order. Empty when nothing was loaded.
    pub fn relations_of(&self, id: &Id) -> &[(String, Vec<R>)] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_iterates_as_one() {
        let single = Primary::Single(7);
        assert_eq!(single.iter().copied().collect::<Vec<_>>(), vec![7]);
        assert_eq!(single.len(), 1);

        let many: Primary<i32> = Primary::Many(vec![]);
        assert!(many.is_empty());
        assert!(many.as_single().is_none());
    }

    #[test]
    fn test_insert_replaces_same_relation() {
        let mut loaded: LoadedRelations<u32, &str> = LoadedRelations::new();
        loaded.insert(1, "tags", vec!["a", "b"]);
        loaded.insert(1, "author", vec!["x"]);
        loaded.insert(1, "tags", vec!["a", "b"]);

        let relations = loaded.relations_of(&1);
        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0], ("tags".to_string(), vec!["a", "b"]));
        assert!(loaded.relations_of(&2).is_empty());
    }
}
