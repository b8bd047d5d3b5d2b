//! # StoredEntity Trait
//!
//! The contract an entity must satisfy to be kept in a [`StoreActor`](crate::store::StoreActor).
//! It extends [`Resource`] with the payloads used to create and update it.

use crate::framework::Resource;
use std::fmt::Debug;

/// Trait that any entity must implement to be managed by a `StoreActor`.
///
/// We use associated types (`Create`, `Update`) so that an `Article` store
/// only ever accepts an `ArticleCreate` payload; the compiler rejects the rest.
pub trait StoredEntity: Resource + Debug {
    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Construct the full entity from the generated id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, String>;

    /// Apply an update in place.
    fn on_update(&mut self, update: Self::Update) -> Result<(), String>;
}
