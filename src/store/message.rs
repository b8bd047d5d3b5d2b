//! # Store Messages
//!
//! The messages exchanged between [`StoreClient`](crate::store::StoreClient)
//! and [`StoreActor`](crate::store::StoreActor).

use crate::store::entity::StoredEntity;
use crate::store::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests a store actor understands.
///
/// Besides the CRUD operations, `GetMany` fetches a batch of ids in one round
/// trip, which is what relation loaders need. `List` returns every entity in
/// insertion order.
#[derive(Debug)]
pub enum StoreRequest<T: StoredEntity> {
    Create {
        params: T::Create,
        respond_to: Reply<T>,
    },
    Get {
        id: T::Id,
        respond_to: Reply<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Reply<Vec<T>>,
    },
    List {
        respond_to: Reply<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Reply<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Reply<T>,
    },
}
