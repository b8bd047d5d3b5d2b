//! # Store Client
//!
//! The generic client for communicating with a store actor.

use crate::store::entity::StoredEntity;
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// Holds only a sender, so cloning is inexpensive and clones can be shared
/// across tasks.
pub struct StoreClient<T: StoredEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoredEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoredEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn send<R>(
        &self,
        request: StoreRequest<T>,
        response: oneshot::Receiver<Result<R, StoreError>>,
    ) -> Result<R, StoreError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(StoreRequest::Create { params, respond_to }, response)
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(StoreRequest::Get { id, respond_to }, response).await
    }

    /// Fetches `ids` in order, skipping ids that do not exist.
    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let (respond_to, response) = oneshot::channel();
        self.send(StoreRequest::GetMany { ids, respond_to }, response)
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(StoreRequest::List { respond_to }, response).await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(
            StoreRequest::Update {
                id,
                update,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Removes the entity and returns it.
    pub async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(StoreRequest::Delete { id, respond_to }, response)
            .await
    }
}
