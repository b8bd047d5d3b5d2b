//! # Store Actor
//!
//! The "server" half of the store. It owns the entities and processes
//! requests sequentially, so the map needs no lock.

use crate::store::client::StoreClient;
use crate::store::entity::StoredEntity;
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever the store is needed.
///
/// The actor stops when every client has been dropped.
pub struct StoreActor<T: StoredEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: StoredEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id_fn` - Generates the id of each created entity.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Article" instead of "linked_resources::model::article::Article")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();
                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            self.order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Rejected(e)));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::GetMany { ids, respond_to } => {
                    let items: Vec<T> = ids
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Rejected(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    match self.store.remove(&id) {
                        Some(item) => {
                            self.order.retain(|existing| existing != &id);
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            let _ = respond_to.send(Ok(item));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Resource;
    use crate::lifecycle::sequential_ids;

    #[derive(Clone, Debug, PartialEq)]
    struct Label {
        id: String,
        text: String,
    }

    #[derive(Debug)]
    struct LabelUpdate {
        text: Option<String>,
    }

    impl Resource for Label {
        type Id = String;

        fn id(&self) -> Option<&String> {
            Some(&self.id)
        }
    }

    impl StoredEntity for Label {
        type Create = String;
        type Update = LabelUpdate;

        fn from_create_params(id: String, text: String) -> Result<Self, String> {
            if text.is_empty() {
                return Err("text must not be empty".to_string());
            }
            Ok(Self { id, text })
        }

        fn on_update(&mut self, update: LabelUpdate) -> Result<(), String> {
            if let Some(text) = update.text {
                self.text = text;
            }
            Ok(())
        }
    }

    fn spawn_store() -> StoreClient<Label> {
        let (actor, client) = StoreActor::new(10, sequential_ids("label"));
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_store_crud() {
        let client = spawn_store();

        let first = client.create("rust".to_string()).await.unwrap();
        let second = client.create("web".to_string()).await.unwrap();
        assert_eq!(first.id, "label_1");
        assert_eq!(second.id, "label_2");

        let fetched = client.get(first.id.clone()).await.unwrap().unwrap();
        assert_eq!(fetched.text, "rust");

        let updated = client
            .update(
                first.id.clone(),
                LabelUpdate {
                    text: Some("rustlang".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "rustlang");

        let listed = client.list().await.unwrap();
        assert_eq!(listed, vec![updated.clone(), second.clone()]);

        let removed = client.delete(first.id.clone()).await.unwrap();
        assert_eq!(removed.id, "label_1");
        assert!(client.get(first.id.clone()).await.unwrap().is_none());
        assert_eq!(
            client.delete(first.id).await,
            Err(StoreError::NotFound("label_1".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_many_keeps_requested_order_and_skips_missing() {
        let client = spawn_store();
        let a = client.create("a".to_string()).await.unwrap();
        let b = client.create("b".to_string()).await.unwrap();

        let items = client
            .get_many(vec![b.id.clone(), "label_99".to_string(), a.id.clone()])
            .await
            .unwrap();
        assert_eq!(items, vec![b, a]);
    }

    #[tokio::test]
    async fn test_rejected_create() {
        let client = spawn_store();
        let result = client.create(String::new()).await;
        assert!(matches!(result, Err(StoreError::Rejected(_))));
        assert!(client.list().await.unwrap().is_empty());
    }
}
