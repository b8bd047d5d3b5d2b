//! # In-memory Store
//!
//! A generic, actor-backed entity store used as the persistence layer behind
//! resource types. Each [`StoreActor`] owns a `HashMap` of entities and runs in
//! its own Tokio task; [`StoreClient`] is the cheap, cloneable handle callers
//! use to reach it.
//!
//! The fulfillment pipeline never talks to a store directly: operations and
//! relation loaders do.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoredEntity;
pub use error::StoreError;
pub use message::StoreRequest;
