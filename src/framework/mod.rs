//! Generic request-fulfillment framework.
//!
//! This module provides the building blocks for serving resource types
//! through a resource-linking document convention: typed requests, scoped
//! error codes, linked-resource assembly and the [`Handler`] that ties them
//! together.
//!
//! # Main Components
//!
//! - [`Request`] / [`Method`] - The already-parsed inbound request
//! - [`ResourceType`] - Trait that resource types implement to be served
//! - [`Handler`] - Dispatches, loads relations and assembles the [`Response`]
//! - [`ApiError`] / [`FulfillError`] - Scoped error codes and fatal failures
//!
//! # Testing
//!
//! See [`mock`] module for a loader that records what the handler asked for.

pub mod entity;
pub mod error;
pub mod handler;
pub mod linking;
pub mod mock;
pub mod request;
pub mod response;

// Re-export core types for convenience
pub use entity::{LoadedRelations, Primary, RelationMap, Resource};
pub use error::{ApiError, ErrorCode, ErrorKind, ExtensionBit, FulfillError, LoadError};
pub use handler::{
    Handler, Operation, OperationFuture, OperationResult, OperationTable, Outcome, Registration,
    RelationLoader, ResourceType,
};
pub use linking::{assemble_linked, non_fatal_errors, requested_relations, unknown_relations, Linked};
pub use request::{Method, Request, UnknownMethod};
pub use response::Response;
