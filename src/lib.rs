//! # Linked Resources
//!
//! > **Request fulfillment for resource-linking API documents.**
//!
//! This crate sits between an already-parsed API request and a persistence
//! layer. It dispatches the request to a per-method operation of a resource
//! type, loads the relations the client asked for (and the type exposes),
//! deduplicates the related resources into a single `linked` map, and reports
//! unknown relation requests as non-fatal errors next to the primary result.
//!
//! ## Core Concepts
//!
//! ### Resource types
//! A [`ResourceType`](framework::ResourceType) declares an error scope, the
//! relation names it exposes, an operation table and a relation loader. The
//! [`Handler`](framework::Handler) logic is written once and works for all of
//! them.
//!
//! ### Fatal vs non-fatal errors
//! - **Fatal** failures abort the request and come back as
//!   [`FulfillError`](framework::FulfillError) with an HTTP status: unknown
//!   id (404), method not allowed (405), operation errors, loader failures.
//! - **Non-fatal** errors ride along in
//!   [`Response::errors`](framework::Response): currently only "unknown linked
//!   resources requested".
//!
//! Every error code is `scope | kind`, where the scope belongs to the resource
//! type and the kind bits are shared: unknown id = 1, unknown linked
//! resources = 2, no id = 4, invalid attributes = 8.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Requests, responses, error codes, linked-resource assembly and the handler.
//!
//! ### 2. The Persistence Layer ([`store`])
//! A generic actor-backed in-memory store. Operations and relation loaders
//! read and write through its cloneable client.
//!
//! ### 3. The Implementation ([`model`], [`articles`])
//! A blog domain: articles linking to their author, comments and tags.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Spawns the stores, registers the resource types, routes requests and sets
//! up tracing.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod articles;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod store;
