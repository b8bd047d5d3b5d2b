//! # Lifecycle Management
//!
//! Wiring and running the pieces around the fulfillment pipeline.
//!
//! - [`BlogSystem`] spawns the store actors, connects the article relation
//!   loader to the stores it reads from and registers the `articles` resource
//!   type.
//! - [`route`] is what a transport layer calls per request: it checks
//!   [`supports_method`](crate::framework::Handler::supports_method) and then
//!   runs the handler.
//! - [`setup_tracing`] initializes structured logging.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the store channels
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for all store tasks to finish
//!
//! The article registration holds clones of the person, comment and tag
//! clients, so it is dropped along with them.

pub mod blog_system;
pub mod router;
pub mod tracing;

pub use blog_system::*;
pub use router::*;
pub use self::tracing::*;
