//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. Log lines use a compact format without module paths; the
//! `resource` and `entity_type` fields say where a line came from.
//!
//! ## What Gets Traced
//!
//! - **Registration**: each resource type and the methods it serves
//! - **Requests**: a `request` span per routed request (`resource`, `method`)
//! - **Pipeline**: dispatch, relation loading, unknown ids and unknown includes
//! - **Stores**: startup, shutdown and every Create, Get, Update, Delete
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Dispatch and relation loading details
//! RUST_LOG=debug cargo run
//!
//! # Only the pipeline
//! RUST_LOG=linked_resources::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! INFO Registered resource="articles" methods=["GET", "POST", "PATCH", "PUT", "DELETE"]
//! DEBUG request: Dispatch resource="articles" operation=handleGet id=Some("article_1")
//! DEBUG request: Loading relations resource="articles" relations=["author"]
//! DEBUG request: GetMany entity_type="Person" requested=1 found=1
//! WARN request: Unknown linked resources requested resource="articles" unknown=likes
//! INFO request: Fulfilled status=200 errors=1
//! ```

/// Installs the global subscriber, filtered by `RUST_LOG`.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
