//! Article resource type: operations, exposed relations and the loader that
//! resolves them.

pub mod linker;
pub mod resource;

pub use linker::*;
pub use resource::*;
