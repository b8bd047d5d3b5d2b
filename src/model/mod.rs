//! Pure data structures for the blog domain, each implementing
//! [`StoredEntity`](crate::store::StoredEntity).

pub mod article;
pub mod comment;
pub mod linkable;
pub mod person;
pub mod tag;

pub use article::*;
pub use comment::*;
pub use linkable::*;
pub use person::*;
pub use tag::*;
