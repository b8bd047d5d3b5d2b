//! # Responses
//!
//! What the pipeline hands to the serializer: the primary result, the linked
//! resources and the non-fatal errors.

use crate::framework::entity::{Primary, Resource};
use crate::framework::error::ApiError;
use crate::framework::linking::Linked;
use serde::Serialize;

/// A fulfilled request, ready for serialization.
///
/// Serializes as `{"data": ..., "linked": {...}, "errors": [...]}`. `errors`
/// is always present, even when empty. `status` is a hint for the transport
/// layer and is not part of the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize, R: Serialize"))]
pub struct Response<T, R> {
    #[serde(rename = "data")]
    pub primary: Primary<T>,
    pub linked: Linked<R>,
    pub errors: Vec<ApiError>,
    #[serde(skip)]
    pub status: u16,
}

impl<T: Resource, R: Resource> Response<T, R> {
    /// Wraps a primary result with nothing linked and no errors.
    pub fn new(primary: Primary<T>) -> Self {
        Self {
            primary,
            linked: Linked::new(),
            errors: Vec::new(),
            status: 200,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}
