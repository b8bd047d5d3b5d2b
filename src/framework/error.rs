//! # Errors
//!
//! Error codes are scoped per resource type: each type declares an
//! `ERROR_SCOPE` and every code it emits is `scope | kind`. The numeric value is
//! what clients see, so the bit assignments below must not change.

use serde::{Serialize, Serializer};

/// The default error bits shared by every resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation found nothing for the requested id.
    UnknownId,
    /// Some `include` names are not exposed by the resource type.
    UnknownLinkedResources,
    /// The operation needs an id and the request has none.
    NoId,
    /// The submitted attributes failed validation.
    InvalidAttrs,
    /// One of the reserved extension bits (16 through 512), free for
    /// resource-specific failures.
    Extension(ExtensionBit),
}

/// Reserved extension bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionBit {
    B16,
    B32,
    B64,
    B128,
    B256,
    B512,
}

impl ErrorKind {
    pub fn bit(&self) -> u32 {
        match self {
            ErrorKind::UnknownId => 1,
            ErrorKind::UnknownLinkedResources => 2,
            ErrorKind::NoId => 4,
            ErrorKind::InvalidAttrs => 8,
            ErrorKind::Extension(bit) => match bit {
                ExtensionBit::B16 => 16,
                ExtensionBit::B32 => 32,
                ExtensionBit::B64 => 64,
                ExtensionBit::B128 => 128,
                ExtensionBit::B256 => 256,
                ExtensionBit::B512 => 512,
            },
        }
    }
}

/// A scope combined with an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub scope: u32,
    pub kind: ErrorKind,
}

impl ErrorCode {
    pub fn new(scope: u32, kind: ErrorKind) -> Self {
        Self { scope, kind }
    }

    /// The wire value: `scope | kind`.
    pub fn value(&self) -> u32 {
        self.scope | self.kind.bit()
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value())
    }
}

/// A structured, coded error as it appears in a response document.
///
/// Used both for fatal failures (wrapped in [`FulfillError::Api`]) and for
/// the non-fatal entries collected in [`Response::errors`](crate::framework::Response).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{title} ({}): {description}", .code.value())]
pub struct ApiError {
    pub code: ErrorCode,
    pub status: u16,
    pub title: String,
    pub description: String,
}

impl ApiError {
    pub fn new(
        code: ErrorCode,
        status: u16,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code,
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn unknown_id(scope: u32, id: Option<&str>) -> Self {
        let description = match id {
            Some(id) => format!("No resource found with id {}", id),
            None => "No resource found for this request".to_string(),
        };
        Self::new(
            ErrorCode::new(scope, ErrorKind::UnknownId),
            404,
            "Unknown ID",
            description,
        )
    }

    pub fn unknown_linked_resources(scope: u32, names: &[&str]) -> Self {
        Self::new(
            ErrorCode::new(scope, ErrorKind::UnknownLinkedResources),
            400,
            "Unknown linked resources requested",
            names.join(", "),
        )
    }

    pub fn no_id(scope: u32) -> Self {
        Self::new(
            ErrorCode::new(scope, ErrorKind::NoId),
            400,
            "No ID",
            "This operation requires a resource id",
        )
    }

    pub fn invalid_attrs(scope: u32, description: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::new(scope, ErrorKind::InvalidAttrs),
            422,
            "Invalid attributes",
            description,
        )
    }

    /// The combined numeric code.
    pub fn code(&self) -> u32 {
        self.code.value()
    }
}

/// A relation loader failed. Carries the underlying persistence error.
#[derive(Debug, thiserror::Error)]
#[error("Failed to load relation {relation}: {source}")]
pub struct LoadError {
    pub relation: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl LoadError {
    pub fn new(
        relation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            relation: relation.into(),
            source: Box::new(source),
        }
    }
}

/// Fatal failures that abort [`Handler::fulfill_request`](crate::framework::Handler::fulfill_request).
#[derive(Debug, thiserror::Error)]
pub enum FulfillError {
    /// A coded failure: unknown id, or anything an operation raises itself.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The resource type has no operation for this method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(crate::framework::Method),
    /// Relation loading failed; never downgraded to a non-fatal error.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The operation's own persistence call failed.
    #[error("Operation failed: {0}")]
    Operation(Box<dyn std::error::Error + Send + Sync>),
}

impl FulfillError {
    /// HTTP status the transport layer should emit.
    pub fn status(&self) -> u16 {
        match self {
            FulfillError::Api(e) => e.status,
            FulfillError::MethodNotAllowed(_) => 405,
            FulfillError::Load(_) | FulfillError::Operation(_) => 500,
        }
    }

    /// The structured error, when there is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            FulfillError::Api(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_codes() {
        assert_eq!(ErrorCode::new(16, ErrorKind::UnknownId).value(), 17);
        assert_eq!(ErrorCode::new(16, ErrorKind::UnknownLinkedResources).value(), 18);
        assert_eq!(ErrorCode::new(0, ErrorKind::NoId).value(), 4);
        assert_eq!(ErrorCode::new(1024, ErrorKind::InvalidAttrs).value(), 1032);
        assert_eq!(
            ErrorCode::new(0, ErrorKind::Extension(ExtensionBit::B512)).value(),
            512
        );
    }

    #[test]
    fn test_unknown_id_error() {
        let err = ApiError::unknown_id(16, Some("42"));
        assert_eq!(err.code(), 17);
        assert_eq!(err.status, 404);
        assert_eq!(err.title, "Unknown ID");

        let fatal = FulfillError::from(err);
        assert_eq!(fatal.status(), 404);
        assert!(fatal.api_error().is_some());
    }

    #[test]
    fn test_unknown_linked_resources_description() {
        let err = ApiError::unknown_linked_resources(0, &["tags", "likes"]);
        assert_eq!(err.description, "tags, likes");
        assert_eq!(err.title, "Unknown linked resources requested");
        assert_eq!(err.code(), 2);
    }
}
