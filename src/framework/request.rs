//! # Requests
//!
//! The already-parsed inbound request consumed by the fulfillment pipeline.
//! Transport parsing happens upstream; by the time a [`Request`] reaches a
//! [`Handler`](crate::framework::Handler) it is an immutable value.

use std::fmt;
use std::str::FromStr;

/// The verbs a resource type can declare operations for.
///
/// # The CRUD Pattern
/// - **Get (Read)**: fetch one resource by id, or a filtered collection.
/// - **Post (Create)**: create a new resource from attributes.
/// - **Patch / Put (Update)**: modify an existing resource.
/// - **Delete**: remove a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    /// Every method, in table order.
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Patch,
        Method::Put,
        Method::Delete,
    ];

    /// The upper-case token, as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Canonical operation identifier for this method.
    ///
    /// Lower-cases the verb, title-cases it and prefixes it with `handle`, so
    /// `GET` becomes `handleGet`. Dispatch goes through an
    /// [`OperationTable`](crate::framework::OperationTable); the name is kept
    /// stable for logs and diagnostics.
    pub fn operation_name(&self) -> String {
        let lower = self.as_str().to_ascii_lowercase();
        let mut chars = lower.chars();
        let title: String = match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        };
        format!("handle{}", title)
    }

    /// Status of a successful response assembled by the handler.
    pub fn success_status(&self) -> u16 {
        match self {
            Method::Post => 201,
            _ => 200,
        }
    }

    /// Index into [`Method::ALL`].
    pub(crate) fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a verb token is not one of [`Method::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// A normalized, already-parsed request.
///
/// `include` tolerates duplicates on the way in but is exposed as a set:
/// [`Request::include`] yields each relation name once, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    include: Vec<String>,
    id: Option<String>,
    filter: Vec<(String, String)>,
    attributes: Option<serde_json::Value>,
}

impl Request {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            include: Vec::new(),
            id: None,
            filter: Vec::new(),
            attributes: None,
        }
    }

    /// Shorthand for `Request::new(Method::Get)`.
    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds requested relation names. Names already present are ignored.
    pub fn with_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.include.contains(&name) {
                self.include.push(name);
            }
        }
        self
    }

    /// Parses a comma separated `include` parameter (`"author,comments"`).
    pub fn with_include_param(self, param: &str) -> Self {
        self.with_include(
            param
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.push((key.into(), value.into()));
        self
    }

    /// Attaches the decoded request document (create and update payloads).
    pub fn with_attributes(mut self, attributes: serde_json::Value) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Requested relation names, deduplicated, in request order.
    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// First filter value recorded under `key`.
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filter
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> Option<&serde_json::Value> {
        self.attributes.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(Method::Get.operation_name(), "handleGet");
        assert_eq!(Method::Post.operation_name(), "handlePost");
        assert_eq!(Method::Delete.operation_name(), "handleDelete");
    }

    #[test]
    fn test_slot_follows_table_order() {
        for (index, method) in Method::ALL.iter().enumerate() {
            assert_eq!(method.slot(), index);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Method>(), Ok(Method::Get));
        assert_eq!(" PATCH ".parse::<Method>(), Ok(Method::Patch));
        assert_eq!(
            "TRACE".parse::<Method>(),
            Err(UnknownMethod("TRACE".to_string()))
        );
    }

    #[test]
    fn test_include_is_a_set() {
        let request = Request::get()
            .with_include(["author", "tags", "author"])
            .with_include_param("tags, comments,,");
        assert_eq!(request.include(), &["author", "tags", "comments"]);
    }

    #[test]
    fn test_filters() {
        let request = Request::get().with_filter("author", "person_1");
        assert_eq!(request.filter("author"), Some("person_1"));
        assert_eq!(request.filter("title"), None);
    }
}
