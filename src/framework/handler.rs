//! # Request Fulfillment
//!
//! This module defines the [`Handler`], the core of the pipeline. A handler
//! binds one registered resource type to one [`Request`] and turns it into a
//! [`Response`]:
//!
//! 1. Dispatch the request method through the resource type's
//!    [`OperationTable`].
//! 2. Fail with `Unknown ID` (404) when the operation finds nothing.
//! 3. Return operation-built responses untouched.
//! 4. Otherwise intersect the requested and exposed relations, ask the
//!    [`RelationLoader`] for exactly those, assemble the linked resources and
//!    report requested relations the type does not expose.

use crate::framework::entity::{LoadedRelations, Primary, Resource};
use crate::framework::error::{ApiError, FulfillError, LoadError};
use crate::framework::linking::{assemble_linked, non_fatal_errors, requested_relations};
use crate::framework::request::{Method, Request};
use crate::framework::response::Response;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use tracing::info;

/// Loads related entities for a primary result.
///
/// Implemented by the persistence layer. The handler never calls `load` with
/// an empty relation list; implementations should still treat one as a no-op.
#[async_trait]
pub trait RelationLoader<T: Resource, R: Resource>: Send + Sync {
    /// Loads `relations` for every entity in `primary`.
    ///
    /// Relations that exist but hold nothing should be recorded as empty
    /// collections; relations that cannot be resolved at all may be left out.
    async fn load(
        &self,
        primary: &Primary<T>,
        relations: &[String],
    ) -> Result<LoadedRelations<T::Id, R>, LoadError>;
}

/// What an operation produced.
#[derive(Debug)]
pub enum Outcome<T, R> {
    /// A raw result; the handler loads relations and assembles the response.
    Primary(Primary<T>),
    /// A complete response the operation built itself. Returned as is.
    Response(Response<T, R>),
}

pub type OperationResult<T, R> = Result<Option<Outcome<T, R>>, FulfillError>;

pub type OperationFuture<'a, T, R> = Pin<Box<dyn Future<Output = OperationResult<T, R>> + Send + 'a>>;

/// A per-method operation of resource type `H`.
pub type Operation<H> = for<'a> fn(
    &'a H,
    &'a Request,
) -> OperationFuture<'a, <H as ResourceType>::Entity, <H as ResourceType>::Related>;

/// Trait that any resource type must implement to be served by a [`Handler`].
///
/// # Architecture Note
/// The handler logic is written *once*; each resource type only declares
/// its constants, its operations and where relations come from.
///
/// - `ERROR_SCOPE` is OR'd into every error code the type emits.
/// - `EXPOSED_RELATIONS` is the fixed, ordered set of relation names the type
///   serves, whatever the client asks for.
/// - [`ResourceType::operations`] is called once, at registration.
pub trait ResourceType: Send + Sync + Sized + 'static {
    /// The primary entity.
    type Entity: Resource;

    /// The entity type of linked resources (usually an enum over every
    /// related type).
    type Related: Resource;

    /// Name used in logs.
    const NAME: &'static str;

    const ERROR_SCOPE: u32;

    const EXPOSED_RELATIONS: &'static [&'static str];

    /// Builds the method → operation table.
    fn operations() -> OperationTable<Self>;

    /// The loader relations are requested from.
    fn loader(&self) -> &dyn RelationLoader<Self::Entity, Self::Related>;
}

/// Static dispatch table from [`Method`] to [`Operation`].
pub struct OperationTable<H: ResourceType> {
    slots: [Option<Operation<H>>; 5],
}

impl<H: ResourceType> Default for OperationTable<H> {
    fn default() -> Self {
        Self { slots: [None; 5] }
    }
}

impl<H: ResourceType> OperationTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `operation` for `method`, replacing any earlier entry.
    pub fn route(mut self, method: Method, operation: Operation<H>) -> Self {
        self.slots[method.slot()] = Some(operation);
        self
    }

    pub fn get(&self, method: Method) -> Option<Operation<H>> {
        self.slots[method.slot()]
    }

    pub fn supports(&self, method: Method) -> bool {
        self.slots[method.slot()].is_some()
    }

    /// Methods with an operation, in [`Method::ALL`] order.
    pub fn methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|m| self.supports(*m))
            .collect()
    }
}

/// A resource type together with its operation table, resolved once.
pub struct Registration<H: ResourceType> {
    resource: H,
    table: OperationTable<H>,
}

impl<H: ResourceType> Registration<H> {
    pub fn new(resource: H) -> Self {
        let table = H::operations();
        let methods: Vec<&str> = table.methods().iter().map(Method::as_str).collect();
        info!(resource = H::NAME, ?methods, "Registered");
        Self { resource, table }
    }

    pub fn resource(&self) -> &H {
        &self.resource
    }

    pub fn supports_method(&self, method: Method) -> bool {
        self.table.supports(method)
    }

    /// Binds a handler to `request`.
    pub fn handler<'a>(&'a self, request: &'a Request) -> Handler<'a, H> {
        Handler::new(self, request)
    }
}

/// Fulfills one request against one registered resource type.
///
/// Handlers are cheap, request-scoped values holding two borrows; build a new
/// one per request.
pub struct Handler<'a, H: ResourceType> {
    registration: &'a Registration<H>,
    request: &'a Request,
}

impl<'a, H: ResourceType> Handler<'a, H> {
    pub fn new(registration: &'a Registration<H>, request: &'a Request) -> Self {
        Self {
            registration,
            request,
        }
    }

    /// Whether the resource type defines an operation for `method`.
    ///
    /// Routers check this before calling [`Handler::fulfill_request`].
    pub fn supports_method(&self, method: Method) -> bool {
        self.registration.supports_method(method)
    }

    /// Runs the request through the pipeline.
    ///
    /// Emits no log events and writes nothing; callers such as
    /// [`route`](crate::lifecycle::route) report the outcome.
    ///
    /// # Errors
    /// - [`FulfillError::MethodNotAllowed`] if no operation is registered for
    ///   the request method.
    /// - [`FulfillError::Api`] with `Unknown ID` (404) if the operation found
    ///   nothing, or whatever coded error the operation raised.
    /// - [`FulfillError::Load`] if relation loading failed.
    pub async fn fulfill_request(&self) -> Result<Response<H::Entity, H::Related>, FulfillError> {
        let method = self.request.method();
        let operation = self
            .registration
            .table
            .get(method)
            .ok_or(FulfillError::MethodNotAllowed(method))?;

        let primary = match operation(&self.registration.resource, self.request).await? {
            None => return Err(ApiError::unknown_id(H::ERROR_SCOPE, self.request.id()).into()),
            Some(Outcome::Response(response)) => return Ok(response),
            Some(Outcome::Primary(primary)) => primary,
        };

        let include = self.request.include();
        let relations = requested_relations(H::EXPOSED_RELATIONS, include);
        let loaded = if relations.is_empty() {
            LoadedRelations::new()
        } else {
            self.registration
                .resource
                .loader()
                .load(&primary, &relations)
                .await?
        };

        let mut response = Response::new(primary).with_status(method.success_status());
        response.linked = assemble_linked(&response.primary, &loaded);
        response.errors = non_fatal_errors(H::ERROR_SCOPE, H::EXPOSED_RELATIONS, include);
        Ok(response)
    }
}
