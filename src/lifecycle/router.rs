//! Routing entry point: the one place that checks method support before
//! handing a request to the pipeline.

use crate::framework::{ErrorKind, FulfillError, Registration, Request, ResourceType, Response};
use tracing::{debug, info, info_span, warn, Instrument};

/// Routes `request` to `registration`.
///
/// Rejects unsupported methods with [`FulfillError::MethodNotAllowed`] without
/// invoking the handler, then fulfills the request inside a `request` span
/// and logs the outcome: unknown ids, unknown linked resources and failures.
pub async fn route<H: ResourceType>(
    registration: &Registration<H>,
    request: &Request,
) -> Result<Response<H::Entity, H::Related>, FulfillError> {
    let span = info_span!("request", resource = H::NAME, method = %request.method());
    async {
        let handler = registration.handler(request);
        if !handler.supports_method(request.method()) {
            warn!("Method not allowed");
            return Err(FulfillError::MethodNotAllowed(request.method()));
        }

        debug!(
            operation = %request.method().operation_name(),
            id = ?request.id(),
            include = ?request.include(),
            "Dispatch"
        );

        let result = handler.fulfill_request().await;
        match &result {
            Ok(response) => {
                for error in &response.errors {
                    warn!(
                        code = error.code(),
                        unknown = %error.description,
                        "Unknown linked resources requested"
                    );
                }
                info!(
                    status = response.status,
                    primary = response.primary.len(),
                    linked = response.linked.len(),
                    errors = response.errors.len(),
                    "Fulfilled"
                );
            }
            Err(e) => match e.api_error() {
                Some(api) if api.code.kind == ErrorKind::UnknownId => {
                    warn!(code = api.code(), id = ?request.id(), "Unknown ID")
                }
                _ => warn!(status = e.status(), error = %e, "Failed"),
            },
        }
        result
    }
    .instrument(span)
    .await
}
