//! Invocation bridge — folds one gRPC call into a single awaitable result.
//!
//! Each invocation issues exactly one underlying call and resolves exactly
//! once: either the backend's response payload or a [`BackendFailure`]
//! carrying the native status code and detail text. No retries, no internal
//! timeout; deadline policy belongs to the transport configuration, not
//! here. Invocations are request-scoped and independent; any number may be
//! outstanding on the same client handle at once.

use std::future::Future;

use tonic::{Response, Status};

use crate::error::BackendFailure;

/// Await a single client call future, unwrapping the response payload or
/// capturing the backend's failure descriptor.
pub async fn invoke<T>(
    call: impl Future<Output = Result<Response<T>, Status>>,
) -> Result<T, BackendFailure> {
    call.await
        .map(Response::into_inner)
        .map_err(BackendFailure::from)
}
