//! HTTP projection of the error taxonomy.
//!
//! Whatever failure a request produced ends up here and comes out as a status
//! code plus an [`Error`] body. The taxonomy itself stays transport free; this
//! module owns the kind-to-status table and the fallbacks for failures raised
//! outside the taxonomy.

use crate::models::{codes, Error, ErrorKind};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Code reported for failures outside the taxonomy.
const INTERNAL_ERROR_CODE: &str = "internal_error";

/// Map a failure category to its HTTP status.
///
/// Total by construction: the `match` is exhaustive over the closed
/// [`ErrorKind`] enum, so a new kind cannot ship without a status.
fn kind_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::RateLimit => StatusCode::TOO_MANY_REQUESTS,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Body returned for requests the framework rejected before any handler ran.
/// The original cause is deliberately not surfaced.
fn malformed_request() -> Error {
    Error::validation(codes::validation::INVALID_PARAMETER, "Invalid request")
}

/// Body returned for failures outside the taxonomy.
fn unclassified() -> Error {
    Error::internal(INTERNAL_ERROR_CODE, "Internal server error")
}

/// Project an arbitrary request failure onto the error contract.
///
/// Priority order:
/// 1. A domain [`Error`] is surfaced verbatim.
/// 2. A framework failure with a client-error status (malformed routing or
///    parsing, rejected before domain code ran) becomes a generic 400
///    validation error.
/// 3. Anything else becomes a generic 500; the cause is logged for operators
///    and never reaches the client.
///
/// This function never fails; it is the last line of defence on the error
/// path.
pub fn project(err: &actix_web::Error) -> Error {
    if let Some(domain) = err.as_error::<Error>() {
        return domain.clone();
    }
    if err.as_response_error().status_code().is_client_error() {
        return malformed_request();
    }
    error!(error = %err, "unclassified error promoted to internal error");
    unclassified()
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        project(&err)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        kind_status(self.kind)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Default service for requests that match no route.
///
/// Unroutable requests share the generic malformed-request body so the error
/// contract holds for every failure the server emits.
pub async fn fallback() -> ApiResult<HttpResponse> {
    Err(malformed_request())
}
