//! Example API server library.
//!
//! Exposes two documented list endpoints (`/user`, `/product`) together with
//! a uniform error-response contract: every failed request yields a JSON body
//! with a classified error type, a machine-readable code, and a human-readable
//! message. The OpenAPI document covering both is generated from the code.

pub mod api;
pub mod doc;
pub mod middleware;
pub mod models;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attaching a `Trace-Id` to responses.
pub use middleware::trace::Trace;
