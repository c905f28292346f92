//! Error taxonomy: failure categories, well-known codes, and the wire payload.
//!
//! These types are transport agnostic. The mapping onto HTTP status codes and
//! responses lives in [`crate::api::error`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Closed set of failure categories.
///
/// Each category corresponds to exactly one HTTP status code; the mapping is
/// an exhaustive `match` in [`crate::api::error`], so extending this enum
/// without extending the mapping fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request is malformed or fails validation.
    Validation,
    /// Authentication failed or is missing.
    Authentication,
    /// Authenticated but not permitted to perform this action.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// The caller exceeded its request allowance.
    RateLimit,
    /// An unexpected error occurred on the server.
    Internal,
}

/// Well-known error codes, namespaced by the kind that conventionally raises
/// them.
///
/// Codes are plain strings and are never validated against their kind — any
/// string is accepted when constructing an [`Error`]. That flexibility is
/// intentional; treat these constants as the canonical vocabulary.
pub mod codes {
    /// Codes raised with [`ErrorKind::Validation`](super::ErrorKind::Validation).
    pub mod validation {
        /// A parameter carried an unacceptable value.
        pub const INVALID_PARAMETER: &str = "invalid_parameter";
        /// A required field was absent from the request.
        pub const MISSING_REQUIRED_FIELD: &str = "missing_required_field";
        /// A field was present but malformed.
        pub const INVALID_FORMAT: &str = "invalid_format";
        /// The resource being created already exists.
        pub const ALREADY_EXISTS: &str = "already_exists";
        /// The resource is referenced elsewhere and cannot change.
        pub const IN_USE: &str = "resource_in_use";
        /// The resource is not in a state that allows the operation.
        pub const INVALID_STATE: &str = "invalid_state";
    }

    /// Codes raised with [`ErrorKind::Authentication`](super::ErrorKind::Authentication).
    pub mod authentication {
        /// No usable credentials accompanied the request.
        pub const UNAUTHORIZED: &str = "unauthorized";
        /// The presented token failed verification.
        pub const INVALID_TOKEN: &str = "invalid_token";
        /// The presented token is past its expiry.
        pub const EXPIRED_TOKEN: &str = "expired_token";
        /// The presented credentials do not match a known identity.
        pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    }
}

/// Error payload surfaced to clients.
///
/// A per-request value object: constructed where a request fails, propagated
/// upward unchanged, and dropped once the response is emitted. `param` and
/// `details` are omitted from the serialized body entirely when absent.
///
/// # Examples
/// ```
/// use example_api::models::{codes, Error};
///
/// let err = Error::validation(codes::validation::INVALID_PARAMETER, "bad email")
///     .with_param("email");
/// assert_eq!(err.code, "invalid_parameter");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// The error type category.
    #[serde(rename = "type")]
    #[schema(example = "validation")]
    pub kind: ErrorKind,
    /// Machine-readable error code identifier.
    #[schema(example = "invalid_parameter")]
    pub code: String,
    /// Human-readable error message.
    #[schema(example = "The request was invalid")]
    pub message: String,
    /// The parameter that caused the error, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "email")]
    pub param: Option<String>,
    /// Additional error context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error with the given kind, code, and message.
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            param: None,
            details: None,
        }
    }

    /// Name the parameter that caused the error.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use example_api::models::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::not_found("unknown_user", "no such user")
    ///     .with_details(json!({ "id": "usr_404" }));
    /// assert!(err.details.is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorKind::Validation`].
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, code, message)
    }

    /// Convenience constructor for [`ErrorKind::Authentication`].
    pub fn authentication(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, code, message)
    }

    /// Convenience constructor for [`ErrorKind::Forbidden`].
    pub fn forbidden(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, code, message)
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, message)
    }

    /// Convenience constructor for [`ErrorKind::RateLimit`].
    pub fn rate_limit(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RateLimit, code, message)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    pub fn internal(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, code, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
