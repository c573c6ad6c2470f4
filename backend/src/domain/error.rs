//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status code and renders the payload as the JSON error
//! envelope clients see.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The payload is absent or lacks one of the mandatory item fields.
    MandatoryFieldsMissing,
    /// An item with the same identifier already exists.
    DuplicateId,
    /// No item matches the requested identifier.
    ItemNotFound,
    /// An unexpected error occurred, typically in the item store.
    InternalError,
}

impl ErrorCode {
    /// Client-facing message associated with the code.
    ///
    /// # Examples
    /// ```
    /// use listings_backend::domain::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::DuplicateId.message(), "Duplicate UUID");
    /// ```
    pub fn message(self) -> &'static str {
        match self {
            Self::MandatoryFieldsMissing => "Mandatory fields are missing",
            Self::DuplicateId => "Duplicate UUID",
            Self::ItemNotFound => "Item not found Error",
            Self::InternalError => "Internal Server Error",
        }
    }
}

/// Domain error payload.
///
/// Serialises as the error envelope returned to clients:
/// `{"error": "...", "code": "...", "traceId": "...", "details": {...}}`
/// where `traceId` and `details` are omitted when absent.
///
/// ## Invariants
/// - `message` is never empty; blank messages fall back to the code's
///   default message.
///
/// # Examples
/// ```
/// use listings_backend::domain::{Error, ErrorCode};
///
/// let err = Error::item_not_found();
/// assert_eq!(err.code(), ErrorCode::ItemNotFound);
/// assert_eq!(err.message(), "Item not found Error");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "mandatory_fields_missing")]
    code: ErrorCode,
    #[serde(rename = "error")]
    #[schema(example = "Mandatory fields are missing")]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the trace identifier in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.message().to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured when the error was created.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use listings_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::mandatory_fields_missing()
    ///     .with_details(json!({ "fields": ["title"] }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::MandatoryFieldsMissing`].
    pub fn mandatory_fields_missing() -> Self {
        Self::from_code(ErrorCode::MandatoryFieldsMissing)
    }

    /// Convenience constructor for [`ErrorCode::DuplicateId`].
    pub fn duplicate_id() -> Self {
        Self::from_code(ErrorCode::DuplicateId)
    }

    /// Convenience constructor for [`ErrorCode::ItemNotFound`].
    pub fn item_not_found() -> Self {
        Self::from_code(ErrorCode::ItemNotFound)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    ///
    /// The message describes the cause for server-side logs; adapters
    /// replace it with the generic message before it reaches a client.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.message())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
