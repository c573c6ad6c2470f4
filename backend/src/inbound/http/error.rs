//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::MandatoryFieldsMissing => StatusCode::BAD_REQUEST,
        ErrorCode::DuplicateId => StatusCode::NOT_ACCEPTABLE,
        ErrorCode::ItemNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal(ErrorCode::InternalError.message());
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

#[cfg(test)]
mod tests {
    //! Tests for HTTP error mapping.

    use super::*;
    use actix_web::body::to_bytes;
    use rstest::{fixture, rstest};
    use serde_json::json;

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[fixture]
    fn internal_error_case() -> Error {
        Error::internal("connection reset by mongod")
            .with_trace_id(TRACE_ID)
            .with_details(json!({ "host": "db.internal" }))
    }

    #[rstest]
    #[case(Error::mandatory_fields_missing(), StatusCode::BAD_REQUEST)]
    #[case(Error::duplicate_id(), StatusCode::NOT_ACCEPTABLE)]
    #[case(Error::item_not_found(), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
        assert_eq!(ResponseError::status_code(&err), status);
    }

    async fn response_payload(error: &Error) -> (HttpResponse<()>, Error) {
        let response = ResponseError::error_response(error);
        let (response, body) = response.into_parts();
        let bytes = to_bytes(body).await.expect("reading response body succeeds");
        let payload = serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");
        (response, payload)
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_are_redacted(internal_error_case: Error) {
        let (response, payload) = response_payload(&internal_error_case).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace-id header is set by error_response")
            .to_str()
            .expect("trace-id is valid UTF-8");
        assert_eq!(header, TRACE_ID);
        assert_eq!(payload.code(), ErrorCode::InternalError);
        assert_eq!(payload.message(), "Internal Server Error");
        assert_eq!(payload.trace_id(), Some(TRACE_ID));
        assert!(payload.details().is_none());
    }

    #[rstest]
    #[actix_web::test]
    async fn client_errors_keep_details() {
        let error = Error::mandatory_fields_missing().with_details(json!({ "fields": ["title"] }));
        let (response, payload) = response_payload(&error).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(TRACE_ID_HEADER).is_none());
        assert_eq!(payload.message(), "Mandatory fields are missing");
        assert_eq!(payload.details(), Some(&json!({ "fields": ["title"] })));
    }
}
