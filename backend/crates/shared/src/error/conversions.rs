//! Response conversion for [`AppError`]
//!
//! Domain crates map their own error enums to `AppError` at the request
//! boundary; this module turns that into an RFC 7807 problem response.

#[cfg(feature = "axum")]
use super::app_error::AppError;

/// RFC 7807 Problem Details body
#[cfg(feature = "axum")]
#[derive(serde::Serialize)]
struct ProblemDetails<'a> {
    #[serde(rename = "type")]
    problem_type: String,
    title: &'static str,
    status: u16,
    detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'a str>,
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ProblemDetails {
            problem_type: format!("https://httpstatuses.io/{}", self.status_code()),
            title: self.kind().as_str(),
            status: self.status_code(),
            detail: self.message(),
            action: self.action(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;

    #[test]
    fn test_status_carried_through() {
        let response = AppError::new(ErrorKind::Conflict, "Duplicate identity").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::new(ErrorKind::ServiceUnavailable, "Store down").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_problem_body_is_json() {
        let response = AppError::bad_request("Malformed form").into_response();
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "application/json");
    }
}
