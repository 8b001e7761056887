use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use fra_core::service::error::ServiceError;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::{Cause, ErrorResponseRestDTO};
use crate::router::AppState;

#[derive(utoipa::IntoResponses)]
pub(crate) enum ErrorResponse {
    #[response(status = 400, description = "Bad Request")]
    BadRequest(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 404, description = "Entity Not Found")]
    NotFound(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 500, description = "Internal error")]
    ServerError(#[to_schema] ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic() -> Self {
        Self::ServerError(ErrorResponseRestDTO::new("Internal server error"))
    }

    /// Field-level failures reported by the REST request validators.
    pub fn for_validation(errors: validator::ValidationErrors) -> Self {
        Self::BadRequest(errors.into())
    }

    fn from_service_error(error: ServiceError, hide_cause: bool) -> Self {
        match error {
            ServiceError::EntityNotFound(error) => {
                Self::NotFound(ErrorResponseRestDTO::new(error.to_string()))
            }
            ServiceError::Validation(error) => {
                Self::BadRequest(ErrorResponseRestDTO::new(error.to_string()))
            }
            ServiceError::Repository(error) => Self::ServerError(
                ErrorResponseRestDTO {
                    success: false,
                    message: "Internal server error".to_string(),
                    errors: None,
                    cause: Some(Cause::with_message_from_error(&error)),
                }
                .hide_cause(hide_cause),
            ),
        }
    }

    #[track_caller]
    fn from_service_error_with_trace(
        error: ServiceError,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        let location = std::panic::Location::caller();
        tracing::error!(%error, %location, "Error while {action_description}");
        Self::from_service_error(error, state.config.hide_error_response_cause)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, Json(error)).into_response(),
            Self::NotFound(error) => (StatusCode::NOT_FOUND, Json(error)).into_response(),
            Self::ServerError(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}

fn with_error_responses<SuccessResponse: utoipa::IntoResponses>()
-> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
    use utoipa::IntoResponses;
    let mut responses = SuccessResponse::responses();
    responses.append(&mut ErrorResponse::responses());
    responses
}

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                state,
                action_description,
            )),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}

impl<T: ToSchema> utoipa::IntoResponses for OkOrErrorResponse<T> {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        #[derive(utoipa::IntoResponses)]
        #[response(status = 200, description = "OK")]
        struct SuccessResponse<T: ToSchema>(#[to_schema] T);

        with_error_responses::<SuccessResponse<T>>()
    }
}

impl<T> From<ErrorResponse> for OkOrErrorResponse<T> {
    fn from(value: ErrorResponse) -> Self {
        Self::Error(value)
    }
}
