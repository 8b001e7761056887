use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use convert_case::{Case, Casing};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body shared by every endpoint: `success` is always `false`,
/// `errors` lists field-level validation failures and `cause` carries the
/// detail of an internal error (hidden when the server is configured so).
#[derive(Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorRestDTO>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorRestDTO {
    pub field: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct Cause {
    pub message: String,
}

impl ErrorResponseRestDTO {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
            cause: None,
        }
    }

    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Cause {
        Cause {
            message: error.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ErrorResponseRestDTO {
    fn from(value: validator::ValidationErrors) -> Self {
        let errors = value
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                // struct fields are snake_case, the wire format is camelCase
                let field = field.to_case(Case::Camel);
                errors
                    .iter()
                    .map(move |error| FieldErrorRestDTO {
                        field: field.to_owned(),
                        message: error.to_string(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            success: false,
            message: "Invalid form data".to_string(),
            errors: Some(errors),
            cause: None,
        }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

macro_rules! gen_from_rejection {
    ($from:ty, $rejection:ty ) => {
        impl From<$from> for $rejection {
            fn from(value: $from) -> Self {
                Self {
                    success: false,
                    message: "Invalid request".to_string(),
                    errors: None,
                    cause: Some(Cause {
                        message: value.body_text(),
                    }),
                }
            }
        }
    };
}

gen_from_rejection!(JsonRejection, ErrorResponseRestDTO);
gen_from_rejection!(PathRejection, ErrorResponseRestDTO);
