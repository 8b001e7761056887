use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{
    ContactMessageCreatedResponseRestDTO, ContactMessageListResponseRestDTO,
    CreateContactMessageRequestRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, OkOrErrorResponse};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactMessageRequestRestDTO,
    responses(OkOrErrorResponse<ContactMessageCreatedResponseRestDTO>),
    tag = "contact",
    summary = "Submit contact message",
    description = "Stores a message submitted through the contact form.",
)]
#[axum::debug_handler]
pub(crate) async fn post_contact_message(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateContactMessageRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<ContactMessageCreatedResponseRestDTO> {
    if let Err(errors) = request.validate() {
        tracing::error!("Contact request validation failure: {errors}");
        return ErrorResponse::for_validation(errors).into();
    }

    let result = state
        .core
        .contact_message_service
        .create_contact_message(request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "submitting contact message")
}

#[utoipa::path(
    get,
    path = "/api/contact",
    responses(OkOrErrorResponse<ContactMessageListResponseRestDTO>),
    tag = "contact",
    summary = "List contact messages",
    description = "Returns all stored contact messages, newest first.",
)]
pub(crate) async fn get_contact_messages(
    state: State<AppState>,
) -> OkOrErrorResponse<ContactMessageListResponseRestDTO> {
    let result = state
        .core
        .contact_message_service
        .get_contact_message_list()
        .await;
    OkOrErrorResponse::from_result(result, state, "listing contact messages")
}
