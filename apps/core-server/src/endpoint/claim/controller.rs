use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use shared_types::ClaimId;
use validator::Validate;

use super::dto::{
    ClaimDetailResponseRestDTO, ClaimListResponseRestDTO, CreateClaimRequestRestDTO,
    SubmitClaimResponseRestDTO, UpdateClaimStatusRequestRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, OkOrErrorResponse};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/claims",
    request_body = CreateClaimRequestRestDTO,
    responses(OkOrErrorResponse<SubmitClaimResponseRestDTO>),
    tag = "claim_management",
    summary = "Submit claim",
    description = indoc::formatdoc! {"
        Submits a land-rights claim. The store assigns the internal id, the
        public claim code and the initial `pending` status.
    "},
)]
#[axum::debug_handler]
pub(crate) async fn post_claim(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateClaimRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<SubmitClaimResponseRestDTO> {
    if let Err(errors) = request.validate() {
        tracing::error!("Claim request validation failure: {errors}");
        return ErrorResponse::for_validation(errors).into();
    }

    let result = state.core.claim_service.create_claim(request.into()).await;
    OkOrErrorResponse::from_result(result, state, "submitting claim")
}

#[utoipa::path(
    get,
    path = "/api/claims",
    responses(OkOrErrorResponse<ClaimListResponseRestDTO>),
    tag = "claim_management",
    summary = "List claims",
    description = "Returns all claims, newest first.",
)]
pub(crate) async fn get_claims(
    state: State<AppState>,
) -> OkOrErrorResponse<ClaimListResponseRestDTO> {
    let result = state.core.claim_service.get_claim_list().await;
    OkOrErrorResponse::from_result(result, state, "listing claims")
}

#[utoipa::path(
    get,
    path = "/api/claims/{id}",
    responses(OkOrErrorResponse<ClaimDetailResponseRestDTO>),
    params(
        ("id" = ClaimId, Path, description = "Claim id")
    ),
    tag = "claim_management",
    summary = "Retrieve claim",
    description = "Returns details of a single claim.",
)]
pub(crate) async fn get_claim(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ClaimId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<ClaimDetailResponseRestDTO> {
    let result = state.core.claim_service.get_claim(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting claim details")
}

#[utoipa::path(
    patch,
    path = "/api/claims/{id}/status",
    request_body = UpdateClaimStatusRequestRestDTO,
    responses(OkOrErrorResponse<ClaimDetailResponseRestDTO>),
    params(
        ("id" = ClaimId, Path, description = "Claim id")
    ),
    tag = "claim_management",
    summary = "Update claim status",
    description = indoc::formatdoc! {"
        Overwrites the review status of a claim. Transitions are not
        constrained; any status may replace any other.
    "},
)]
pub(crate) async fn patch_claim_status(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<ClaimId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateClaimStatusRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<ClaimDetailResponseRestDTO> {
    let result = state
        .core
        .claim_service
        .update_claim_status(&id, request.status.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "updating claim status")
}
