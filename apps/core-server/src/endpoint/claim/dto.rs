use fra_core::model::claim::{ClaimStatus, ClaimType};
use fra_core::service::claim::dto::{ClaimResponseDTO, CreateClaimRequestDTO};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::ClaimId;
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Validate, Into)]
#[serde(rename_all = "camelCase")]
#[into(CreateClaimRequestDTO)]
pub struct CreateClaimRequestRestDTO {
    /// Full name of the person or community the claim is filed for.
    #[validate(length(min = 2))]
    pub beneficiary_name: String,
    #[validate(length(min = 1))]
    pub village: String,
    #[validate(length(min = 1))]
    pub district: String,
    #[validate(length(min = 1))]
    pub state: String,
    pub claim_type: ClaimTypeRestEnum,
    /// Free text, e.g. "2 acres".
    #[validate(length(min = 1))]
    pub land_area: String,
    /// Names of the supporting documents; at least one is required.
    #[validate(length(min = 1))]
    pub documents: Vec<String>,
    /// Optional "lat,lng" pair.
    pub coordinates: Option<String>,
    pub anomaly_score: Option<f64>,
    pub anomaly_flags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimStatusRequestRestDTO {
    pub status: ClaimStatusRestEnum,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ClaimResponseDTO)]
pub struct ClaimResponseRestDTO {
    pub id: ClaimId,
    /// Public claim code (`FRA` + 5 digits), distinct from `id`.
    #[serde(rename = "claimId")]
    #[schema(example = "FRA12345")]
    pub claim_code: String,
    pub beneficiary_name: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub claim_type: ClaimTypeRestEnum,
    pub land_area: String,
    pub documents: Vec<String>,
    pub status: ClaimStatusRestEnum,
    pub coordinates: Option<String>,
    #[serde(rename = "createdAt", serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(rename = "updatedAt", serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub last_modified: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_flags: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[from(ClaimType)]
#[into(ClaimType)]
pub enum ClaimTypeRestEnum {
    #[serde(rename = "Individual Forest Right")]
    IndividualForestRight,
    #[serde(rename = "Community Forest Right")]
    CommunityForestRight,
    #[serde(rename = "Other Traditional Rights")]
    OtherTraditionalRights,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "lowercase")]
#[from(ClaimStatus)]
#[into(ClaimStatus)]
pub enum ClaimStatusRestEnum {
    Pending,
    Approved,
    Rejected,
}

/// `POST /api/claims` envelope.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct SubmitClaimResponseRestDTO {
    pub success: bool,
    pub message: String,
    pub data: ClaimResponseRestDTO,
}

/// `GET /api/claims` envelope.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ClaimListResponseRestDTO {
    pub success: bool,
    pub data: Vec<ClaimResponseRestDTO>,
}

/// `GET /api/claims/{id}` and `PATCH /api/claims/{id}/status` envelope.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ClaimDetailResponseRestDTO {
    pub success: bool,
    pub data: ClaimResponseRestDTO,
}
