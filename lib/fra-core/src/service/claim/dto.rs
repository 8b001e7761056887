use one_dto_mapper::{From, Into};
use shared_types::ClaimId;
use time::OffsetDateTime;

use crate::model::claim::{Claim, ClaimStatus, ClaimType, NewClaim};

#[derive(Clone, Debug, Into)]
#[into(NewClaim)]
pub struct CreateClaimRequestDTO {
    pub beneficiary_name: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub claim_type: ClaimType,
    pub land_area: String,
    pub documents: Vec<String>,
    pub coordinates: Option<String>,
    pub anomaly_score: Option<f64>,
    pub anomaly_flags: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(Claim)]
pub struct ClaimResponseDTO {
    pub id: ClaimId,
    pub claim_code: String,
    pub beneficiary_name: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub claim_type: ClaimType,
    pub land_area: String,
    pub documents: Vec<String>,
    pub status: ClaimStatus,
    pub coordinates: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub anomaly_score: Option<f64>,
    pub anomaly_flags: Option<Vec<String>>,
}
