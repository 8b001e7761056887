use shared_types::ClaimId;
use strum::Display;
use time::OffsetDateTime;

/// A land-rights claim record. `claim_code` is the human-facing identifier
/// (`FRA` + 5 digits), distinct from the internal `id`; both are assigned by
/// the data provider at creation and never change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Claim {
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

/// Insert payload for a claim. Id, claim code, status and timestamps are
/// assigned by the store, so they do not appear here.
#[derive(Clone, Debug, PartialEq)]
pub struct NewClaim {
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

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ClaimType {
    #[strum(serialize = "Individual Forest Right")]
    IndividualForestRight,
    #[strum(serialize = "Community Forest Right")]
    CommunityForestRight,
    #[strum(serialize = "Other Traditional Rights")]
    OtherTraditionalRights,
}

/// Review state of a claim. Transitions are deliberately unconstrained: any
/// status may replace any other through the update operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}
