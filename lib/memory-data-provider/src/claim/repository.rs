use std::collections::HashMap;
use std::sync::PoisonError;

use fra_core::model::claim::{Claim, ClaimStatus, NewClaim};
use fra_core::repository::claim_repository::ClaimRepository;
use fra_core::repository::error::DataLayerError;
use rand::Rng;
use shared_types::ClaimId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::ClaimProvider;

const CLAIM_CODE_PREFIX: &str = "FRA";
const CLAIM_CODE_ATTEMPTS: usize = 8;

/// Claim codes are `FRA` + 5 random digits. The space is small, so the code
/// is re-rolled on collision, a bounded number of times.
fn generate_claim_code(claims: &HashMap<ClaimId, Claim>) -> Result<String, DataLayerError> {
    let mut rng = rand::thread_rng();

    for _ in 0..CLAIM_CODE_ATTEMPTS {
        let code = format!("{CLAIM_CODE_PREFIX}{}", rng.gen_range(10000..100000));
        if !claims.values().any(|claim| claim.claim_code == code) {
            return Ok(code);
        }
    }

    Err(DataLayerError::ClaimCodeExhausted)
}

#[async_trait::async_trait]
impl ClaimRepository for ClaimProvider {
    async fn create_claim(&self, claim: NewClaim) -> Result<Claim, DataLayerError> {
        // every mutation is a single insert or field write, so the map stays
        // consistent even across a poisoned lock
        let mut claims = self.claims.write().unwrap_or_else(PoisonError::into_inner);

        let now = OffsetDateTime::now_utc();
        let claim = Claim {
            id: ClaimId::from(Uuid::new_v4()),
            claim_code: generate_claim_code(&claims)?,
            beneficiary_name: claim.beneficiary_name,
            village: claim.village,
            district: claim.district,
            state: claim.state,
            claim_type: claim.claim_type,
            land_area: claim.land_area,
            documents: claim.documents,
            status: ClaimStatus::Pending,
            coordinates: claim.coordinates,
            created_date: now,
            last_modified: now,
            anomaly_score: claim.anomaly_score,
            anomaly_flags: claim.anomaly_flags,
        };

        claims.insert(claim.id, claim.clone());

        Ok(claim)
    }

    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, DataLayerError> {
        let claims = self.claims.read().unwrap_or_else(PoisonError::into_inner);

        Ok(claims.get(id).cloned())
    }

    async fn get_claim_list(&self) -> Result<Vec<Claim>, DataLayerError> {
        let claims = self.claims.read().unwrap_or_else(PoisonError::into_inner);

        let mut claims: Vec<Claim> = claims.values().cloned().collect();
        claims.sort_by(|a, b| b.created_date.cmp(&a.created_date));

        Ok(claims)
    }

    async fn update_claim_status(
        &self,
        id: &ClaimId,
        status: ClaimStatus,
    ) -> Result<Claim, DataLayerError> {
        let mut claims = self.claims.write().unwrap_or_else(PoisonError::into_inner);

        let Some(claim) = claims.get_mut(id) else {
            return Err(DataLayerError::RecordNotUpdated);
        };

        // the wall clock may not have ticked since the last write; the
        // invariant is that last_modified moves strictly forward on every
        // status change
        claim.status = status;
        claim.last_modified =
            OffsetDateTime::now_utc().max(claim.last_modified + time::Duration::NANOSECOND);

        Ok(claim.clone())
    }
}
