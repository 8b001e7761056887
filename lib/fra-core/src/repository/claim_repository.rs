use shared_types::ClaimId;

use super::error::DataLayerError;
use crate::model::claim::{Claim, ClaimStatus, NewClaim};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ClaimRepository: Send + Sync {
    /// Stores a new claim. The implementation assigns the internal id, a
    /// unique claim code, the initial `pending` status and both timestamps
    /// (equal at creation), and returns the full record.
    async fn create_claim(&self, claim: NewClaim) -> Result<Claim, DataLayerError>;

    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, DataLayerError>;

    /// Returns all claims ordered by creation time, newest first.
    async fn get_claim_list(&self) -> Result<Vec<Claim>, DataLayerError>;

    /// Overwrites the status of an existing claim and refreshes its
    /// last-modified timestamp. Fails with
    /// [`DataLayerError::RecordNotUpdated`] when the id is unknown.
    async fn update_claim_status(
        &self,
        id: &ClaimId,
        status: ClaimStatus,
    ) -> Result<Claim, DataLayerError>;
}
