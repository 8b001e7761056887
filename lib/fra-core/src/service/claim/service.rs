use one_dto_mapper::convert_inner;
use shared_types::ClaimId;

use super::ClaimService;
use super::dto::{ClaimResponseDTO, CreateClaimRequestDTO};
use super::validator::validate_create_request;
use crate::model::claim::ClaimStatus;
use crate::repository::error::DataLayerError;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl ClaimService {
    /// Submits a new claim. The store assigns the internal id, the public
    /// claim code and the initial `pending` status; nothing is written when
    /// validation fails.
    pub async fn create_claim(
        &self,
        request: CreateClaimRequestDTO,
    ) -> Result<ClaimResponseDTO, ServiceError> {
        validate_create_request(&request)?;

        let claim = self.claim_repository.create_claim(request.into()).await?;

        Ok(claim.into())
    }

    /// Returns all claims, newest first.
    pub async fn get_claim_list(&self) -> Result<Vec<ClaimResponseDTO>, ServiceError> {
        let claims = self.claim_repository.get_claim_list().await?;

        Ok(convert_inner(claims))
    }

    /// Returns details of a single claim.
    ///
    /// # Arguments
    ///
    /// * `ClaimId` - Id of an existing claim
    pub async fn get_claim(&self, id: &ClaimId) -> Result<ClaimResponseDTO, ServiceError> {
        let claim = self.claim_repository.get_claim(id).await?;

        let Some(claim) = claim else {
            return Err(EntityNotFoundError::Claim(*id).into());
        };

        Ok(claim.into())
    }

    /// Overwrites the status of an existing claim. Any status may replace
    /// any other; the last-modified timestamp advances on every call.
    pub async fn update_claim_status(
        &self,
        id: &ClaimId,
        status: ClaimStatus,
    ) -> Result<ClaimResponseDTO, ServiceError> {
        let result = self.claim_repository.update_claim_status(id, status).await;

        match result {
            Ok(claim) => Ok(claim.into()),
            Err(DataLayerError::RecordNotUpdated) => Err(EntityNotFoundError::Claim(*id).into()),
            Err(err) => Err(err.into()),
        }
    }
}
