use fra_core::service::claim::dto::ClaimResponseDTO;
use one_dto_mapper::convert_inner;

use super::dto::{ClaimDetailResponseRestDTO, ClaimListResponseRestDTO, SubmitClaimResponseRestDTO};

impl From<ClaimResponseDTO> for SubmitClaimResponseRestDTO {
    fn from(value: ClaimResponseDTO) -> Self {
        Self {
            success: true,
            message: "FRA claim submitted successfully".to_string(),
            data: value.into(),
        }
    }
}

impl From<ClaimResponseDTO> for ClaimDetailResponseRestDTO {
    fn from(value: ClaimResponseDTO) -> Self {
        Self {
            success: true,
            data: value.into(),
        }
    }
}

impl From<Vec<ClaimResponseDTO>> for ClaimListResponseRestDTO {
    fn from(value: Vec<ClaimResponseDTO>) -> Self {
        Self {
            success: true,
            data: convert_inner(value),
        }
    }
}
