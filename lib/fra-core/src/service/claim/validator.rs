use super::dto::CreateClaimRequestDTO;
use crate::service::error::ValidationError;

const MIN_NAME_LENGTH: usize = 2;

/// Guards the store against records the REST layer should already have
/// rejected. Pure check, no side effects.
pub(crate) fn validate_create_request(
    request: &CreateClaimRequestDTO,
) -> Result<(), ValidationError> {
    text_at_least("beneficiaryName", &request.beneficiary_name, MIN_NAME_LENGTH)?;

    for (field, value) in [
        ("village", &request.village),
        ("district", &request.district),
        ("state", &request.state),
        ("landArea", &request.land_area),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::BlankField { field });
        }
    }

    if request.documents.is_empty() {
        return Err(ValidationError::EmptyDocuments);
    }

    Ok(())
}

fn text_at_least(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::FieldTooShort { field, min });
    }

    Ok(())
}
