use super::dto::CreateContactMessageRequestDTO;
use crate::service::error::ValidationError;

/// Format checks live in the REST layer; this only guards the store against
/// obviously unusable records.
pub(crate) fn validate_create_request(
    request: &CreateContactMessageRequestDTO,
) -> Result<(), ValidationError> {
    if request.name.trim().chars().count() < 2 {
        return Err(ValidationError::FieldTooShort {
            field: "name",
            min: 2,
        });
    }

    for (field, value) in [
        ("email", &request.email),
        ("organization", &request.organization),
        ("message", &request.message),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::BlankField { field });
        }
    }

    Ok(())
}
