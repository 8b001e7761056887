use fra_core::service::contact_message::dto::ContactMessageResponseDTO;
use one_dto_mapper::convert_inner;

use super::dto::{ContactMessageCreatedResponseRestDTO, ContactMessageListResponseRestDTO};

impl From<ContactMessageResponseDTO> for ContactMessageCreatedResponseRestDTO {
    fn from(value: ContactMessageResponseDTO) -> Self {
        Self {
            success: true,
            message: "Contact message received successfully".to_string(),
            id: value.id,
        }
    }
}

impl From<Vec<ContactMessageResponseDTO>> for ContactMessageListResponseRestDTO {
    fn from(value: Vec<ContactMessageResponseDTO>) -> Self {
        Self {
            success: true,
            data: convert_inner(value),
        }
    }
}
