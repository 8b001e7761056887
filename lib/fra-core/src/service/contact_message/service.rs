use one_dto_mapper::convert_inner;

use super::ContactMessageService;
use super::dto::{ContactMessageResponseDTO, CreateContactMessageRequestDTO};
use super::validator::validate_create_request;
use crate::service::error::ServiceError;

impl ContactMessageService {
    /// Stores a submitted contact message and returns the full record.
    pub async fn create_contact_message(
        &self,
        request: CreateContactMessageRequestDTO,
    ) -> Result<ContactMessageResponseDTO, ServiceError> {
        validate_create_request(&request)?;

        let message = self
            .contact_message_repository
            .create_contact_message(request.into())
            .await?;

        Ok(message.into())
    }

    /// Returns all stored messages, newest first.
    pub async fn get_contact_message_list(
        &self,
    ) -> Result<Vec<ContactMessageResponseDTO>, ServiceError> {
        let messages = self
            .contact_message_repository
            .get_contact_message_list()
            .await?;

        Ok(convert_inner(messages))
    }
}
