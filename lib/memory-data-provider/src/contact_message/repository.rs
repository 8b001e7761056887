use std::sync::PoisonError;

use fra_core::model::contact_message::{ContactMessage, NewContactMessage};
use fra_core::repository::contact_message_repository::ContactMessageRepository;
use fra_core::repository::error::DataLayerError;
use shared_types::ContactMessageId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::ContactMessageProvider;

#[async_trait::async_trait]
impl ContactMessageRepository for ContactMessageProvider {
    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, DataLayerError> {
        let mut messages = self
            .messages
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let message = ContactMessage {
            id: ContactMessageId::from(Uuid::new_v4()),
            name: message.name,
            email: message.email,
            organization: message.organization,
            message: message.message,
            created_date: OffsetDateTime::now_utc(),
        };

        messages.insert(message.id, message.clone());

        Ok(message)
    }

    async fn get_contact_message_list(&self) -> Result<Vec<ContactMessage>, DataLayerError> {
        let messages = self.messages.read().unwrap_or_else(PoisonError::into_inner);

        let mut messages: Vec<ContactMessage> = messages.values().cloned().collect();
        messages.sort_by(|a, b| b.created_date.cmp(&a.created_date));

        Ok(messages)
    }
}
