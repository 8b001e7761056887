use super::error::DataLayerError;
use crate::model::contact_message::{ContactMessage, NewContactMessage};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, DataLayerError>;

    /// Returns all stored messages, newest first.
    async fn get_contact_message_list(&self) -> Result<Vec<ContactMessage>, DataLayerError>;
}
