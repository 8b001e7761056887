use one_dto_mapper::{From, Into};
use shared_types::ContactMessageId;
use time::OffsetDateTime;

use crate::model::contact_message::{ContactMessage, NewContactMessage};

#[derive(Clone, Debug, Into)]
#[into(NewContactMessage)]
pub struct CreateContactMessageRequestDTO {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(ContactMessage)]
pub struct ContactMessageResponseDTO {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
    pub created_date: OffsetDateTime,
}
