use fra_core::service::contact_message::dto::{
    ContactMessageResponseDTO, CreateContactMessageRequestDTO,
};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::ContactMessageId;
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Validate, Into)]
#[serde(rename_all = "camelCase")]
#[into(CreateContactMessageRequestDTO)]
pub struct CreateContactMessageRequestRestDTO {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub organization: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ContactMessageResponseDTO)]
pub struct ContactMessageResponseRestDTO {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
    #[serde(rename = "createdAt", serialize_with = "front_time")]
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    pub created_date: OffsetDateTime,
}

/// `POST /api/contact` envelope. Only the id of the stored message is
/// reported back.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ContactMessageCreatedResponseRestDTO {
    pub success: bool,
    pub message: String,
    pub id: ContactMessageId,
}

/// `GET /api/contact` envelope.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ContactMessageListResponseRestDTO {
    pub success: bool,
    pub data: Vec<ContactMessageResponseRestDTO>,
}
