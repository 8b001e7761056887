use shared_types::ContactMessageId;
use time::OffsetDateTime;

/// A message submitted through the contact form. Write-once: never updated
/// or deleted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}
