use shared_types::UserId;

/// Stored account record. No HTTP surface exists for users yet; the record
/// kind is kept because the store tracks it alongside claims and contact
/// messages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
