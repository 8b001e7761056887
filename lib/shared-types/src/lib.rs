//! Newtype identifiers shared between the core, the data provider and the HTTP app.

mod claim_id;
mod contact_message_id;
mod macros;
mod user_id;

pub use claim_id::ClaimId;
pub use contact_message_id::ContactMessageId;
pub use user_id::UserId;
