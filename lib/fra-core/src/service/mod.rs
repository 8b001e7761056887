pub mod claim;
pub mod contact_message;
pub mod error;
