use std::sync::Arc;

use claim_repository::ClaimRepository;
use contact_message_repository::ContactMessageRepository;
use user_repository::UserRepository;

pub mod claim_repository;
pub mod contact_message_repository;
pub mod error;
pub mod user_repository;

/// Aggregates the per-record-kind repositories of one storage backend.
pub trait DataRepository: Send + Sync {
    fn get_claim_repository(&self) -> Arc<dyn ClaimRepository>;
    fn get_contact_message_repository(&self) -> Arc<dyn ContactMessageRepository>;
    fn get_user_repository(&self) -> Arc<dyn UserRepository>;
}
