//! In-memory implementation of the `fra-core` repository traits. Records
//! live for the lifetime of the process; every [`DataLayer`] owns fully
//! isolated maps, so tests can build one store per case.

use std::sync::Arc;

use claim::ClaimProvider;
use contact_message::ContactMessageProvider;
use fra_core::repository::DataRepository;
use fra_core::repository::claim_repository::ClaimRepository;
use fra_core::repository::contact_message_repository::ContactMessageRepository;
use fra_core::repository::user_repository::UserRepository;
use user::UserProvider;

pub mod claim;
pub mod contact_message;
pub mod user;

#[derive(Clone)]
pub struct DataLayer {
    claim_repository: Arc<dyn ClaimRepository>,
    contact_message_repository: Arc<dyn ContactMessageRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl DataLayer {
    pub fn build() -> Self {
        Self {
            claim_repository: Arc::new(ClaimProvider::default()),
            contact_message_repository: Arc::new(ContactMessageProvider::default()),
            user_repository: Arc::new(UserProvider::default()),
        }
    }
}

impl Default for DataLayer {
    fn default() -> Self {
        Self::build()
    }
}

impl DataRepository for DataLayer {
    fn get_claim_repository(&self) -> Arc<dyn ClaimRepository> {
        self.claim_repository.clone()
    }

    fn get_contact_message_repository(&self) -> Arc<dyn ContactMessageRepository> {
        self.contact_message_repository.clone()
    }

    fn get_user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
