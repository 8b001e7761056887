#![cfg_attr(feature = "strict", deny(warnings))]

//! Domain core of the FRA claim tracking service: models, repository
//! contracts and the service layer. Storage is injected through
//! [`repository::DataRepository`] so that every consumer (server, tests)
//! constructs its own isolated store.

use std::sync::Arc;

use repository::DataRepository;
use service::claim::ClaimService;
use service::contact_message::ContactMessageService;

pub mod model;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct FraCore {
    pub claim_service: ClaimService,
    pub contact_message_service: ContactMessageService,
}

impl FraCore {
    pub fn new(data_provider: Arc<dyn DataRepository>) -> Self {
        Self {
            claim_service: ClaimService::new(data_provider.get_claim_repository()),
            contact_message_service: ContactMessageService::new(
                data_provider.get_contact_message_repository(),
            ),
        }
    }
}
