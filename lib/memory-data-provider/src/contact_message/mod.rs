use std::collections::HashMap;
use std::sync::RwLock;

use fra_core::model::contact_message::ContactMessage;
use shared_types::ContactMessageId;

pub mod repository;


#[derive(Default)]
pub(crate) struct ContactMessageProvider {
    pub messages: RwLock<HashMap<ContactMessageId, ContactMessage>>,
}
