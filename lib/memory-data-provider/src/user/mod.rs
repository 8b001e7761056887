use std::collections::HashMap;
use std::sync::RwLock;

use fra_core::model::user::User;
use shared_types::UserId;

pub mod repository;


#[derive(Default)]
pub(crate) struct UserProvider {
    pub users: RwLock<HashMap<UserId, User>>,
}
