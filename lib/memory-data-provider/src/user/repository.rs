use std::sync::PoisonError;

use fra_core::model::user::{NewUser, User};
use fra_core::repository::error::DataLayerError;
use fra_core::repository::user_repository::UserRepository;
use shared_types::UserId;
use uuid::Uuid;

use super::UserProvider;

#[async_trait::async_trait]
impl UserRepository for UserProvider {
    async fn create_user(&self, user: NewUser) -> Result<User, DataLayerError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        let user = User {
            id: UserId::from(Uuid::new_v4()),
            username: user.username,
            password: user.password,
        };

        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);

        Ok(users.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DataLayerError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);

        Ok(users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }
}
