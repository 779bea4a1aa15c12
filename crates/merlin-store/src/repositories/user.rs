//! In-memory implementation of UserRepository

use async_trait::async_trait;
use tracing::instrument;

use merlin_core::entities::{NewUser, User};
use merlin_core::error::DomainError;
use merlin_core::traits::{RepoResult, UserRepository};

use crate::store::MemoryStore;

/// In-memory implementation of UserRepository
#[derive(Clone)]
pub struct MemUserRepository {
    store: MemoryStore,
}

impl MemUserRepository {
    /// Create a new MemUserRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>> {
        Ok(self.store.read().users.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .store
            .read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: NewUser) -> RepoResult<User> {
        let mut tables = self.store.write();

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameTaken(user.username));
        }

        let id = tables.user_ids.next_id();
        let user = user.into_user(id);
        tables.users.insert(id, user.clone());

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn set_admin(&self, id: i32, is_admin: bool) -> RepoResult<Option<User>> {
        let mut tables = self.store.write();

        Ok(tables.users.get_mut(&id).map(|user| {
            user.is_admin = is_admin;
            user.clone()
        }))
    }
}
