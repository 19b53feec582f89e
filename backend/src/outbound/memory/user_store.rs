//! `UserRepository` backed by a locked map.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{
    ClaimPoints, DisplayName, EmailAddress, HashedPassword, StoredCredentials, User, UserId,
    ranking_order,
};

use super::lock;

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: HashedPassword,
}

/// In-memory implementation of the [`UserRepository`] port.
///
/// Email and display name uniqueness are enforced on insert, matching the
/// unique constraints of the PostgreSQL schema.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, StoredUser>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(
        &self,
        user: &User,
        password_hash: &HashedPassword,
    ) -> Result<(), UserPersistenceError> {
        let mut users = lock(&self.users);
        if users.values().any(|stored| stored.user.email() == user.email()) {
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }
        if users
            .values()
            .any(|stored| stored.user.display_name() == user.display_name())
        {
            return Err(UserPersistenceError::duplicate_display_name(
                user.display_name().as_ref(),
            ));
        }
        users.insert(
            user.id().clone(),
            StoredUser {
                user: user.clone(),
                password_hash: password_hash.clone(),
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(lock(&self.users).get(id).map(|stored| stored.user.clone()))
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserPersistenceError> {
        let users = lock(&self.users);
        Ok(ids
            .iter()
            .filter_map(|id| users.get(id).map(|stored| stored.user.clone()))
            .collect())
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, UserPersistenceError> {
        let users = lock(&self.users);
        Ok(users
            .values()
            .find(|stored| stored.user.email().as_ref() == email)
            .map(|stored| StoredCredentials {
                user_id: stored.user.id().clone(),
                password_hash: stored.password_hash.clone(),
                active: stored.user.is_active(),
            }))
    }

    async fn email_taken(&self, email: &EmailAddress) -> Result<bool, UserPersistenceError> {
        Ok(lock(&self.users)
            .values()
            .any(|stored| stored.user.email() == email))
    }

    async fn display_name_taken(
        &self,
        name: &DisplayName,
    ) -> Result<bool, UserPersistenceError> {
        Ok(lock(&self.users)
            .values()
            .any(|stored| stored.user.display_name() == name))
    }

    async fn increment_points(
        &self,
        id: &UserId,
        points: ClaimPoints,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = lock(&self.users);
        Ok(users.get_mut(id).map(|stored| {
            stored.user.credit(points);
            stored.user.clone()
        }))
    }

    async fn list_ranked(&self, limit: usize) -> Result<Vec<User>, UserPersistenceError> {
        let mut active: Vec<User> = lock(&self.users)
            .values()
            .filter(|stored| stored.user.is_active())
            .map(|stored| stored.user.clone())
            .collect();
        active.sort_by(ranking_order);
        active.truncate(limit);
        Ok(active)
    }

    async fn count_active(&self) -> Result<u64, UserPersistenceError> {
        let count = lock(&self.users)
            .values()
            .filter(|stored| stored.user.is_active())
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }
}
