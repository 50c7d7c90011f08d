use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};

/// Repository trait for user persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All committed users, ordered by display name (case-insensitive)
    async fn list(&self) -> Vec<User>;

    /// Create a user, enforcing case-insensitive email and username uniqueness
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Number of committed users
    async fn count(&self) -> usize;
}

/// Process-lifetime, in-memory user store.
///
/// Uniqueness is enforced with a reserve-then-commit protocol over two
/// concurrent indexes, so writers with different keys never contend on a
/// registry-wide lock. Locks are always taken in the order
/// `emails` -> `usernames` -> `users`, and no two are held at once.
///
/// Readers only consult `users`, which holds fully committed records, so a
/// reservation made by an in-flight `create` is never visible to `list`.
///
/// Cloning is cheap and every clone shares the same state.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    /// normalized email -> email as first admitted
    emails: Arc<DashMap<String, String>>,
    /// normalized username -> username as first admitted
    usernames: Arc<DashMap<String, String>>,
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    next_id: fn() -> Uuid,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::with_id_generator(Uuid::now_v7)
    }
}

fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Atomically inserts `key -> value` unless `key` is already present.
fn reserve(index: &DashMap<String, String>, key: String, value: &str) -> bool {
    match index.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(value.to_string());
            true
        }
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that draws user ids from `next_id` instead of UUIDv7.
    pub fn with_id_generator(next_id: fn() -> Uuid) -> Self {
        Self {
            emails: Arc::default(),
            usernames: Arc::default(),
            users: Arc::default(),
            next_id,
        }
    }

    /// Inserts the record under a freshly generated id, regenerating on a
    /// collision.
    fn commit(&self, input: CreateUser) -> User {
        let mut users = self.users.write();
        loop {
            let id = (self.next_id)();
            if users.contains_key(&id) {
                tracing::warn!(%id, "Generated user id collided, regenerating");
                continue;
            }
            let user = User::new(id, input);
            users.insert(id, user.clone());
            return user;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().values().cloned().collect();

        // Upper-case folding: '_' and friends sort after letters.
        users.sort_by_cached_key(|u| (u.name.to_uppercase(), u.id));
        users
    }

    async fn count(&self) -> usize {
        self.users.read().len()
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let email_key = normalize(&input.email);
        if !reserve(&self.emails, email_key.clone(), &input.email) {
            tracing::debug!(email = %input.email, "Email already reserved");
            return Err(UserError::DuplicateEmail(input.email));
        }

        let username_key = normalize(&input.username);
        if !reserve(&self.usernames, username_key, &input.username) {
            self.emails.remove(&email_key);
            tracing::debug!(
                username = %input.username,
                email = %input.email,
                "Username already reserved, released email reservation"
            );
            return Err(UserError::DuplicateUsername(input.username));
        }

        let user = self.commit(input);

        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            username = %user.username,
            "Created user"
        );
        Ok(user)
    }
}
