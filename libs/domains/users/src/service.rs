use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// Service layer between the HTTP handlers and the user store
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users ordered by display name
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Vec<User> {
        self.repository.list().await
    }

    /// Register a new user. Input shape is validated by the caller.
    #[instrument(skip(self, input), fields(username = %input.username, email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.repository.create(input).await
    }

    /// Number of registered users
    pub async fn count_users(&self) -> usize {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::MockUserRepository;
    use uuid::Uuid;

    fn sample_user(name: &str) -> User {
        User {
            id: Uuid::now_v7(),
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_forwards_input() {
        let mut mock_repo = MockUserRepository::new();
        let expected = CreateUser::new("John Doe", "johndoe", "john@example.com");

        mock_repo
            .expect_create()
            .with(mockall::predicate::eq(expected.clone()))
            .times(1)
            .returning(|input| {
                Ok(User {
                    id: Uuid::now_v7(),
                    name: input.name,
                    username: input.username,
                    email: input.email,
                    created_at: chrono::Utc::now(),
                })
            });

        let service = UserService::new(mock_repo);
        let user = service.create_user(expected).await.unwrap();

        assert_eq!(user.username, "johndoe");
    }

    #[tokio::test]
    async fn test_create_user_propagates_conflict() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Err(UserError::DuplicateUsername(input.username)));

        let service = UserService::new(mock_repo);
        let result = service
            .create_user(CreateUser::new("Jane", "johndoe", "jane@example.com"))
            .await;

        assert_eq!(
            result,
            Err(UserError::DuplicateUsername("johndoe".to_string()))
        );
    }

    #[tokio::test]
    async fn test_list_and_count_users() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| vec![sample_user("Alice"), sample_user("Bob")]);
        mock_repo.expect_count().times(1).returning(|| 2);

        let service = UserService::new(mock_repo);

        let names: Vec<String> = service.list_users().await.into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(service.count_users().await, 2);
    }
}
