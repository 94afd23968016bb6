use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserRepository, UserRepositoryError,
};

pub struct CreateUserService<R>
where
    R: UserRepository,
{
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> CreateUserService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<UserProfile, CreateUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            username: command.username().to_string(),
            email: command.email().to_string(),
            password_hash,
            role: command.role(),
            name: command.name().to_string(),
            phone: command.phone().cloned(),
            specialization: command.specialization().cloned(),
            experience_years: command.experience_years(),
        };

        let profile = self
            .user_repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameAlreadyExists
                | UserRepositoryError::EmailAlreadyExists => CreateUserError::UserAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
                UserRepositoryError::UserNotFound => CreateUserError::RepositoryError(
                    "unexpected not found while creating user".to_string(),
                ),
            })?;

        tracing::info!(user_id = %profile.id, role = %profile.role, "User account created");

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::ports::incoming::use_cases::CreateUserInput;
    use crate::tests::support::fakes::{user_fixture, InMemoryUsers, PlainHasher};

    fn input(username: &str, email: &str) -> CreateUserInput {
        CreateUserInput {
            username: username.to_string(),
            password: "secret1".to_string(),
            name: "New Patient".to_string(),
            email: email.to_string(),
            phone: Some("555-0101".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_creates_user_with_hashed_password() {
        let users = InMemoryUsers::new();
        let svc = CreateUserService::new(users.clone(), Arc::new(PlainHasher::default()));
        let cmd = CreateUserCommand::new(input("newbie", "new@example.com"), Role::Patient).unwrap();

        let profile = svc.execute(cmd).await.unwrap();

        assert_eq!(profile.username, "newbie");
        assert_eq!(profile.role, Role::Patient);
        let stored = users.get(profile.id).unwrap();
        assert_eq!(stored.password_hash, "hashed:secret1");
        assert_eq!(stored.phone.as_deref(), Some("555-0101"));
    }

    #[tokio::test]
    async fn test_duplicate_username_maps_to_already_exists() {
        let users = InMemoryUsers::with(vec![user_fixture("taken", Role::Patient)]);
        let svc = CreateUserService::new(users, Arc::new(PlainHasher::default()));
        let cmd = CreateUserCommand::new(input("taken", "other@example.com"), Role::Patient).unwrap();

        let result = svc.execute(cmd).await;

        assert!(matches!(result, Err(CreateUserError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_duplicate_email_maps_to_already_exists() {
        let users = InMemoryUsers::with(vec![user_fixture("taken", Role::Patient)]);
        let svc = CreateUserService::new(users, Arc::new(PlainHasher::default()));
        let cmd = CreateUserCommand::new(input("fresh", "taken@example.com"), Role::Patient).unwrap();

        let result = svc.execute(cmd).await;

        assert!(matches!(result, Err(CreateUserError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_hashing_failure_stops_creation() {
        let users = InMemoryUsers::new();
        let svc = CreateUserService::new(users.clone(), Arc::new(PlainHasher { failing: true }));
        let cmd = CreateUserCommand::new(input("newbie", "new@example.com"), Role::Patient).unwrap();

        let result = svc.execute(cmd).await;

        assert!(matches!(result, Err(CreateUserError::HashingFailed(_))));
        assert_eq!(users.len(), 0);
    }

    #[tokio::test]
    async fn test_database_error_is_repository_error() {
        let svc = CreateUserService::new(InMemoryUsers::failing(), Arc::new(PlainHasher::default()));
        let cmd = CreateUserCommand::new(input("newbie", "new@example.com"), Role::Admin).unwrap();

        let result = svc.execute(cmd).await;

        assert!(matches!(result, Err(CreateUserError::RepositoryError(_))));
    }
}
