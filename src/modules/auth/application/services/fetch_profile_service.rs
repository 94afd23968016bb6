use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct FetchProfileService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .map(|user| user.to_profile())
            .ok_or(FetchProfileError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::tests::support::fakes::{user_fixture, InMemoryUsers};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_returns_profile_without_credentials() {
        let user = user_fixture("amy", Role::Patient);
        let svc = FetchProfileService::new(InMemoryUsers::with(vec![user.clone()]));

        let profile = svc.execute(UserId::from(user.id)).await.unwrap();

        assert_eq!(profile.username, "amy");
        assert_eq!(profile.email, "amy@example.com");
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("otp").is_none());
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let svc = FetchProfileService::new(InMemoryUsers::new());

        let result = svc.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(FetchProfileError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_query_failure() {
        let svc = FetchProfileService::new(InMemoryUsers::failing());

        let result = svc.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(FetchProfileError::QueryError(_))));
    }
}
