use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, UserId, UserProfile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Accounts ordered by name, optionally restricted to one role.
#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, role: Option<Role>) -> Result<Vec<UserProfile>, ListUsersError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    NotFound,

    #[error("Cannot delete doctor with existing appointments")]
    DoctorHasAppointments,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes an account together with the rows it owns.
///
/// With `role` set, the account must have that role or it is reported as
/// not found. Doctors that are referenced by any appointment are kept.
#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, role: Option<Role>) -> Result<(), DeleteUserError>;
}
